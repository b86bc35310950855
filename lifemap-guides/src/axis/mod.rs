pub mod band;
pub mod numeric;
pub mod opts;

use lifemap_common::types::{TextAlign, TextBaseline};
use lifemap_common::value::ScalarOrArray;
use lifemap_scenegraph::marks::{group::SceneGroup, rule::SceneRuleMark, text::SceneTextMark};

use opts::AxisConfig;

/// Offset that centers 1px lines on pixel centers
const PIXEL_OFFSET: f32 = 0.5;

/// Vertical offset of tick labels in ems, so the cap height sits below the tick
const LABEL_DY: f32 = 0.71;

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Position along the axis in pixels
    pub position: f32,
    pub label: String,
}

/// Tick positions and labels of an axis together with the pixel range it spans
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub range: (f32, f32),
    pub ticks: Vec<AxisTick>,
}

impl AxisSpec {
    pub fn positions(&self) -> Vec<f32> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|t| t.label.clone()).collect()
    }
}

/// Builds the marks of a bottom-oriented axis: a domain line with outer ticks,
/// one tick line per tick and a centered label under each tick.
pub fn make_bottom_axis_marks(
    spec: &AxisSpec,
    name: &str,
    origin: [f32; 2],
    config: &AxisConfig,
) -> SceneGroup {
    let mut group = SceneGroup::new(name).with_origin(origin);

    let left = f32::min(spec.range.0, spec.range.1) + PIXEL_OFFSET;
    let right = f32::max(spec.range.0, spec.range.1) + PIXEL_OFFSET;
    let tick_size = config.tick_size;

    // Domain line with outer ticks at both ends
    group.push(SceneRuleMark {
        name: format!("{name}-domain"),
        len: 3,
        x: ScalarOrArray::new_array(vec![left, left, right]),
        y: ScalarOrArray::new_array(vec![tick_size, PIXEL_OFFSET, PIXEL_OFFSET]),
        x2: ScalarOrArray::new_array(vec![left, right, right]),
        y2: ScalarOrArray::new_array(vec![PIXEL_OFFSET, PIXEL_OFFSET, tick_size]),
        stroke: ScalarOrArray::new_scalar(config.stroke),
        stroke_width: ScalarOrArray::new_scalar(1.0),
        ..Default::default()
    });

    let tick_x = spec
        .ticks
        .iter()
        .map(|t| t.position + PIXEL_OFFSET)
        .collect::<Vec<_>>();

    group.push(SceneRuleMark {
        name: format!("{name}-ticks"),
        len: spec.ticks.len() as u32,
        x: ScalarOrArray::new_array(tick_x.clone()),
        y: ScalarOrArray::new_scalar(0.0),
        x2: ScalarOrArray::new_array(tick_x.clone()),
        y2: ScalarOrArray::new_scalar(tick_size),
        stroke: ScalarOrArray::new_scalar(config.stroke),
        stroke_width: ScalarOrArray::new_scalar(1.0),
        ..Default::default()
    });

    group.push(SceneTextMark {
        name: format!("{name}-labels"),
        len: spec.ticks.len() as u32,
        text: ScalarOrArray::new_array(spec.labels()),
        x: ScalarOrArray::new_array(tick_x),
        y: ScalarOrArray::new_scalar(tick_size + config.tick_padding),
        dy: ScalarOrArray::new_scalar(LABEL_DY),
        align: ScalarOrArray::new_scalar(TextAlign::Center),
        baseline: ScalarOrArray::new_scalar(TextBaseline::Alphabetic),
        color: ScalarOrArray::new_scalar(config.label_color),
        font: ScalarOrArray::new_scalar(config.font.clone()),
        font_size: ScalarOrArray::new_scalar(config.font_size),
        ..Default::default()
    });

    group
}
