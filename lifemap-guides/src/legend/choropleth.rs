use itertools::Itertools;
use lifemap_common::types::{RgbaColor, TextAlign, TextBaseline};
use lifemap_common::value::ScalarOrArray;
use lifemap_scales::band::BandScale;
use lifemap_scales::color::continuous::ContinuousColorScale;
use lifemap_scales::color::{BinnedColorScale, ColorScale, ColorScaleKind, NominalColorScale};
use lifemap_scales::format::LegendMode;
use lifemap_scales::numeric::linear::{LinearNumericScale, LinearNumericScaleConfig};
use lifemap_scales::numeric::log::{LogNumericScale, LogNumericScaleConfig};
use lifemap_scales::numeric::{ContinuousNumericScale, NumericScale};
use lifemap_scenegraph::marks::group::SceneGroup;
use lifemap_scenegraph::marks::rect::SceneRectMark;
use lifemap_scenegraph::marks::text::SceneTextMark;
use lifemap_scenegraph::scene_graph::SceneGraph;
use log::debug;

use super::config::LegendConfig;
use crate::axis::band::band_axis_spec;
use crate::axis::numeric::numeric_axis_spec;
use crate::axis::opts::AxisConfig;
use crate::axis::{make_bottom_axis_marks, AxisSpec};
use crate::error::LifemapGuidesError;

/// Name of the top-level scene group a legend render owns
pub const LEGEND_GROUP_NAME: &str = "legend";

/// Pixel layout of a legend, derived from its outer size and margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendGeometry {
    pub width: f32,
    pub height: f32,
    pub bar_width: f32,
    pub bar_height: f32,
    /// Top-left corner of the color bar
    pub bar_origin: [f32; 2],
    /// Origin of the axis line under the bar
    pub axis_origin: [f32; 2],
}

impl LegendGeometry {
    pub fn try_new(
        width: f32,
        height: f32,
        config: &LegendConfig,
    ) -> Result<Self, LifemapGuidesError> {
        let bar_width = width - config.margin_x * 2.0;
        let bar_height = height - config.margin_top - config.margin_bottom;
        if !(bar_width > 0.0 && bar_height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(LifemapGuidesError::InvalidLegendDimensions {
                width,
                height,
                bar_width,
                bar_height,
            });
        }
        Ok(Self {
            width,
            height,
            bar_width,
            bar_height,
            bar_origin: [config.margin_x, config.label_y + bar_height],
            axis_origin: [config.margin_x, height],
        })
    }
}

/// One colored rectangle of the bar, in bar-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendSegment {
    pub x: f32,
    pub width: f32,
    pub color: RgbaColor,
}

/// A laid-out legend, ready to be turned into scene marks
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub kind: ColorScaleKind,
    pub geometry: LegendGeometry,
    pub segments: Vec<LegendSegment>,
    pub axis: AxisSpec,
    /// Bin boundaries `[min, breakpoints.., max]` of a binned scale
    pub boundaries: Option<Vec<f32>>,
    pub low_label: String,
    pub high_label: String,
}

/// Lays out a legend for `scale` in a `width` x `height` area.
///
/// The drawing strategy follows the scale kind: binned scales get one
/// rectangle per bin with ticks pinned to the bin boundaries, continuous
/// scales are approximated by fixed-width columns and nominal scales get one
/// band per sorted category.
pub fn make_legend(
    scale: &ColorScale,
    width: f32,
    height: f32,
    mode: LegendMode,
    config: &LegendConfig,
) -> Result<Legend, LifemapGuidesError> {
    let geometry = LegendGeometry::try_new(width, height, config)?;
    debug!(
        "Laying out {} legend ({mode} mode) with a {}x{} bar",
        scale.kind(),
        geometry.bar_width,
        geometry.bar_height
    );

    let (segments, axis, boundaries) = match scale {
        ColorScale::Binned(binned) => {
            let (segments, axis, boundaries) = binned_layout(binned, &geometry, mode, config)?;
            (segments, axis, Some(boundaries))
        }
        ColorScale::Continuous(continuous) => {
            let (segments, axis) = continuous_layout(continuous, &geometry, mode, config)?;
            (segments, axis, None)
        }
        ColorScale::Nominal(nominal) => {
            let (segments, axis) = nominal_layout(nominal, &geometry, config)?;
            (segments, axis, None)
        }
    };

    Ok(Legend {
        kind: scale.kind(),
        geometry,
        segments,
        axis,
        boundaries,
        low_label: config.low_label.clone(),
        high_label: config.high_label.clone(),
    })
}

/// Builds the legend's scene group without attaching it to a scene
pub fn make_legend_marks(
    scale: &ColorScale,
    width: f32,
    height: f32,
    mode: LegendMode,
    config: &LegendConfig,
) -> Result<SceneGroup, LifemapGuidesError> {
    Ok(make_legend(scale, width, height, mode, config)?.to_scene_group(config))
}

/// Renders the legend into `target`, replacing the output of any previous render
pub fn render_legend(
    target: &mut SceneGraph,
    scale: &ColorScale,
    width: f32,
    height: f32,
    mode: LegendMode,
    config: &LegendConfig,
) -> Result<Legend, LifemapGuidesError> {
    let legend = make_legend(scale, width, height, mode, config)?;
    let group = legend.to_scene_group(config);
    group.marks.iter().try_for_each(|m| m.validate())?;

    if target.replace_group(group).is_some() {
        debug!("Replaced previous legend render");
    }
    Ok(legend)
}

impl Legend {
    pub fn to_scene_group(&self, config: &LegendConfig) -> SceneGroup {
        let geometry = &self.geometry;

        let labels = SceneGroup::new("legend-labels").with_mark(SceneTextMark {
            name: "legend-labels".to_string(),
            len: 2,
            text: ScalarOrArray::new_array(vec![self.low_label.clone(), self.high_label.clone()]),
            x: ScalarOrArray::new_array(vec![
                config.margin_x,
                geometry.bar_width + config.margin_x,
            ]),
            y: ScalarOrArray::new_scalar(config.label_y),
            align: ScalarOrArray::new_array(vec![TextAlign::Left, TextAlign::Right]),
            baseline: ScalarOrArray::new_scalar(TextBaseline::Middle),
            color: ScalarOrArray::new_scalar(config.label_color),
            font: ScalarOrArray::new_scalar(config.label_font.clone()),
            font_size: ScalarOrArray::new_scalar(config.label_font_size),
            ..Default::default()
        });

        let bar = SceneGroup::new("legend-colorbar")
            .with_origin(geometry.bar_origin)
            .with_mark(SceneRectMark {
                name: "legend-colorbar".to_string(),
                len: self.segments.len() as u32,
                x: ScalarOrArray::new_array(self.segments.iter().map(|s| s.x).collect()),
                y: ScalarOrArray::new_scalar(0.0),
                width: ScalarOrArray::new_array(self.segments.iter().map(|s| s.width).collect()),
                height: ScalarOrArray::new_scalar(geometry.bar_height),
                fill: ScalarOrArray::new_array(self.segments.iter().map(|s| s.color).collect()),
                ..Default::default()
            });

        let axis_config = AxisConfig {
            font_size: config.tick_font_size,
            ..Default::default()
        };
        let axis = make_bottom_axis_marks(
            &self.axis,
            "legend-axis",
            geometry.axis_origin,
            &axis_config,
        );

        SceneGroup::new(LEGEND_GROUP_NAME)
            .with_mark(labels)
            .with_mark(bar)
            .with_mark(axis)
    }

    /// Sum of the segment widths
    pub fn bar_span(&self) -> f32 {
        self.segments.iter().map(|s| s.width).sum()
    }
}

/// Axis domain: the scale's extent, widened on both sides by `extend_fraction`
fn axis_domain(min: f32, max: f32, config: &LegendConfig) -> (f32, f32) {
    let extension = (max - min) * config.extend_fraction;
    (min - extension, max + extension)
}

/// Maps the axis domain onto the bar, linearly or logarithmically
fn bar_scale(
    domain: (f32, f32),
    bar_width: f32,
    mode: LegendMode,
) -> Result<NumericScale, LifemapGuidesError> {
    match mode {
        LegendMode::Linear => Ok(LinearNumericScale::new(&LinearNumericScaleConfig {
            domain,
            range: (0.0, bar_width),
            ..Default::default()
        })
        .into()),
        LegendMode::Logarithmic => {
            if !(domain.0 > 0.0 && domain.1 > 0.0) {
                return Err(LifemapGuidesError::InvalidLogDomain(domain.0, domain.1));
            }
            Ok(LogNumericScale::new(&LogNumericScaleConfig {
                domain,
                range: (0.0, bar_width),
                ..Default::default()
            })
            .into())
        }
    }
}

fn binned_layout(
    scale: &BinnedColorScale,
    geometry: &LegendGeometry,
    mode: LegendMode,
    config: &LegendConfig,
) -> Result<(Vec<LegendSegment>, AxisSpec, Vec<f32>), LifemapGuidesError> {
    let (min, max) = scale.domain();
    let bar = bar_scale(axis_domain(min, max, config), geometry.bar_width, mode)?;

    let mut boundaries = Vec::with_capacity(scale.breakpoints().len() + 2);
    boundaries.push(min);
    boundaries.extend_from_slice(scale.breakpoints());
    boundaries.push(max);
    debug!("Binned legend ({}) boundaries: {boundaries:?}", scale.source());

    let segments = boundaries
        .iter()
        .tuple_windows()
        .map(|(&lo, &hi)| {
            let start = bar.scale(lo);
            let end = bar.scale(hi);
            LegendSegment {
                x: start,
                width: end - start,
                color: scale.color((lo + hi) / 2.0),
            }
        })
        .collect();

    let format = mode.formatter();
    let axis = numeric_axis_spec(&bar, Some(&boundaries), config.tick_count, format.as_ref());
    Ok((segments, axis, boundaries))
}

fn continuous_layout(
    scale: &ContinuousColorScale,
    geometry: &LegendGeometry,
    mode: LegendMode,
    config: &LegendConfig,
) -> Result<(Vec<LegendSegment>, AxisSpec), LifemapGuidesError> {
    let step = config.step_size;
    if !(step > 0.0) || !step.is_finite() {
        return Err(LifemapGuidesError::InvalidStepSize(step));
    }

    let (d0, d1) = scale.domain();
    let (min, max) = (d0.min(d1), d0.max(d1));
    let bar = bar_scale(axis_domain(min, max, config), geometry.bar_width, mode)?;

    // The axis domain can extend past the scale domain, so columns outside it
    // are painted with the end colors
    let bar_width = geometry.bar_width;
    let columns = (bar_width / step).ceil() as usize;
    let segments = (0..columns)
        .map(|i| {
            let x = i as f32 * step;
            let value = bar.invert(x + step / 2.0);
            let color = if value < min {
                scale.color(min)
            } else if value < max {
                scale.color(value)
            } else {
                scale.color(max)
            };
            LegendSegment {
                x,
                width: step.min(bar_width - x),
                color,
            }
        })
        .collect::<Vec<_>>();
    debug!("Continuous legend drawn with {} columns", segments.len());

    let format = mode.formatter();
    let axis = numeric_axis_spec(&bar, None, config.tick_count, format.as_ref());
    Ok((segments, axis))
}

fn nominal_layout(
    scale: &NominalColorScale,
    geometry: &LegendGeometry,
    config: &LegendConfig,
) -> Result<(Vec<LegendSegment>, AxisSpec), LifemapGuidesError> {
    let categories = scale.sorted_categories();

    // Half the padding on the outside keeps the bands summing to (1 - padding) of the bar
    let band = BandScale::try_new(categories.clone())?
        .range((0.0, geometry.bar_width))?
        .padding_inner(config.band_padding)?
        .padding_outer(config.band_padding / 2.0)?;

    let bandwidth = band.bandwidth();
    let segments = categories
        .iter()
        .map(|category| LegendSegment {
            x: band.scale(category),
            width: bandwidth,
            color: scale.color(category),
        })
        .collect();

    Ok((segments, band_axis_spec(&band)))
}
