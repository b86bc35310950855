use lifemap_scales::format::TickFormat;
use lifemap_scales::numeric::ContinuousNumericScale;

use super::{AxisSpec, AxisTick};

/// Axis over a numeric scale.
///
/// With `tick_values` the ticks are pinned to exactly those values, otherwise
/// the scale's own ticks for `count` are used.
pub fn numeric_axis_spec(
    scale: &impl ContinuousNumericScale,
    tick_values: Option<&[f32]>,
    count: f32,
    format: &dyn TickFormat,
) -> AxisSpec {
    let values = match tick_values {
        Some(values) => values.to_vec(),
        None => scale.ticks(Some(count)),
    };
    AxisSpec {
        range: scale.range(),
        ticks: values
            .iter()
            .map(|v| AxisTick {
                position: scale.scale(*v),
                label: format.format(*v),
            })
            .collect(),
    }
}
