use lifemap_common::types::{RgbaColor, BLACK};

/// Styling of a bottom-oriented tick axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    /// Length of tick lines and of the outer ticks at both ends of the domain line
    pub tick_size: f32,
    /// Gap between the end of a tick and its label
    pub tick_padding: f32,
    pub font: String,
    pub font_size: f32,
    pub stroke: RgbaColor,
    pub label_color: RgbaColor,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_size: 6.0,
            tick_padding: 3.0,
            font: "sans-serif".to_string(),
            font_size: 10.0,
            stroke: BLACK,
            label_color: BLACK,
        }
    }
}
