use lifemap_common::types::{RgbaColor, BLACK};

/// Layout and styling of the choropleth legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendConfig {
    /// Space left and right of the bar, reserved for the end labels
    pub margin_x: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Vertical position of the end labels
    pub label_y: f32,
    /// Pixel width of each column approximating a continuous scale
    pub step_size: f32,
    /// Fraction of the domain span added on both sides of the axis domain
    pub extend_fraction: f32,
    /// Fraction of the bar left blank between and around nominal bands
    pub band_padding: f32,
    pub tick_count: f32,
    pub label_font: String,
    pub label_font_size: f32,
    pub label_color: RgbaColor,
    pub tick_font_size: f32,
    pub low_label: String,
    pub high_label: String,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            margin_x: 50.0,
            margin_top: 25.0,
            margin_bottom: 25.0,
            label_y: 10.0,
            step_size: 4.0,
            extend_fraction: 0.0,
            band_padding: 0.05,
            tick_count: 10.0,
            label_font: "Monaco".to_string(),
            label_font_size: 15.0,
            label_color: BLACK,
            tick_font_size: 10.0,
            low_label: "Low".to_string(),
            high_label: "High".to_string(),
        }
    }
}

impl LegendConfig {
    pub fn with_labels(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.low_label = low.into();
        self.high_label = high.into();
        self
    }
}
