use ordered_float::OrderedFloat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::VariantNames;

/// Straight-alpha RGBA color with components in [0, 1]
pub type RgbaColor = [f32; 4];

pub const BLACK: RgbaColor = [0.0, 0.0, 0.0, 1.0];
pub const TRANSPARENT: RgbaColor = [0.0, 0.0, 0.0, 0.0];

/// Hashable wrapper so colors can be used as map keys and compared in tests
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(pub RgbaColor);

impl Color {
    pub fn components(&self) -> RgbaColor {
        self.0
    }

    /// `#rrggbb` ignoring alpha
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn opacity(&self) -> f32 {
        self.0[3]
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.iter().for_each(|c| OrderedFloat::from(*c).hash(state));
    }
}

impl From<RgbaColor> for Color {
    fn from(value: RgbaColor) -> Self {
        Color(value)
    }
}

impl From<Color> for RgbaColor {
    fn from(value: Color) -> Self {
        value.0
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// SVG `text-anchor` value
    pub fn text_anchor(&self) -> &'static str {
        match self {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, VariantNames)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
    Bottom,
}

impl TextBaseline {
    /// SVG `dominant-baseline` value
    pub fn dominant_baseline(&self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "text-after-edge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color([1.0, 0.0, 0.5, 1.0]).to_hex(), "#ff0080");
        assert_eq!(Color(BLACK).to_hex(), "#000000");
    }

    #[test]
    fn test_anchor_names() {
        assert_eq!(TextAlign::Right.text_anchor(), "end");
        assert_eq!(TextBaseline::Middle.dominant_baseline(), "middle");
        assert_eq!(TextAlign::VARIANTS, &["left", "center", "right"]);
    }
}
