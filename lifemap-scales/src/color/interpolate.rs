use lifemap_common::types::{RgbaColor, TRANSPARENT};
use palette::{Hsla, IntoColor, Laba, Mix, Srgba};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::VariantNames;

/// Color space in which adjacent ramp colors are blended
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColorSpaceKind {
    #[default]
    Srgb,
    Hsl,
    Lab,
}

/// A trait for color spaces that can be used to interpolate a `ColorRamp`
pub trait ColorSpace:
    Mix<Scalar = f32> + Copy + IntoColor<Srgba> + Debug + Send + Sync + 'static
{
}

impl<T: Mix<Scalar = f32> + Copy + IntoColor<Srgba> + Debug + Send + Sync + 'static> ColorSpace
    for T
{
}

/// Evenly spaced color stops stored in the space they are blended in
#[derive(Debug, Clone)]
pub enum ColorRamp {
    Srgb(Vec<Srgba>),
    Hsl(Vec<Hsla>),
    Lab(Vec<Laba>),
}

impl ColorRamp {
    pub fn new(colors: &[RgbaColor], space: ColorSpaceKind) -> Self {
        let srgba = colors
            .iter()
            .map(|c| Srgba::from_components((c[0], c[1], c[2], c[3])));
        match space {
            ColorSpaceKind::Srgb => ColorRamp::Srgb(srgba.collect()),
            ColorSpaceKind::Hsl => ColorRamp::Hsl(srgba.map(|c| c.into_color()).collect()),
            ColorSpaceKind::Lab => ColorRamp::Lab(srgba.map(|c| c.into_color()).collect()),
        }
    }

    pub fn space(&self) -> ColorSpaceKind {
        match self {
            ColorRamp::Srgb(_) => ColorSpaceKind::Srgb,
            ColorRamp::Hsl(_) => ColorSpaceKind::Hsl,
            ColorRamp::Lab(_) => ColorSpaceKind::Lab,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColorRamp::Srgb(c) => c.len(),
            ColorRamp::Hsl(c) => c.len(),
            ColorRamp::Lab(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stops converted back to sRGB
    pub fn colors(&self) -> Vec<RgbaColor> {
        match self {
            ColorRamp::Srgb(c) => c.iter().map(|c| to_rgba(*c)).collect(),
            ColorRamp::Hsl(c) => c.iter().map(|c| to_rgba(*c)).collect(),
            ColorRamp::Lab(c) => c.iter().map(|c| to_rgba(*c)).collect(),
        }
    }

    /// Color at a continuous stop index in [0, len - 1]. Out of bounds indices
    /// are clamped and non-finite indices are transparent.
    pub fn at(&self, index: f32) -> RgbaColor {
        match self {
            ColorRamp::Srgb(c) => interpolate_color(c, index),
            ColorRamp::Hsl(c) => interpolate_color(c, index),
            ColorRamp::Lab(c) => interpolate_color(c, index),
        }
    }
}

fn to_rgba<C: ColorSpace>(color: C) -> RgbaColor {
    let c: Srgba = color.into_color();
    [c.red, c.green, c.blue, c.alpha]
}

fn interpolate_color<C: ColorSpace>(colors: &[C], index: f32) -> RgbaColor {
    if colors.is_empty() || !index.is_finite() {
        return TRANSPARENT;
    }
    let max_index = (colors.len() - 1) as f32;
    let index = index.clamp(0.0, max_index);
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        to_rgba(colors[lower])
    } else {
        let t = index - lower as f32;
        to_rgba(colors[lower].mix(colors[upper], t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const RED: RgbaColor = [1.0, 0.0, 0.0, 1.0];
    const BLUE: RgbaColor = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_srgb_midpoint() {
        let ramp = ColorRamp::new(&[RED, BLUE], ColorSpaceKind::Srgb);
        let mid = ramp.at(0.5);
        assert_approx_eq!(f32, mid[0], 0.5);
        assert_approx_eq!(f32, mid[1], 0.0);
        assert_approx_eq!(f32, mid[2], 0.5);
        assert_approx_eq!(f32, mid[3], 1.0);
    }

    #[test]
    fn test_stops_round_trip_through_lab() {
        let ramp = ColorRamp::new(&[RED, BLUE], ColorSpaceKind::Lab);
        let end = ramp.at(1.0);
        assert_approx_eq!(f32, end[0], 0.0, epsilon = 1e-3);
        assert_approx_eq!(f32, end[2], 1.0, epsilon = 1e-3);
        assert_eq!(ramp.space(), ColorSpaceKind::Lab);
    }

    #[test]
    fn test_out_of_bounds_index_is_clamped() {
        let ramp = ColorRamp::new(&[RED, BLUE], ColorSpaceKind::Hsl);
        let below = ramp.at(-3.0);
        assert_approx_eq!(f32, below[0], 1.0, epsilon = 1e-4);
        assert_eq!(ramp.at(f32::NAN), TRANSPARENT);
    }

    #[test]
    fn test_empty_ramp() {
        let ramp = ColorRamp::new(&[], ColorSpaceKind::Srgb);
        assert!(ramp.is_empty());
        assert_eq!(ramp.at(0.0), TRANSPARENT);
    }
}
