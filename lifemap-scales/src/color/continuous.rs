use lifemap_common::types::RgbaColor;

use super::interpolate::{ColorRamp, ColorSpaceKind};
use crate::error::LifemapScaleError;
use crate::numeric::linear::{LinearNumericScale, LinearNumericScaleConfig};
use crate::numeric::log::{LogNumericScale, LogNumericScaleConfig};
use crate::numeric::{ContinuousNumericScale, NumericScale};

/// Maps a numeric interval onto a color ramp.
///
/// The wrapped numeric scale normalizes values to stop indices in [0, n - 1]
/// with clamping enabled, so values outside the domain take the end colors.
#[derive(Clone, Debug)]
pub struct ContinuousColorScale {
    numeric_scale: NumericScale,
    ramp: ColorRamp,
}

impl ContinuousColorScale {
    pub fn from_scale(
        numeric_scale: impl Into<NumericScale>,
        colors: &[RgbaColor],
        space: ColorSpaceKind,
    ) -> Result<Self, LifemapScaleError> {
        let numeric_scale = numeric_scale.into();
        if colors.is_empty() {
            return Err(LifemapScaleError::EmptyRange);
        }
        let (start, end) = numeric_scale.domain();
        if !start.is_finite() || !end.is_finite() {
            return Err(LifemapScaleError::InvalidDomain(start, end));
        }
        if start == end {
            return Err(LifemapScaleError::DegenerateDomain(start));
        }
        if !numeric_scale.clamp() {
            return Err(LifemapScaleError::IncompatibleNumericScaleForColorRange(
                "Clamping must be enabled".to_string(),
            ));
        }
        let expected_range = (0.0, colors.len() as f32 - 1.0);
        if numeric_scale.range() != expected_range {
            return Err(LifemapScaleError::IncompatibleNumericScaleForColorRange(
                format!("Range must be ({}, {})", expected_range.0, expected_range.1),
            ));
        }

        Ok(Self {
            numeric_scale,
            ramp: ColorRamp::new(colors, space),
        })
    }

    /// Linear color scale over `domain`, optionally niced to `nice` ticks
    pub fn new_linear(
        domain: (f32, f32),
        colors: &[RgbaColor],
        space: ColorSpaceKind,
        nice: Option<usize>,
    ) -> Result<Self, LifemapScaleError> {
        let numeric_scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain,
            range: (0.0, colors.len() as f32 - 1.0),
            clamp: true,
            nice,
        });
        Self::from_scale(numeric_scale, colors, space)
    }

    /// Base-10 log color scale. The domain must not include or cross zero.
    pub fn new_log(
        domain: (f32, f32),
        colors: &[RgbaColor],
        space: ColorSpaceKind,
        nice: bool,
    ) -> Result<Self, LifemapScaleError> {
        if !(domain.0 * domain.1 > 0.0) {
            return Err(LifemapScaleError::InvalidLogDomain(domain.0, domain.1));
        }
        let numeric_scale = LogNumericScale::new(&LogNumericScaleConfig {
            domain,
            range: (0.0, colors.len() as f32 - 1.0),
            clamp: true,
            nice,
            ..Default::default()
        });
        Self::from_scale(numeric_scale, colors, space)
    }

    pub fn domain(&self) -> (f32, f32) {
        self.numeric_scale.domain()
    }

    pub fn numeric_scale(&self) -> &NumericScale {
        &self.numeric_scale
    }

    pub fn colors(&self) -> Vec<RgbaColor> {
        self.ramp.colors()
    }

    pub fn color_space(&self) -> ColorSpaceKind {
        self.ramp.space()
    }

    pub fn color(&self, value: f32) -> RgbaColor {
        self.ramp.at(self.numeric_scale.scale(value))
    }

    pub fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        self.numeric_scale.ticks(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use lifemap_common::types::TRANSPARENT;

    const WHITE: RgbaColor = [1.0, 1.0, 1.0, 1.0];
    const GREEN: RgbaColor = [0.0, 0.5, 0.0, 1.0];

    #[test]
    fn test_linear_color_scale() -> Result<(), LifemapScaleError> {
        let scale =
            ContinuousColorScale::new_linear((40.0, 80.0), &[WHITE, GREEN], Default::default(), None)?;
        assert_eq!(scale.domain(), (40.0, 80.0));

        let mid = scale.color(60.0);
        assert_approx_eq!(f32, mid[0], 0.5);
        assert_approx_eq!(f32, mid[1], 0.75);

        assert_eq!(scale.color(10.0), WHITE);
        assert_eq!(scale.color(100.0), GREEN);
        assert_eq!(scale.color(f32::NAN), TRANSPARENT);
        Ok(())
    }

    #[test]
    fn test_log_color_scale() -> Result<(), LifemapScaleError> {
        let scale =
            ContinuousColorScale::new_log((10.0, 1000.0), &[WHITE, GREEN], Default::default(), false)?;
        let mid = scale.color(100.0);
        assert_approx_eq!(f32, mid[0], 0.5, epsilon = 1e-5);
        Ok(())
    }

    #[test]
    fn test_log_color_scale_rejects_zero() {
        let result =
            ContinuousColorScale::new_log((0.0, 1000.0), &[WHITE, GREEN], Default::default(), false);
        assert_eq!(
            result.err(),
            Some(LifemapScaleError::InvalidLogDomain(0.0, 1000.0))
        );
    }

    #[test]
    fn test_from_scale_requires_clamp() {
        let numeric = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            nice: None,
        });
        let result = ContinuousColorScale::from_scale(numeric, &[WHITE, GREEN], Default::default());
        assert!(matches!(
            result,
            Err(LifemapScaleError::IncompatibleNumericScaleForColorRange(_))
        ));
    }

    #[test]
    fn test_empty_colors() {
        let result = ContinuousColorScale::new_linear((0.0, 1.0), &[], Default::default(), None);
        assert_eq!(result.err(), Some(LifemapScaleError::EmptyRange));
    }
}
