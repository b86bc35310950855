pub mod continuous;
pub mod interpolate;

use lifemap_common::types::{RgbaColor, TRANSPARENT};
use strum::{Display, IntoStaticStr};

use crate::array::extent;
use crate::error::LifemapScaleError;
use crate::ordinal::OrdinalScale;
use crate::quantile::QuantileScale;
use crate::threshold::ThresholdScale;
use continuous::ContinuousColorScale;

/// How a binned scale's breakpoints were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum BinnedSource {
    Thresholds,
    Quantiles,
}

#[derive(Debug, Clone)]
enum BinnedKind {
    Threshold {
        scale: ThresholdScale<RgbaColor>,
        domain: (f32, f32),
    },
    Quantile(QuantileScale<RgbaColor>),
}

/// A color scale that splits a numeric domain into bins at explicit breakpoints
#[derive(Debug, Clone)]
pub struct BinnedColorScale {
    kind: BinnedKind,
}

impl BinnedColorScale {
    /// Binned scale over `domain` with explicit ascending thresholds.
    ///
    /// `colors` must hold one more entry than `thresholds` and every threshold
    /// must lie inside the domain.
    pub fn from_thresholds(
        thresholds: Vec<f32>,
        colors: Vec<RgbaColor>,
        domain: (f32, f32),
    ) -> Result<Self, LifemapScaleError> {
        let (start, end) = domain;
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(LifemapScaleError::InvalidDomain(start, end));
        }
        if start == end {
            return Err(LifemapScaleError::DegenerateDomain(start));
        }
        if let Some(&threshold) = thresholds.iter().find(|t| **t < start || **t > end) {
            return Err(LifemapScaleError::ThresholdOutsideDomain {
                threshold,
                start,
                end,
            });
        }
        let scale = ThresholdScale::try_new(colors, thresholds, TRANSPARENT)?;
        Ok(Self {
            kind: BinnedKind::Threshold { scale, domain },
        })
    }

    /// Binned scale whose breakpoints are the quantiles of `samples`, one bin per color.
    /// The domain is the extent of the finite samples, which must not all be equal.
    pub fn from_quantiles(
        samples: &[f32],
        colors: Vec<RgbaColor>,
    ) -> Result<Self, LifemapScaleError> {
        let scale = QuantileScale::try_new(samples, colors, TRANSPARENT)?;
        let (min, max) = scale.extent();
        if min == max {
            return Err(LifemapScaleError::DegenerateDomain(min));
        }
        Ok(Self {
            kind: BinnedKind::Quantile(scale),
        })
    }

    pub fn source(&self) -> BinnedSource {
        match &self.kind {
            BinnedKind::Threshold { .. } => BinnedSource::Thresholds,
            BinnedKind::Quantile(_) => BinnedSource::Quantiles,
        }
    }

    /// (min, max) of the scale's domain
    pub fn domain(&self) -> (f32, f32) {
        match &self.kind {
            BinnedKind::Threshold { domain, .. } => *domain,
            BinnedKind::Quantile(scale) => scale.extent(),
        }
    }

    /// Interior bin boundaries in ascending order
    pub fn breakpoints(&self) -> &[f32] {
        match &self.kind {
            BinnedKind::Threshold { scale, .. } => scale.thresholds(),
            BinnedKind::Quantile(scale) => scale.quantiles(),
        }
    }

    /// One color per bin
    pub fn colors(&self) -> &[RgbaColor] {
        match &self.kind {
            BinnedKind::Threshold { scale, .. } => scale.range(),
            BinnedKind::Quantile(scale) => scale.range(),
        }
    }

    pub fn color(&self, value: f32) -> RgbaColor {
        match &self.kind {
            BinnedKind::Threshold { scale, .. } => scale.scale(value),
            BinnedKind::Quantile(scale) => scale.scale(value),
        }
    }
}

/// A color scale over a finite set of categories
#[derive(Debug, Clone)]
pub struct NominalColorScale {
    ordinal: OrdinalScale<String, RgbaColor>,
}

impl NominalColorScale {
    /// Maps categories to colors in order, cycling through `colors` when there
    /// are more categories than colors. Duplicate categories keep their first color.
    /// Unknown categories map to transparent.
    pub fn try_new<S: AsRef<str>>(
        categories: &[S],
        colors: &[RgbaColor],
    ) -> Result<Self, LifemapScaleError> {
        if categories.is_empty() {
            return Err(LifemapScaleError::EmptyDomain);
        }
        let mut unique: Vec<String> = Vec::with_capacity(categories.len());
        for category in categories {
            let category = category.as_ref();
            if !unique.iter().any(|c| c == category) {
                unique.push(category.to_string());
            }
        }
        let ordinal = OrdinalScale::new_cycled(&unique, colors, TRANSPARENT)?;
        Ok(Self { ordinal })
    }

    /// Categories in the order they were given
    pub fn categories(&self) -> Vec<String> {
        self.ordinal.domain()
    }

    /// Categories in ascending lexicographic order
    pub fn sorted_categories(&self) -> Vec<String> {
        let mut categories = self.ordinal.domain();
        categories.sort();
        categories
    }

    pub fn colors(&self) -> Vec<RgbaColor> {
        self.ordinal.range()
    }

    pub fn color(&self, category: &str) -> RgbaColor {
        self.ordinal.scale(&category.to_string())
    }
}

/// Discriminant of [`ColorScale`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ColorScaleKind {
    Binned,
    Continuous,
    Nominal,
}

/// The color scales a legend knows how to draw
#[derive(Debug, Clone)]
pub enum ColorScale {
    Binned(BinnedColorScale),
    Continuous(ContinuousColorScale),
    Nominal(NominalColorScale),
}

impl ColorScale {
    pub fn kind(&self) -> ColorScaleKind {
        match self {
            ColorScale::Binned(_) => ColorScaleKind::Binned,
            ColorScale::Continuous(_) => ColorScaleKind::Continuous,
            ColorScale::Nominal(_) => ColorScaleKind::Nominal,
        }
    }

    /// (min, max) of a numeric domain, `None` for nominal scales
    pub fn numeric_domain(&self) -> Option<(f32, f32)> {
        match self {
            ColorScale::Binned(scale) => Some(scale.domain()),
            ColorScale::Continuous(scale) => {
                let (a, b) = scale.domain();
                extent(&[a, b])
            }
            ColorScale::Nominal(_) => None,
        }
    }
}

impl From<BinnedColorScale> for ColorScale {
    fn from(scale: BinnedColorScale) -> Self {
        ColorScale::Binned(scale)
    }
}

impl From<ContinuousColorScale> for ColorScale {
    fn from(scale: ContinuousColorScale) -> Self {
        ColorScale::Continuous(scale)
    }
}

impl From<NominalColorScale> for ColorScale {
    fn from(scale: NominalColorScale) -> Self {
        ColorScale::Nominal(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: RgbaColor = [1.0, 0.0, 0.0, 1.0];
    const B: RgbaColor = [0.0, 1.0, 0.0, 1.0];
    const C: RgbaColor = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_binned_from_thresholds() -> Result<(), LifemapScaleError> {
        let scale = BinnedColorScale::from_thresholds(vec![10.0, 20.0], vec![A, B, C], (0.0, 30.0))?;
        assert_eq!(scale.source(), BinnedSource::Thresholds);
        assert_eq!(scale.domain(), (0.0, 30.0));
        assert_eq!(scale.breakpoints(), &[10.0, 20.0]);
        assert_eq!(scale.color(5.0), A);
        assert_eq!(scale.color(10.0), B);
        assert_eq!(scale.color(25.0), C);
        Ok(())
    }

    #[test]
    fn test_binned_threshold_outside_domain() {
        let result = BinnedColorScale::from_thresholds(vec![10.0, 40.0], vec![A, B, C], (0.0, 30.0));
        assert_eq!(
            result.err(),
            Some(LifemapScaleError::ThresholdOutsideDomain {
                threshold: 40.0,
                start: 0.0,
                end: 30.0
            })
        );
    }

    #[test]
    fn test_binned_from_quantiles() -> Result<(), LifemapScaleError> {
        let samples = [50.0, 60.0, 70.0, 80.0, 90.0];
        let scale = BinnedColorScale::from_quantiles(&samples, vec![A, B])?;
        assert_eq!(scale.source(), BinnedSource::Quantiles);
        assert_eq!(scale.domain(), (50.0, 90.0));
        assert_eq!(scale.breakpoints(), &[70.0]);
        Ok(())
    }

    #[test]
    fn test_nominal_scale() -> Result<(), LifemapScaleError> {
        let scale = NominalColorScale::try_new(&["Europe", "Asia", "Africa", "Asia"], &[A, B])?;
        assert_eq!(scale.categories(), vec!["Europe", "Asia", "Africa"]);
        assert_eq!(scale.sorted_categories(), vec!["Africa", "Asia", "Europe"]);
        assert_eq!(scale.color("Europe"), A);
        assert_eq!(scale.color("Asia"), B);
        assert_eq!(scale.color("Africa"), A);
        assert_eq!(scale.color("Oceania"), TRANSPARENT);
        Ok(())
    }

    #[test]
    fn test_nominal_requires_categories() {
        let result = NominalColorScale::try_new::<&str>(&[], &[A]);
        assert_eq!(result.err(), Some(LifemapScaleError::EmptyDomain));
    }

    #[test]
    fn test_color_scale_kind() -> Result<(), LifemapScaleError> {
        let scale: ColorScale = NominalColorScale::try_new(&["a"], &[A])?.into();
        assert_eq!(scale.kind(), ColorScaleKind::Nominal);
        assert_eq!(scale.kind().to_string(), "nominal");
        assert_eq!(scale.numeric_domain(), None);
        Ok(())
    }
}
