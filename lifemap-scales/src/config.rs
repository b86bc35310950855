use css_color_parser::Color;
use lifemap_common::types::RgbaColor;
use serde::{Deserialize, Serialize};

use crate::color::continuous::ContinuousColorScale;
use crate::color::interpolate::ColorSpaceKind;
use crate::color::{BinnedColorScale, ColorScale, NominalColorScale};
use crate::error::LifemapScaleError;

/// Parses a CSS color string into straight-alpha RGBA components
pub fn parse_color(s: &str) -> Result<RgbaColor, LifemapScaleError> {
    match s.parse::<Color>() {
        Ok(color) => Ok([
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]),
        Err(_) => Err(LifemapScaleError::InvalidColor(s.to_string())),
    }
}

pub fn parse_colors(colors: &[String]) -> Result<Vec<RgbaColor>, LifemapScaleError> {
    colors.iter().map(|c| parse_color(c)).collect()
}

/// Serializable description of a color scale.
///
/// ```json
/// {"type": "threshold", "thresholds": [50, 70], "domain": [30, 90],
///  "colors": ["#fee0d2", "#fc9272", "#de2d26"]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScaleSpec {
    Threshold {
        thresholds: Vec<f32>,
        domain: (f32, f32),
        colors: Vec<String>,
    },
    Quantile {
        samples: Vec<f32>,
        colors: Vec<String>,
    },
    Linear {
        domain: (f32, f32),
        colors: Vec<String>,
        #[serde(default)]
        color_space: ColorSpaceKind,
        #[serde(default)]
        nice: Option<usize>,
    },
    Log {
        domain: (f32, f32),
        colors: Vec<String>,
        #[serde(default)]
        color_space: ColorSpaceKind,
        #[serde(default)]
        nice: bool,
    },
    Ordinal {
        categories: Vec<String>,
        colors: Vec<String>,
    },
}

impl ScaleSpec {
    pub fn from_json(json: &str) -> Result<Self, LifemapScaleError> {
        serde_json::from_str(json).map_err(|e| LifemapScaleError::InvalidScaleSpec(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, LifemapScaleError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LifemapScaleError::InvalidScaleSpec(e.to_string()))
    }

    /// Validates the spec and builds the color scale it describes
    pub fn build(&self) -> Result<ColorScale, LifemapScaleError> {
        let scale: ColorScale = match self {
            ScaleSpec::Threshold {
                thresholds,
                domain,
                colors,
            } => BinnedColorScale::from_thresholds(thresholds.clone(), parse_colors(colors)?, *domain)?
                .into(),
            ScaleSpec::Quantile { samples, colors } => {
                BinnedColorScale::from_quantiles(samples, parse_colors(colors)?)?.into()
            }
            ScaleSpec::Linear {
                domain,
                colors,
                color_space,
                nice,
            } => ContinuousColorScale::new_linear(*domain, &parse_colors(colors)?, *color_space, *nice)?
                .into(),
            ScaleSpec::Log {
                domain,
                colors,
                color_space,
                nice,
            } => ContinuousColorScale::new_log(*domain, &parse_colors(colors)?, *color_space, *nice)?
                .into(),
            ScaleSpec::Ordinal { categories, colors } => {
                NominalColorScale::try_new(categories.as_slice(), &parse_colors(colors)?)?.into()
            }
        };
        log::debug!("Built {} color scale", scale.kind());
        Ok(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorScaleKind;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_parse_color() -> Result<(), LifemapScaleError> {
        let c = parse_color("#ff8000")?;
        assert_approx_eq!(f32, c[0], 1.0);
        assert_approx_eq!(f32, c[1], 128.0 / 255.0);
        assert_approx_eq!(f32, c[2], 0.0);
        assert_approx_eq!(f32, c[3], 1.0);

        let c = parse_color("rgba(0, 0, 255, 0.5)")?;
        assert_approx_eq!(f32, c[3], 0.5);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_color() {
        assert_eq!(
            parse_color("not-a-color"),
            Err(LifemapScaleError::InvalidColor("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_threshold_spec() -> Result<(), LifemapScaleError> {
        let spec = ScaleSpec::from_json(
            r##"{"type": "threshold", "thresholds": [10, 20], "domain": [0, 30],
                 "colors": ["red", "green", "blue"]}"##,
        )?;
        let scale = spec.build()?;
        assert_eq!(scale.kind(), ColorScaleKind::Binned);
        assert_eq!(scale.numeric_domain(), Some((0.0, 30.0)));
        Ok(())
    }

    #[test]
    fn test_linear_spec_defaults() -> Result<(), LifemapScaleError> {
        let spec = ScaleSpec::from_json(
            r##"{"type": "linear", "domain": [40, 85], "colors": ["white", "#006d2c"]}"##,
        )?;
        assert_eq!(
            spec,
            ScaleSpec::Linear {
                domain: (40.0, 85.0),
                colors: vec!["white".to_string(), "#006d2c".to_string()],
                color_space: ColorSpaceKind::Srgb,
                nice: None,
            }
        );
        assert_eq!(spec.build()?.kind(), ColorScaleKind::Continuous);
        Ok(())
    }

    #[test]
    fn test_ordinal_spec() -> Result<(), LifemapScaleError> {
        let spec = ScaleSpec::Ordinal {
            categories: vec!["b".to_string(), "a".to_string()],
            colors: vec!["red".to_string()],
        };
        let round_trip = ScaleSpec::from_json(&spec.to_json()?)?;
        assert_eq!(round_trip, spec);
        assert_eq!(spec.build()?.kind(), ColorScaleKind::Nominal);
        Ok(())
    }

    #[test]
    fn test_unknown_spec_type() {
        let result = ScaleSpec::from_json(r#"{"type": "sequential", "domain": [0, 1]}"#);
        assert!(matches!(result, Err(LifemapScaleError::InvalidScaleSpec(_))));
    }

    #[test]
    fn test_log_spec_rejects_zero() {
        let spec = ScaleSpec::Log {
            domain: (0.0, 100.0),
            colors: vec!["white".to_string(), "black".to_string()],
            color_space: ColorSpaceKind::Lab,
            nice: false,
        };
        assert_eq!(
            spec.build().err(),
            Some(LifemapScaleError::InvalidLogDomain(0.0, 100.0))
        );
    }
}
