use lifemap_scales::band::BandScale;

use super::{AxisSpec, AxisTick};

/// Axis with one tick at the center of each band, labeled by its category
pub fn band_axis_spec(scale: &BandScale<String>) -> AxisSpec {
    AxisSpec {
        range: scale.get_range(),
        ticks: scale
            .get_domain()
            .iter()
            .map(|category| AxisTick {
                position: scale.center(category),
                label: category.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use lifemap_scales::error::LifemapScaleError;

    #[test]
    fn test_band_axis_centers() -> Result<(), LifemapScaleError> {
        let scale = BandScale::try_new(vec!["a".to_string(), "b".to_string()])?.range((0.0, 100.0))?;
        let spec = band_axis_spec(&scale);
        assert_eq!(spec.labels(), vec!["a", "b"]);
        assert_approx_eq!(f32, spec.positions()[0], 25.0);
        assert_approx_eq!(f32, spec.positions()[1], 75.0);
        Ok(())
    }
}
