use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::LifemapGeometryError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Allowed zoom factors `[min, max]`
    pub scale_extent: [f64; 2],
    /// Fraction of the viewport the selected region should fill
    pub fill: f64,
    pub duration_ms: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_extent: [1.0, 10.0],
            fill: 0.9,
            duration_ms: 1000.0,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), LifemapGeometryError> {
        let [lo, hi] = self.scale_extent;
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            return Err(LifemapGeometryError::InvalidScaleExtent(lo, hi));
        }
        Ok(())
    }
}

/// Uniform scale `k` followed by translation `(x, y)`; a point `p` maps to `p * k + (x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    pub fn translate(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        [point[0] * self.k + self.x, point[1] * self.k + self.y]
    }

    pub fn invert(&self, point: [f64; 2]) -> [f64; 2] {
        [(point[0] - self.x) / self.k, (point[1] - self.y) / self.k]
    }

    /// SVG `transform` attribute value
    pub fn to_svg_transform(&self) -> String {
        format!("translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Transform that centers `bounds` in the viewport, scaled so the box fills
/// `config.fill` of the tighter viewport dimension
pub fn zoom_to_bounds(
    bounds: &Bounds,
    viewport: [f64; 2],
    config: &ZoomConfig,
) -> Result<ZoomTransform, LifemapGeometryError> {
    let [width, height] = viewport;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(LifemapGeometryError::InvalidViewport { width, height });
    }
    config.validate()?;

    let [lo, hi] = config.scale_extent;
    let extent = f64::max(bounds.width() / width, bounds.height() / height);

    // A degenerate box (single point) zooms all the way in
    let k = if extent > 0.0 {
        (config.fill / extent).clamp(lo, hi)
    } else {
        hi
    };

    let [cx, cy] = bounds.center();
    Ok(ZoomTransform::new(
        k,
        width / 2.0 - cx * k,
        height / 2.0 - cy * k,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_small_region_is_magnified() -> Result<(), LifemapGeometryError> {
        let bounds = Bounds::new(100.0, 100.0, 196.0, 148.0);
        let t = zoom_to_bounds(&bounds, [960.0, 480.0], &ZoomConfig::default())?;
        // max(96 / 960, 48 / 480) = 0.1
        assert_approx_eq!(f64, t.k, 9.0);
        assert_approx_eq!(f64, t.x, 480.0 - 148.0 * 9.0);
        assert_approx_eq!(f64, t.y, 240.0 - 124.0 * 9.0);

        let center = t.apply(bounds.center());
        assert_approx_eq!(f64, center[0], 480.0);
        assert_approx_eq!(f64, center[1], 240.0);
        Ok(())
    }

    #[test]
    fn test_scale_is_clamped() -> Result<(), LifemapGeometryError> {
        let config = ZoomConfig::default();
        let tiny = zoom_to_bounds(&Bounds::new(0.0, 0.0, 1.0, 1.0), [960.0, 480.0], &config)?;
        assert_approx_eq!(f64, tiny.k, 10.0);

        let huge = zoom_to_bounds(&Bounds::new(0.0, 0.0, 2000.0, 100.0), [960.0, 480.0], &config)?;
        assert_approx_eq!(f64, huge.k, 1.0);

        let point = zoom_to_bounds(&Bounds::new(5.0, 5.0, 5.0, 5.0), [960.0, 480.0], &config)?;
        assert_approx_eq!(f64, point.k, 10.0);
        Ok(())
    }

    #[test]
    fn test_invalid_viewport() {
        let err = zoom_to_bounds(
            &Bounds::new(0.0, 0.0, 1.0, 1.0),
            [0.0, 480.0],
            &ZoomConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LifemapGeometryError::InvalidViewport {
                width: 0.0,
                height: 480.0
            }
        );
    }

    #[test]
    fn test_invert_round_trip() {
        let t = ZoomTransform::new(3.0, -20.0, 15.0);
        let p = t.invert(t.apply([12.5, -4.0]));
        assert_approx_eq!(f64, p[0], 12.5);
        assert_approx_eq!(f64, p[1], -4.0);
        assert_eq!(t.to_svg_transform(), "translate(-20,15) scale(3)");
    }
}
