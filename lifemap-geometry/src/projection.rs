use geo_types::Coord;

/// Maps geographic coordinates to screen coordinates
pub trait Projection: Send + Sync {
    fn project(&self, coord: Coord<f64>) -> Coord<f64>;

    fn project_degrees(&self, lon: f64, lat: f64) -> [f64; 2] {
        let c = self.project(Coord { x: lon, y: lat });
        [c.x, c.y]
    }
}

/// Leaves coordinates untouched, for geometry that is already in screen space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanarProjection;

impl Projection for PlanarProjection {
    fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        coord
    }
}

/// Plate carrée: longitude and latitude in degrees map linearly to x and y,
/// with y growing downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquirectangularProjection {
    pub scale: f64,
    pub translate: [f64; 2],
}

impl Default for EquirectangularProjection {
    fn default() -> Self {
        Self {
            scale: 152.63,
            translate: [480.0, 250.0],
        }
    }
}

impl EquirectangularProjection {
    pub fn new(scale: f64, translate: [f64; 2]) -> Self {
        Self { scale, translate }
    }

    /// Projection that fits the whole globe into a `width` x `height` viewport
    pub fn fit_world(width: f64, height: f64) -> Self {
        let scale = f64::min(
            width / (2.0 * std::f64::consts::PI),
            height / std::f64::consts::PI,
        );
        Self {
            scale,
            translate: [width / 2.0, height / 2.0],
        }
    }
}

impl Projection for EquirectangularProjection {
    fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: coord.x.to_radians() * self.scale + self.translate[0],
            y: -coord.y.to_radians() * self.scale + self.translate[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_equirectangular_origin_maps_to_translate() {
        let projection = EquirectangularProjection::default();
        let c = projection.project(Coord { x: 0.0, y: 0.0 });
        assert_approx_eq!(f64, c.x, 480.0);
        assert_approx_eq!(f64, c.y, 250.0);
    }

    #[test]
    fn test_equirectangular_north_is_up() {
        let projection = EquirectangularProjection::new(100.0, [0.0, 0.0]);
        let c = projection.project(Coord { x: 90.0, y: 45.0 });
        assert_approx_eq!(f64, c.x, 100.0 * std::f64::consts::FRAC_PI_2);
        assert_approx_eq!(f64, c.y, -100.0 * std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_fit_world() {
        let projection = EquirectangularProjection::fit_world(960.0, 480.0);
        let west = projection.project(Coord { x: -180.0, y: 90.0 });
        let east = projection.project(Coord { x: 180.0, y: -90.0 });
        assert_approx_eq!(f64, west.x, 0.0, epsilon = 1e-9);
        assert_approx_eq!(f64, west.y, 0.0, epsilon = 1e-9);
        assert_approx_eq!(f64, east.x, 960.0, epsilon = 1e-9);
        assert_approx_eq!(f64, east.y, 480.0, epsilon = 1e-9);
    }
}
