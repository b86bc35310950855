use geo::{BoundingRect, MapCoords};
use geo_types::Geometry;
use serde::{Deserialize, Serialize};

use crate::error::LifemapGeometryError;
use crate::projection::Projection;

/// Axis-aligned screen-space box `[x0, y0]`..`[x1, y1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bounds {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> [f64; 2] {
        [(self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0]
    }
}

/// Screen-space bounds of `geometry` after projection
pub fn bounds_of(
    geometry: &Geometry<f64>,
    projection: &dyn Projection,
) -> Result<Bounds, LifemapGeometryError> {
    let projected = geometry.map_coords(|c| projection.project(c));
    let rect = projected
        .bounding_rect()
        .ok_or(LifemapGeometryError::EmptyGeometry)?;
    Ok(Bounds::new(
        rect.min().x,
        rect.min().y,
        rect.max().x,
        rect.max().y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{EquirectangularProjection, PlanarProjection};
    use float_cmp::assert_approx_eq;
    use geo_types::{polygon, GeometryCollection, MultiPolygon};

    #[test]
    fn test_planar_bounds() -> Result<(), LifemapGeometryError> {
        let poly = polygon![(x: 10.0, y: 20.0), (x: 50.0, y: 25.0), (x: 30.0, y: 80.0)];
        let bounds = bounds_of(&Geometry::Polygon(poly), &PlanarProjection)?;
        assert_eq!(bounds, Bounds::new(10.0, 20.0, 50.0, 80.0));
        assert_eq!(bounds.center(), [30.0, 50.0]);
        Ok(())
    }

    #[test]
    fn test_projected_bounds_flip_latitude() -> Result<(), LifemapGeometryError> {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)];
        let projection = EquirectangularProjection::new(180.0 / std::f64::consts::PI, [0.0, 0.0]);
        let bounds = bounds_of(&Geometry::MultiPolygon(MultiPolygon::new(vec![poly])), &projection)?;
        assert_approx_eq!(f64, bounds.x0, 0.0, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.x1, 10.0, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.y0, -10.0, epsilon = 1e-9);
        assert_approx_eq!(f64, bounds.y1, 0.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_empty_geometry() {
        let empty = Geometry::GeometryCollection(GeometryCollection::<f64>::default());
        assert_eq!(
            bounds_of(&empty, &PlanarProjection),
            Err(LifemapGeometryError::EmptyGeometry)
        );
    }
}
