use geo_types::Geometry;
use log::debug;

use crate::bounds::bounds_of;
use crate::error::LifemapGeometryError;
use crate::projection::Projection;
use crate::transition::ZoomTransition;
use crate::zoom::{zoom_to_bounds, ZoomConfig, ZoomTransform};

/// Tracks the map's current zoom and produces transitions when regions are selected
pub struct ZoomController<P: Projection> {
    projection: P,
    viewport: [f64; 2],
    config: ZoomConfig,
    current: ZoomTransform,
}

impl<P: Projection> ZoomController<P> {
    pub fn try_new(
        projection: P,
        viewport: [f64; 2],
        config: ZoomConfig,
    ) -> Result<Self, LifemapGeometryError> {
        let [width, height] = viewport;
        if !(width > 0.0 && height > 0.0) {
            return Err(LifemapGeometryError::InvalidViewport { width, height });
        }
        config.validate()?;
        Ok(Self {
            projection,
            viewport,
            config,
            current: ZoomTransform::IDENTITY,
        })
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn viewport(&self) -> [f64; 2] {
        self.viewport
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn current(&self) -> ZoomTransform {
        self.current
    }

    /// Zoom to fit `geometry`. The controller moves to the target immediately;
    /// the returned transition describes the animation from the previous view.
    pub fn on_region_selected(
        &mut self,
        geometry: &Geometry<f64>,
    ) -> Result<ZoomTransition, LifemapGeometryError> {
        let bounds = bounds_of(geometry, &self.projection)?;
        let target = zoom_to_bounds(&bounds, self.viewport, &self.config)?;
        debug!(
            "Zooming to bounds {:?}: k={}, translate=({}, {})",
            bounds, target.k, target.x, target.y
        );
        Ok(self.move_to(target))
    }

    /// Return to the unzoomed view
    pub fn reset(&mut self) -> ZoomTransition {
        self.move_to(ZoomTransform::IDENTITY)
    }

    fn move_to(&mut self, target: ZoomTransform) -> ZoomTransition {
        let transition =
            ZoomTransition::new(self.current, target, self.viewport, self.config.duration_ms);
        self.current = target;
        transition
    }
}
