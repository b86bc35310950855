use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LifemapGeometryError {
    #[error("Geometry has no coordinates")]
    EmptyGeometry,

    #[error("Viewport must have positive size, got {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Invalid zoom scale extent: [{0}, {1}]")]
    InvalidScaleExtent(f64, f64),
}
