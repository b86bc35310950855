use lifemap_scales::error::LifemapScaleError;
use lifemap_scenegraph::error::LifemapSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LifemapGuidesError {
    #[error("Legend bar must have positive size, got {bar_width} x {bar_height} for a {width} x {height} legend")]
    InvalidLegendDimensions {
        width: f32,
        height: f32,
        bar_width: f32,
        bar_height: f32,
    },

    #[error("Legend step size must be positive, got {0}")]
    InvalidStepSize(f32),

    #[error("Logarithmic legend axis requires a strictly positive domain, got ({0}, {1})")]
    InvalidLogDomain(f32, f32),

    #[error("Invalid scale: {0}")]
    InvalidScale(#[from] LifemapScaleError),

    #[error("Invalid scene: {0}")]
    InvalidScene(#[from] LifemapSceneGraphError),
}
