#[derive(Debug, thiserror::Error)]
pub enum LifemapSvgError {
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Invalid raster size {width} x {height}")]
    InvalidRasterSize { width: u32, height: u32 },

    #[error("PNG encoding error: {0}")]
    PngEncodingError(String),

    #[cfg(feature = "png")]
    #[error("usvg error: {0}")]
    UsvgError(#[from] usvg::Error),

    #[cfg(feature = "png")]
    #[error("roxml Error: {0}")]
    RoxmlError(#[from] usvg::roxmltree::Error),
}
