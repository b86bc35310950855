pub mod error;
#[cfg(feature = "png")]
pub mod png;
pub mod writer;

pub use writer::render_svg;
