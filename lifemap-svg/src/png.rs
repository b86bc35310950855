use lazy_static::lazy_static;
use lifemap_common::canvas::CanvasDimensions;
use resvg::render;
use std::panic;
use std::sync::{Arc, Mutex};
use usvg::fontdb::Database;

use crate::error::LifemapSvgError;

lazy_static! {
    pub static ref FONT_DB: Mutex<usvg::fontdb::Database> = Mutex::new(init_font_db());
}

fn init_font_db() -> usvg::fontdb::Database {
    let mut font_database = Database::new();
    font_database.load_system_fonts();
    font_database
}

/// Rasterize an SVG document, scaling its intrinsic size by `scale`
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, LifemapSvgError> {
    let fontdb = {
        let guard = FONT_DB
            .lock()
            .map_err(|err| LifemapSvgError::InternalError(err.to_string()))?;
        Arc::new(guard.clone())
    };

    // resvg may panic on malformed input
    let response = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        let xml_opt = usvg::roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let opts = usvg::Options {
            fontdb,
            ..Default::default()
        };
        let doc = usvg::roxmltree::Document::parse_with_options(svg, xml_opt)?;
        let rtree = usvg::Tree::from_xmltree(&doc, &opts)?;

        let dimensions =
            CanvasDimensions::new(rtree.size().width(), rtree.size().height()).with_scale(scale);
        let width = dimensions.to_physical_width();
        let height = dimensions.to_physical_height();
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(LifemapSvgError::InvalidRasterSize { width, height })?;

        let transform = tiny_skia::Transform::from_scale(scale, scale);
        render(&rtree, transform, &mut pixmap.as_mut());
        pixmap
            .encode_png()
            .map_err(|err| LifemapSvgError::PngEncodingError(err.to_string()))
    }));

    match response {
        Ok(result) => result,
        Err(_) => Err(LifemapSvgError::InternalError(
            "SVG rasterization panicked".to_string(),
        )),
    }
}
