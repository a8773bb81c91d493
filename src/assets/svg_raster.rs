use std::sync::Arc;

use crate::assets::decode::RasterDesign;
use crate::foundation::error::{EngineError, EngineResult};

const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG tree stretched to exactly `width x height` pixels.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> EngineResult<RasterDesign> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(EngineError::render(format!(
            "svg raster size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    let size = tree.size();
    if !size.width().is_finite() || !size.height().is_finite() {
        return Err(EngineError::render("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| EngineError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(RasterDesign {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.data().to_vec()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
