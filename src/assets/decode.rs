use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::SurfaceSize;
use crate::foundation::error::EngineResult;
use crate::render::canvas::MAX_SURFACE_SIDE;

/// Decoded raster design in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct RasterDesign {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// A design ready for compositing.
///
/// Vector designs stay as a parsed tree and are rasterized at the exact pixel size of the
/// placement they are drawn into.
#[derive(Clone)]
pub enum DesignImage {
    Raster(RasterDesign),
    Vector(Arc<usvg::Tree>),
}

impl std::fmt::Debug for DesignImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let kind = match self {
            Self::Raster(_) => "Raster",
            Self::Vector(_) => "Vector",
        };
        f.debug_struct("DesignImage")
            .field("kind", &kind)
            .field("width", &size.width)
            .field("height", &size.height)
            .finish()
    }
}

impl DesignImage {
    /// Intrinsic size (SVG sizes are rounded up to whole pixels).
    pub fn size(&self) -> SurfaceSize {
        match self {
            Self::Raster(r) => SurfaceSize::new(r.width, r.height),
            Self::Vector(tree) => {
                let s = tree.size();
                SurfaceSize::new(
                    s.width().ceil().max(1.0) as u32,
                    s.height().ceil().max(1.0) as u32,
                )
            }
        }
    }

    /// Build a raster design from straight-alpha RGBA8 pixels.
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> EngineResult<Self> {
        crate::foundation::core::expect_rgba_len(&rgba, SurfaceSize::new(width, height), "design")?;
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self::Raster(RasterDesign {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
        }))
    }
}

/// Decode design bytes, choosing SVG parsing when the media type or content says so.
pub fn decode_design(bytes: &[u8], mime: Option<&str>) -> EngineResult<DesignImage> {
    if mime.is_some_and(|m| m.contains("svg")) || looks_like_svg(bytes) {
        return Ok(DesignImage::Vector(parse_svg(bytes)?));
    }
    Ok(DesignImage::Raster(decode_image(bytes)?))
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
///
/// Images with a side longer than [`MAX_SURFACE_SIDE`] are scaled down, keeping the aspect
/// ratio, to the largest size that fits.
pub fn decode_image(bytes: &[u8]) -> EngineResult<RasterDesign> {
    let mut dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    if dyn_img.width() > MAX_SURFACE_SIDE || dyn_img.height() > MAX_SURFACE_SIDE {
        tracing::debug!(
            width = dyn_img.width(),
            height = dyn_img.height(),
            "scaling oversized design down"
        );
        dyn_img = dyn_img.resize(
            MAX_SURFACE_SIDE,
            MAX_SURFACE_SIDE,
            image::imageops::FilterType::Triangle,
        );
    }
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(RasterDesign {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> EngineResult<Arc<usvg::Tree>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(Arc::new(tree))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
