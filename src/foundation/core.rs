use crate::foundation::error::{EngineError, EngineResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Integer rectangle in a template's local pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DesignArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DesignArea {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the area is non-empty and lies fully inside `[0,w) x [0,h)`.
    pub const fn fits_within(&self, size: SurfaceSize) -> bool {
        self.width > 0
            && self.height > 0
            && self.x as u64 + self.width as u64 <= size.width as u64
            && self.y as u64 + self.height as u64 <= size.height as u64
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x + self.width),
            f64::from(self.y + self.height),
        )
    }

    pub fn center(self) -> Point {
        self.to_rect().center()
    }
}

/// Axis-aligned pixel region, half-open on the right/bottom edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelRegion {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

impl PixelRegion {
    /// Snap a float rectangle outwards to whole pixels, grown by `pad`, clipped to the surface.
    pub(crate) fn covering(rect: Rect, pad: f64, size: SurfaceSize) -> Option<Self> {
        if !(rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite())
        {
            return None;
        }
        let clip = |v: f64, max: u32| -> u32 { v.clamp(0.0, f64::from(max)) as u32 };
        let region = Self {
            x0: clip((rect.x0 - pad).floor(), size.width),
            y0: clip((rect.y0 - pad).floor(), size.height),
            x1: clip((rect.x1 + pad).ceil(), size.width),
            y1: clip((rect.y1 + pad).ceil(), size.height),
        };
        (!region.is_empty()).then_some(region)
    }

    pub(crate) fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub(crate) fn width(self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub(crate) fn height(self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }
}

/// Check that a tightly packed RGBA8 buffer matches `size`.
pub(crate) fn expect_rgba_len(buf: &[u8], size: SurfaceSize, what: &str) -> EngineResult<()> {
    let expected = size
        .pixel_count()
        .checked_mul(4)
        .ok_or_else(|| EngineError::render(format!("{what}: buffer size overflow")))?;
    if buf.len() != expected {
        return Err(EngineError::render(format!(
            "{what}: expected {expected} bytes for {}x{}, got {}",
            size.width,
            size.height,
            buf.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
