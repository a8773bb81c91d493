use crate::foundation::core::{PixelRegion, SurfaceSize, expect_rgba_len};
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::math::{mul_div255_u8, unit_to_u8};
use crate::render::paint::CompositeOp;

pub type PremulRgba8 = [u8; 4];

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = u16::from(unit_to_u8(opacity));
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Separable blend followed by source-over, on premultiplied pixels.
///
/// `blend_fn(s, d)` receives unpremultiplied unit channels.
pub fn blend<F>(dst: PremulRgba8, src: PremulRgba8, opacity: f32, blend_fn: F) -> PremulRgba8
where
    F: Fn(f32, f32) -> f32,
{
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    // out_a = sa + da * (1 - sa)
    // out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
    let sa = (f32::from(src[3]) / 255.0) * opacity;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sp = (f32::from(src[i]) / 255.0) * opacity;
        let dp = f32::from(dst[i]) / 255.0;
        let sc = if sa > 0.0 { (sp / sa).clamp(0.0, 1.0) } else { 0.0 };
        let dc = if da > 0.0 { (dp / da).clamp(0.0, 1.0) } else { 0.0 };
        let b = blend_fn(sc, dc).clamp(0.0, 1.0);
        let out_p = (sp * (1.0 - da) + dp * (1.0 - sa) + b * sa * da).clamp(0.0, out_a);
        out[i] = unit_to_u8(out_p);
    }
    out[3] = unit_to_u8(out_a);
    out
}

pub fn multiply(s: f32, d: f32) -> f32 {
    s * d
}

pub fn overlay(s: f32, d: f32) -> f32 {
    if d <= 0.5 {
        2.0 * s * d
    } else {
        1.0 - 2.0 * (1.0 - s) * (1.0 - d)
    }
}

/// Premultiplied source pixels whose top-left pixel lands at `(x, y)` on the destination.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SourceView<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) width: u32,
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl<'a> SourceView<'a> {
    pub(crate) fn full(data: &'a [u8], width: u32) -> Self {
        Self {
            data,
            width,
            x: 0,
            y: 0,
        }
    }

    fn height(&self) -> u32 {
        if self.width == 0 {
            0
        } else {
            (self.data.len() / 4 / self.width as usize) as u32
        }
    }

    fn contains(&self, region: PixelRegion) -> bool {
        region.x0 >= self.x
            && region.y0 >= self.y
            && region.x1 <= self.x + self.width
            && region.y1 <= self.y + self.height()
    }
}

/// Composite `src` into the `region` of `dst` with the given operator and opacity.
pub(crate) fn composite_region(
    dst: &mut [u8],
    size: SurfaceSize,
    src: SourceView<'_>,
    region: PixelRegion,
    op: CompositeOp,
    opacity: f32,
) -> EngineResult<()> {
    expect_rgba_len(dst, size, "composite target")?;
    if src.data.len() % 4 != 0 || src.width == 0 {
        return Err(EngineError::render("composite source is not rgba8"));
    }
    if region.x1 > size.width || region.y1 > size.height || !src.contains(region) {
        return Err(EngineError::render(format!(
            "composite region {region:?} exceeds target or source bounds"
        )));
    }
    if region.is_empty() || opacity <= 0.0 {
        return Ok(());
    }

    // Operator dispatch happens once per call; each arm gets its own kernel.
    match op {
        CompositeOp::SourceOver => {
            composite_kernel(dst, size, src, region, |d, s| over(d, s, opacity))
        }
        CompositeOp::Multiply => {
            composite_kernel(dst, size, src, region, |d, s| blend(d, s, opacity, multiply))
        }
        CompositeOp::Overlay => {
            composite_kernel(dst, size, src, region, |d, s| blend(d, s, opacity, overlay))
        }
    }
    Ok(())
}

#[inline(always)]
fn composite_kernel<F>(
    dst: &mut [u8],
    size: SurfaceSize,
    src: SourceView<'_>,
    region: PixelRegion,
    px_fn: F,
) where
    F: Fn(PremulRgba8, PremulRgba8) -> PremulRgba8,
{
    let dst_stride = size.width as usize * 4;
    let src_stride = src.width as usize * 4;
    let row_bytes = region.width() as usize * 4;

    for y in region.y0..region.y1 {
        let d0 = y as usize * dst_stride + region.x0 as usize * 4;
        let s0 = (y - src.y) as usize * src_stride + (region.x0 - src.x) as usize * 4;
        let drow = &mut dst[d0..d0 + row_bytes];
        let srow = &src.data[s0..s0 + row_bytes];
        for (d, s) in drow.chunks_exact_mut(4).zip(srow.chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let out = px_fn([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
