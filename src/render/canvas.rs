use std::collections::BTreeSet;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::assets::color::Color;
use crate::assets::decode::RasterDesign;
use crate::foundation::core::{Affine, BezPath, PixelRegion, Rect, SurfaceSize};
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::math::{Fnv1a64, mul_div255_u8};
use crate::render::blur::blur_alpha;
use crate::render::composite::{SourceView, composite_region};
use crate::render::paint::{CompositeOp, Paint, Shadow};
use crate::render::path::SHAPE_TOLERANCE;

/// Largest accepted surface side, in pixels.
pub const MAX_SURFACE_SIDE: u32 = u16::MAX as u32;
/// Largest accepted surface area, in pixels.
pub const MAX_SURFACE_PIXELS: usize = 1 << 26;

/// RGBA8 pixels produced by a [`Canvas2d`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Stable hash of the size and pixels; equal frames hash equal across runs.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }
}

/// Mutable drawing parameters, pushed and popped by [`Canvas2d::save`]/[`Canvas2d::restore`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawState {
    pub transform: Affine,
    pub fill: Paint,
    pub stroke: Paint,
    pub line_width: f64,
    pub line_cap: kurbo::Cap,
    pub line_join: kurbo::Join,
    pub shadow: Option<Shadow>,
    pub global_alpha: f32,
    pub composite: CompositeOp,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            fill: Paint::default(),
            stroke: Paint::default(),
            line_width: 1.0,
            line_cap: kurbo::Cap::Butt,
            line_join: kurbo::Join::Miter,
            shadow: None,
            global_alpha: 1.0,
            composite: CompositeOp::SourceOver,
        }
    }
}

/// Counters collected while drawing; used to check style gating.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DrawStats {
    pub draw_calls: u32,
    pub shadow_passes: u32,
    pub composite_ops: BTreeSet<CompositeOp>,
}

impl DrawStats {
    /// True when every composite used plain source-over.
    pub fn source_over_only(&self) -> bool {
        self.composite_ops
            .iter()
            .all(|op| *op == CompositeOp::SourceOver)
    }
}

/// Raster surface with a 2D-canvas style drawing API.
///
/// Every draw call is rasterized by `vello_cpu` into a scratch layer, optionally shadowed,
/// then composited onto the premultiplied surface with the current operator and alpha.
pub struct Canvas2d {
    size: SurfaceSize,
    width_u16: u16,
    height_u16: u16,
    surface: Vec<u8>,
    layer: vello_cpu::Pixmap,
    state: DrawState,
    stack: Vec<DrawState>,
    stats: DrawStats,
}

impl std::fmt::Debug for Canvas2d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas2d")
            .field("size", &self.size)
            .field("state", &self.state)
            .field("save_depth", &self.stack.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Canvas2d {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> EngineResult<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::canvas_unavailable(format!(
                "surface must be non-empty, got {width}x{height}"
            )));
        }
        let width_u16: u16 = width.try_into().map_err(|_| {
            EngineError::canvas_unavailable(format!("surface width {width} exceeds {MAX_SURFACE_SIDE}"))
        })?;
        let height_u16: u16 = height.try_into().map_err(|_| {
            EngineError::canvas_unavailable(format!(
                "surface height {height} exceeds {MAX_SURFACE_SIDE}"
            ))
        })?;
        let size = SurfaceSize::new(width, height);
        if size.pixel_count() > MAX_SURFACE_PIXELS {
            return Err(EngineError::canvas_unavailable(format!(
                "surface {width}x{height} exceeds {MAX_SURFACE_PIXELS} pixels"
            )));
        }

        Ok(Self {
            size,
            width_u16,
            height_u16,
            surface: vec![0u8; size.pixel_count() * 4],
            layer: vello_cpu::Pixmap::new(width_u16, height_u16),
            state: DrawState::default(),
            stack: Vec::new(),
            stats: DrawStats::default(),
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn stats(&self) -> &DrawStats {
        &self.stats
    }

    /// Number of states currently saved.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Premultiplied RGBA8 surface bytes.
    pub fn data(&self) -> &[u8] {
        &self.surface
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        Some([
            self.surface[i],
            self.surface[i + 1],
            self.surface[i + 2],
            self.surface[i + 3],
        ])
    }

    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.surface,
            premultiplied: true,
        }
    }

    /// Drop every saved state and return to defaults. Pixels are untouched.
    pub fn reset_state(&mut self) {
        self.stack.clear();
        self.state = DrawState::default();
    }

    pub fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    /// Pop the last saved state. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.state.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.state.transform = Affine::IDENTITY;
    }

    /// Post-multiply the current transform, so `t` applies to local coordinates first.
    pub fn transform(&mut self, t: Affine) {
        self.state.transform *= t;
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.transform(Affine::translate((x, y)));
    }

    pub fn rotate(&mut self, radians: f64) {
        self.transform(Affine::rotate(radians));
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform(Affine::scale_non_uniform(sx, sy));
    }

    pub fn set_fill(&mut self, paint: impl Into<Paint>) {
        self.state.fill = paint.into();
    }

    pub fn set_stroke(&mut self, paint: impl Into<Paint>) {
        self.state.stroke = paint.into();
    }

    /// Non-positive or non-finite widths are ignored.
    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn set_line_cap(&mut self, cap: kurbo::Cap) {
        self.state.line_cap = cap;
    }

    pub fn set_line_join(&mut self, join: kurbo::Join) {
        self.state.line_join = join;
    }

    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = Some(shadow);
    }

    pub fn clear_shadow(&mut self) {
        self.state.shadow = None;
    }

    /// Values outside `[0, 1]` are ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    pub fn set_composite_op(&mut self, op: CompositeOp) {
        self.state.composite = op;
    }

    pub fn fill_path(&mut self, path: &BezPath) -> EngineResult<()> {
        let device = self.state.transform * path.clone();
        let paint = self.state.fill.clone();
        self.paint_device_path(&device, &paint)
    }

    pub fn fill_rect(&mut self, rect: Rect) -> EngineResult<()> {
        self.fill_path(&rect.to_path(SHAPE_TOLERANCE))
    }

    /// Stroke `path` with the current line style; the outline is built in local space.
    pub fn stroke_path(&mut self, path: &BezPath) -> EngineResult<()> {
        let style = kurbo::Stroke::new(self.state.line_width)
            .with_caps(self.state.line_cap)
            .with_join(self.state.line_join);
        let outline = kurbo::stroke(
            path.iter(),
            &style,
            &kurbo::StrokeOpts::default(),
            SHAPE_TOLERANCE,
        );
        let device = self.state.transform * outline;
        let paint = self.state.stroke.clone();
        self.paint_device_path(&device, &paint)
    }

    /// Draw `image` stretched into `dest` (local coordinates).
    pub fn draw_image(&mut self, image: &RasterDesign, dest: Rect) -> EngineResult<()> {
        self.stats.draw_calls += 1;
        let (iw, ih) = (f64::from(image.width), f64::from(image.height));
        let finite = dest.x0.is_finite()
            && dest.y0.is_finite()
            && dest.x1.is_finite()
            && dest.y1.is_finite();
        if image.width == 0 || image.height == 0 || !finite || dest.area() == 0.0 {
            return Ok(());
        }

        let local = Affine::translate((dest.x0, dest.y0))
            * Affine::scale_non_uniform(dest.width() / iw, dest.height() / ih);
        let device = self.state.transform * local;
        let src_rect = Rect::new(0.0, 0.0, iw, ih);
        let Some(region) =
            PixelRegion::covering(device.transform_rect_bbox(src_rect), 1.0, self.size)
        else {
            return Ok(());
        };

        let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.clear_layer();
        let mut ctx = vello_cpu::RenderContext::new(self.width_u16, self.height_u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(device));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
        ctx.flush();
        ctx.render_to_pixmap(&mut self.layer);

        self.composite_layer(region)
    }

    fn paint_device_path(&mut self, device: &BezPath, paint: &Paint) -> EngineResult<()> {
        self.stats.draw_calls += 1;
        let Some(region) = PixelRegion::covering(device.bounding_box(), 1.0, self.size) else {
            return Ok(());
        };

        // Gradients rasterize as white coverage and are shaded afterwards.
        let base = match paint {
            Paint::Solid(c) => *c,
            Paint::Linear(_) | Paint::Radial(_) => Color::WHITE,
        };

        self.clear_layer();
        let mut ctx = vello_cpu::RenderContext::new(self.width_u16, self.height_u16);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            base.r, base.g, base.b, base.a,
        ));
        ctx.fill_path(&bezpath_to_cpu(device));
        ctx.flush();
        ctx.render_to_pixmap(&mut self.layer);

        if paint.is_gradient() {
            self.shade_layer(paint, region);
        }
        self.composite_layer(region)
    }

    fn clear_layer(&mut self) {
        self.layer.data_as_u8_slice_mut().fill(0);
    }

    fn shade_layer(&mut self, paint: &Paint, region: PixelRegion) {
        let width = self.size.width as usize;
        let data = self.layer.data_as_u8_slice_mut();
        for y in region.y0..region.y1 {
            for x in region.x0..region.x1 {
                let i = (y as usize * width + x as usize) * 4;
                let coverage = u16::from(data[i + 3]);
                if coverage == 0 {
                    continue;
                }
                let g = paint.sample_premul(x, y);
                for c in 0..4 {
                    data[i + c] = mul_div255_u8(u16::from(g[c]), coverage);
                }
            }
        }
    }

    fn composite_layer(&mut self, region: PixelRegion) -> EngineResult<()> {
        let op = self.state.composite;
        let alpha = self.state.global_alpha;
        self.stats.composite_ops.insert(op);

        if let Some(shadow) = self.state.shadow.filter(Shadow::is_visible) {
            self.composite_shadow(shadow, region, op, alpha)?;
        }
        composite_region(
            &mut self.surface,
            self.size,
            SourceView::full(self.layer.data_as_u8_slice(), self.size.width),
            region,
            op,
            alpha,
        )
    }

    /// Offset, blur and tint the layer coverage, then composite it beneath the shape.
    fn composite_shadow(
        &mut self,
        shadow: Shadow,
        region: PixelRegion,
        op: CompositeOp,
        alpha: f32,
    ) -> EngineResult<()> {
        self.stats.shadow_passes += 1;

        let sigma = shadow.sigma();
        let dx = shadow.offset.x.round();
        let dy = shadow.offset.y.round();
        let shifted = Rect::new(
            f64::from(region.x0) + dx,
            f64::from(region.y0) + dy,
            f64::from(region.x1) + dx,
            f64::from(region.y1) + dy,
        );
        let Some(target) = PixelRegion::covering(shifted, (sigma * 3.0).ceil() + 1.0, self.size)
        else {
            return Ok(());
        };

        let (tw, th) = (target.width() as usize, target.height() as usize);
        let width = self.size.width as usize;
        let (dx, dy) = (dx as i64, dy as i64);
        let layer = self.layer.data_as_u8_slice();
        let mut coverage = vec![0u8; tw * th];
        for ty in 0..th {
            let sy = i64::from(target.y0) + ty as i64 - dy;
            if sy < i64::from(region.y0) || sy >= i64::from(region.y1) {
                continue;
            }
            for tx in 0..tw {
                let sx = i64::from(target.x0) + tx as i64 - dx;
                if sx < i64::from(region.x0) || sx >= i64::from(region.x1) {
                    continue;
                }
                coverage[ty * tw + tx] = layer[(sy as usize * width + sx as usize) * 4 + 3];
            }
        }

        let blurred = blur_alpha(&coverage, target.width(), target.height(), sigma)?;
        let tint = shadow.color.to_premul();
        let mut pixels = Vec::with_capacity(blurred.len() * 4);
        for &a in &blurred {
            for c in tint {
                pixels.push(mul_div255_u8(u16::from(c), u16::from(a)));
            }
        }

        composite_region(
            &mut self.surface,
            self.size,
            SourceView {
                data: &pixels,
                width: target.width(),
                x: target.x0,
                y: target.y0,
            },
            target,
            op,
            alpha,
        )
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> EngineResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| EngineError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| EngineError::render("image height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(EngineError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
