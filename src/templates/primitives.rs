//! Small drawing helpers shared by the product silhouettes.

use crate::assets::color::Color;
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::paint::Shadow;

/// Soft studio shadow cast by every product.
pub const SHADOW_COLOR: Color = Color::rgba(0, 0, 0, 0.15);
/// Default opacity of a fabric wrinkle.
pub const WRINKLE_ALPHA: f32 = 0.05;
pub const WRINKLE_WIDTH: f64 = 2.0;

pub const INK: Color = Color::rgb(0x22, 0x22, 0x22);
pub const INK_DARK: Color = Color::rgb(0x11, 0x11, 0x11);
pub const INK_SOFT: Color = Color::rgb(0x33, 0x33, 0x33);

/// Cast a drop shadow `offset_y` pixels below subsequent draws.
pub fn drop_shadow(canvas: &mut Canvas2d, offset_y: f64, blur: f64) {
    canvas.set_shadow(Shadow::new(SHADOW_COLOR, blur, 0.0, offset_y));
}

pub fn reset_shadow(canvas: &mut Canvas2d) {
    canvas.clear_shadow();
}

/// Lighten (`amount > 0`) or darken (`amount < 0`) a base color.
pub fn shade(color: Color, amount: f32) -> Color {
    color.shade(amount)
}

/// Faint quadratic crease from `from` to `to` bending towards `ctrl`.
pub fn wrinkle(
    canvas: &mut Canvas2d,
    from: impl Into<Point>,
    to: impl Into<Point>,
    ctrl: impl Into<Point>,
    alpha: f32,
) -> EngineResult<()> {
    let (from, to, ctrl): (Point, Point, Point) = (from.into(), to.into(), ctrl.into());
    let mut p = BezPath::new();
    p.move_to(from);
    p.quad_to(ctrl, to);
    canvas.set_stroke(Color::BLACK.with_alpha(alpha));
    canvas.set_line_width(WRINKLE_WIDTH);
    canvas.stroke_path(&p)
}

/// [`wrinkle`] at [`WRINKLE_ALPHA`].
pub fn crease(
    canvas: &mut Canvas2d,
    from: impl Into<Point>,
    to: impl Into<Point>,
    ctrl: impl Into<Point>,
) -> EngineResult<()> {
    wrinkle(canvas, from, to, ctrl, WRINKLE_ALPHA)
}

/// Fill then outline `path` with the current paints.
pub fn fill_and_stroke(canvas: &mut Canvas2d, path: &BezPath) -> EngineResult<()> {
    canvas.fill_path(path)?;
    canvas.stroke_path(path)
}

/// Set fill, outline color and outline width in one go.
pub fn outline_style(canvas: &mut Canvas2d, fill: Color, stroke: Color, width: f64) {
    canvas.set_fill(fill);
    canvas.set_stroke(stroke);
    canvas.set_line_width(width);
}

#[cfg(test)]
#[path = "../../tests/unit/templates/primitives.rs"]
mod tests;
