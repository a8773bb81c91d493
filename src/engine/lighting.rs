use crate::assets::color::Color;
use crate::engine::MockupStyle;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::paint::{CompositeOp, GradientStop, LinearGradient, RadialGradient};
use crate::templates::registry::ShapeTemplate;

const STUDIO_TOP: Color = Color::rgb(0xf8, 0xf9, 0xfa);
const STUDIO_BOTTOM: Color = Color::rgb(0xe9, 0xec, 0xef);

/// Diagonal light-grey studio backdrop.
pub fn draw_background(canvas: &mut Canvas2d) -> EngineResult<()> {
    let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
    canvas.save();
    canvas.reset_transform();
    canvas.set_fill(LinearGradient {
        start: Point::ORIGIN,
        end: Point::new(w, h),
        stops: vec![
            GradientStop::new(0.0, STUDIO_TOP),
            GradientStop::new(1.0, STUDIO_BOTTOM),
        ],
    });
    let drawn = canvas.fill_rect(Rect::new(0.0, 0.0, w, h));
    canvas.restore();
    drawn
}

/// Sheen and, for `3d`, a vignette over the whole surface. `minimal` skips this stage.
pub fn add_lighting_effects(
    canvas: &mut Canvas2d,
    template: &ShapeTemplate,
    style: MockupStyle,
) -> EngineResult<()> {
    if style == MockupStyle::Minimal {
        return Ok(());
    }
    canvas.save();
    canvas.reset_transform();
    canvas.clear_shadow();
    canvas.set_global_alpha(1.0);
    let lit = lighting_passes(canvas, template, style);
    canvas.restore();
    lit
}

fn lighting_passes(
    canvas: &mut Canvas2d,
    template: &ShapeTemplate,
    style: MockupStyle,
) -> EngineResult<()> {
    let (w, h) = (f64::from(template.width), f64::from(template.height));
    let full = Rect::new(0.0, 0.0, w, h);

    canvas.set_fill(LinearGradient {
        start: Point::ORIGIN,
        end: Point::new(w, h),
        stops: vec![
            GradientStop::new(0.0, Color::WHITE.with_alpha(0.15)),
            GradientStop::new(0.5, Color::WHITE.with_alpha(0.0)),
            GradientStop::new(1.0, Color::BLACK.with_alpha(0.05)),
        ],
    });
    canvas.set_composite_op(CompositeOp::Overlay);
    canvas.fill_rect(full)?;
    canvas.set_composite_op(CompositeOp::SourceOver);

    if style == MockupStyle::ThreeD {
        canvas.set_fill(RadialGradient {
            center: Point::new(w / 2.0, h / 2.0),
            inner: w * 0.4,
            outer: w * 0.9,
            stops: vec![
                GradientStop::new(0.0, Color::TRANSPARENT),
                GradientStop::new(1.0, Color::BLACK.with_alpha(0.1)),
            ],
        });
        canvas.fill_rect(full)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/engine/lighting.rs"]
mod tests;
