use crate::assets::decode::DesignImage;
use crate::assets::svg_raster::rasterize_svg;
use crate::engine::{DesignPlacement, MockupStyle};
use crate::foundation::core::Affine;
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::paint::CompositeOp;

/// Opacity of the design under the realistic (multiply) style.
pub const REALISTIC_DESIGN_ALPHA: f32 = 0.9;
/// Horizontal shear giving the design a slight 3D lean.
pub const PERSPECTIVE_SHEAR: f64 = -0.05;

/// Shear about `center` by [`PERSPECTIVE_SHEAR`].
pub fn perspective_transform(center: kurbo::Point) -> Affine {
    Affine::translate(center.to_vec2())
        * Affine::new([1.0, 0.0, PERSPECTIVE_SHEAR, 1.0, 0.0, 0.0])
        * Affine::translate(-center.to_vec2())
}

/// Draw `design` stretched into `placement`, styled for `style`.
///
/// The drawing state is saved before and restored after, including on error, so the
/// blend mode and transform never leak into later passes.
pub fn overlay_design(
    canvas: &mut Canvas2d,
    design: &DesignImage,
    placement: &DesignPlacement,
    style: MockupStyle,
) -> EngineResult<()> {
    let rect = placement.rect();
    let rasterized;
    let raster = match design {
        DesignImage::Raster(r) => r,
        DesignImage::Vector(tree) => {
            let w = rect.width().round().max(1.0) as u32;
            let h = rect.height().round().max(1.0) as u32;
            rasterized = rasterize_svg(tree, w, h)?;
            &rasterized
        }
    };

    canvas.save();
    let center = rect.center();
    if placement.rotation != 0.0 {
        canvas.transform(Affine::rotate_about(placement.rotation.to_radians(), center));
    }
    if style == MockupStyle::ThreeD || placement.perspective {
        canvas.transform(perspective_transform(center));
    }
    if style == MockupStyle::Realistic {
        canvas.set_composite_op(CompositeOp::Multiply);
        canvas.set_global_alpha(REALISTIC_DESIGN_ALPHA);
    }
    let drawn = canvas.draw_image(raster, rect);
    canvas.restore();
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/engine/compositor.rs"]
mod tests;
