use super::*;
use crate::templates::registry::template;

fn grey_canvas(size: u32) -> Canvas2d {
    let mut c = Canvas2d::new(size, size).unwrap();
    c.set_fill(Color::rgb(128, 128, 128));
    let s = f64::from(size);
    c.fill_rect(Rect::new(0.0, 0.0, s, s)).unwrap();
    c
}

fn square() -> &'static ShapeTemplate {
    template("GENERIC_SQUARE").unwrap()
}

#[test]
fn minimal_skips_lighting() {
    let mut c = grey_canvas(800);
    let before = c.data().to_vec();
    add_lighting_effects(&mut c, square(), MockupStyle::Minimal).unwrap();
    assert_eq!(c.data(), &before[..]);
    assert_eq!(c.stats().draw_calls, 1);
}

#[test]
fn realistic_uses_overlay_then_returns_to_source_over() {
    let mut c = grey_canvas(800);
    add_lighting_effects(&mut c, square(), MockupStyle::Realistic).unwrap();
    assert!(c.stats().composite_ops.contains(&CompositeOp::Overlay));
    assert_eq!(c.state().composite, CompositeOp::SourceOver);
    assert_eq!(c.save_depth(), 0);
    // top-left is brightened by the sheen
    assert!(c.pixel(1, 1).unwrap()[0] > 128);
}

#[test]
fn three_d_darkens_corners_more_than_realistic() {
    let mut lit = grey_canvas(800);
    add_lighting_effects(&mut lit, square(), MockupStyle::Realistic).unwrap();
    let mut vignetted = grey_canvas(800);
    add_lighting_effects(&mut vignetted, square(), MockupStyle::ThreeD).unwrap();
    let corner_lit = lit.pixel(799, 0).unwrap()[0];
    let corner_3d = vignetted.pixel(799, 0).unwrap()[0];
    assert!(corner_3d < corner_lit, "{corner_3d} vs {corner_lit}");
    assert_eq!(lit.pixel(400, 400), vignetted.pixel(400, 400));
}

#[test]
fn background_is_light_diagonal_grey() {
    let mut c = Canvas2d::new(100, 100).unwrap();
    draw_background(&mut c).unwrap();
    let tl = c.pixel(0, 0).unwrap();
    let br = c.pixel(99, 99).unwrap();
    assert_eq!(tl[3], 255);
    assert!(tl[0] >= 0xf6 && br[0] <= 0xeb, "{tl:?} {br:?}");
}
