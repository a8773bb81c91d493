use std::sync::Arc;

use super::*;
use crate::assets::color::Color;
use crate::assets::decode::RasterDesign;
use crate::foundation::core::Point;

fn solid_design(w: u32, h: u32, px: [u8; 4]) -> DesignImage {
    DesignImage::Raster(RasterDesign {
        width: w,
        height: h,
        rgba8_premul: Arc::new(px.repeat((w * h) as usize)),
    })
}

fn white_canvas(w: u32, h: u32) -> Canvas2d {
    let mut c = Canvas2d::new(w, h).unwrap();
    c.set_fill(Color::WHITE);
    c.fill_rect(crate::foundation::core::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)))
        .unwrap();
    c
}

#[test]
fn minimal_draws_design_plainly() {
    let mut c = white_canvas(60, 60);
    let design = solid_design(4, 4, [0, 0, 255, 255]);
    let placement = DesignPlacement::new(10.0, 10.0, 20.0, 20.0);
    overlay_design(&mut c, &design, &placement, MockupStyle::Minimal).unwrap();
    assert_eq!(c.pixel(20, 20).unwrap(), [0, 0, 255, 255]);
    assert_eq!(c.pixel(40, 40).unwrap(), [255, 255, 255, 255]);
    assert!(c.stats().source_over_only());
}

#[test]
fn realistic_multiplies_at_reduced_opacity() {
    let mut c = white_canvas(40, 40);
    let design = solid_design(2, 2, [0, 0, 0, 255]);
    let placement = DesignPlacement::new(0.0, 0.0, 40.0, 40.0);
    overlay_design(&mut c, &design, &placement, MockupStyle::Realistic).unwrap();
    let px = c.pixel(20, 20).unwrap();
    // black multiplied over white at 0.9 leaves roughly 10% of the white.
    assert!((20..=30).contains(&px[0]), "{px:?}");
    assert!(c.stats().composite_ops.contains(&CompositeOp::Multiply));
}

#[test]
fn state_is_restored_after_overlay() {
    let mut c = white_canvas(20, 20);
    let design = solid_design(1, 1, [10, 10, 10, 255]);
    let placement = DesignPlacement::new(2.0, 2.0, 10.0, 10.0).with_rotation(30.0);
    overlay_design(&mut c, &design, &placement, MockupStyle::ThreeD).unwrap();
    assert_eq!(c.save_depth(), 0);
    assert_eq!(c.state().transform, Affine::IDENTITY);
    assert_eq!(c.state().composite, CompositeOp::SourceOver);
    assert_eq!(c.state().global_alpha, 1.0);
}

#[test]
fn perspective_shear_keeps_centre_fixed() {
    let center = Point::new(50.0, 80.0);
    let t = perspective_transform(center);
    let moved = t * center;
    assert!((moved - center).hypot() < 1e-9);
    let above = t * Point::new(50.0, 0.0);
    assert!((above.x - 54.0).abs() < 1e-9, "{above:?}");
}

#[test]
fn svg_designs_are_rasterized_to_the_placement() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#00ff00"/></svg>"##;
    let tree = crate::assets::decode::parse_svg(svg).unwrap();
    let mut c = white_canvas(50, 50);
    let placement = DesignPlacement::new(5.0, 5.0, 30.0, 30.0);
    overlay_design(&mut c, &DesignImage::Vector(tree), &placement, MockupStyle::Minimal)
        .unwrap();
    let px = c.pixel(20, 20).unwrap();
    assert!(px[1] > 240 && px[0] < 15, "{px:?}");
}
