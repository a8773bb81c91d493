use super::*;
use crate::foundation::core::{Point, Vec2};
use crate::render::paint::{GradientStop, LinearGradient};

fn near(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
}

fn red() -> Color {
    Color::rgb(200, 10, 10)
}

#[test]
fn rejects_unallocatable_surfaces() {
    for (w, h) in [(0, 10), (10, 0), (70_000, 10)] {
        let err = Canvas2d::new(w, h).unwrap_err();
        assert!(matches!(err, EngineError::CanvasUnavailable(_)), "{w}x{h}");
    }
}

#[test]
fn new_surface_is_transparent() {
    let c = Canvas2d::new(8, 4).unwrap();
    assert_eq!(c.size(), SurfaceSize::new(8, 4));
    assert!(c.data().iter().all(|&b| b == 0));
    assert_eq!(c.pixel(8, 0), None);
}

#[test]
fn fill_rect_paints_inside_only() {
    let mut c = Canvas2d::new(40, 40).unwrap();
    c.set_fill(red());
    c.fill_rect(Rect::new(10.0, 10.0, 30.0, 30.0)).unwrap();
    assert!(near(c.pixel(20, 20).unwrap(), [200, 10, 10, 255]));
    assert_eq!(c.pixel(5, 5).unwrap(), [0, 0, 0, 0]);
    assert_eq!(c.pixel(35, 20).unwrap(), [0, 0, 0, 0]);
    assert_eq!(c.stats().draw_calls, 1);
    assert!(c.stats().source_over_only());
}

#[test]
fn transform_applies_to_geometry() {
    let mut c = Canvas2d::new(80, 80).unwrap();
    c.translate(50.0, 50.0);
    c.set_fill(Color::BLACK);
    c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    assert_eq!(c.pixel(55, 55).unwrap()[3], 255);
    assert_eq!(c.pixel(5, 5).unwrap()[3], 0);
}

#[test]
fn save_restore_round_trips_state() {
    let mut c = Canvas2d::new(10, 10).unwrap();
    c.save();
    c.translate(3.0, 4.0);
    c.set_global_alpha(0.5);
    c.set_composite_op(CompositeOp::Multiply);
    c.set_shadow(Shadow::new(Color::BLACK, 4.0, 0.0, 2.0));
    assert_eq!(c.save_depth(), 1);
    c.restore();
    assert_eq!(c.save_depth(), 0);
    assert_eq!(c.state(), &DrawState::default());

    // unbalanced restore is a no-op
    c.restore();
    assert_eq!(c.state(), &DrawState::default());
}

#[test]
fn invalid_alpha_and_line_width_are_ignored() {
    let mut c = Canvas2d::new(4, 4).unwrap();
    c.set_global_alpha(1.5);
    c.set_global_alpha(f32::NAN);
    c.set_line_width(-2.0);
    assert_eq!(c.state().global_alpha, 1.0);
    assert_eq!(c.state().line_width, 1.0);
}

#[test]
fn global_alpha_scales_coverage() {
    let mut c = Canvas2d::new(20, 20).unwrap();
    c.set_global_alpha(0.5);
    c.set_fill(Color::WHITE);
    c.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
    let px = c.pixel(10, 10).unwrap();
    assert!(px[3].abs_diff(128) <= 1, "{px:?}");
}

#[test]
fn multiply_composite_is_recorded_and_darkens() {
    let mut c = Canvas2d::new(20, 20).unwrap();
    c.set_fill(Color::rgb(200, 200, 200));
    c.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
    c.set_composite_op(CompositeOp::Multiply);
    c.set_fill(Color::rgb(128, 128, 128));
    c.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
    let px = c.pixel(10, 10).unwrap();
    assert!(px[0].abs_diff(100) <= 2, "{px:?}");
    assert!(c.stats().composite_ops.contains(&CompositeOp::Multiply));
    assert!(!c.stats().source_over_only());
}

#[test]
fn offset_shadow_paints_below_shape() {
    let mut c = Canvas2d::new(60, 60).unwrap();
    c.set_shadow(Shadow::new(Color::rgba(0, 0, 0, 0.5), 0.0, 0.0, 10.0));
    c.set_fill(Color::WHITE);
    c.fill_rect(Rect::new(10.0, 10.0, 30.0, 30.0)).unwrap();
    assert_eq!(c.stats().shadow_passes, 1);
    // shadow-only band below the rect
    let below = c.pixel(20, 35).unwrap();
    assert!(below[3].abs_diff(128) <= 2, "{below:?}");
    assert_eq!(below[0], 0);
    // shape itself stays on top
    assert!(near(c.pixel(20, 20).unwrap(), [255, 255, 255, 255]));
}

#[test]
fn blurred_shadow_spreads_past_the_edge() {
    let mut c = Canvas2d::new(80, 80).unwrap();
    c.set_shadow(Shadow::new(Color::BLACK, 10.0, 0.0, 0.0));
    c.set_fill(Color::WHITE);
    c.fill_rect(Rect::new(30.0, 30.0, 50.0, 50.0)).unwrap();
    let outside = c.pixel(40, 53).unwrap();
    assert!(outside[3] > 0);
    assert!(c.pixel(0, 0).unwrap()[3] == 0);
}

#[test]
fn invisible_shadow_is_skipped() {
    let mut c = Canvas2d::new(20, 20).unwrap();
    c.set_shadow(Shadow::new(Color::TRANSPARENT, 5.0, 0.0, 5.0));
    c.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0)).unwrap();
    assert_eq!(c.stats().shadow_passes, 0);
}

#[test]
fn stroke_covers_the_line_only() {
    let mut c = Canvas2d::new(50, 50).unwrap();
    let mut p = BezPath::new();
    p.move_to((5.0, 25.0));
    p.line_to((45.0, 25.0));
    c.set_stroke(Color::BLACK);
    c.set_line_width(4.0);
    c.stroke_path(&p).unwrap();
    assert_eq!(c.pixel(25, 25).unwrap()[3], 255);
    assert_eq!(c.pixel(25, 10).unwrap()[3], 0);
}

#[test]
fn linear_gradient_fill_varies_across_axis() {
    let mut c = Canvas2d::new(100, 10).unwrap();
    c.set_fill(LinearGradient {
        start: Point::new(0.0, 0.0),
        end: Point::new(100.0, 0.0),
        stops: vec![
            GradientStop::new(0.0, Color::WHITE),
            GradientStop::new(1.0, Color::BLACK),
        ],
    });
    c.fill_rect(Rect::new(0.0, 0.0, 100.0, 10.0)).unwrap();
    let left = c.pixel(1, 5).unwrap();
    let right = c.pixel(98, 5).unwrap();
    assert!(left[0] > 240 && right[0] < 15, "{left:?} {right:?}");
    assert_eq!(left[3], 255);
}

#[test]
fn draw_image_stretches_into_destination() {
    let img = RasterDesign {
        width: 2,
        height: 2,
        rgba8_premul: Arc::new([0u8, 0, 255, 255].repeat(4)),
    };
    let mut c = Canvas2d::new(40, 40).unwrap();
    c.draw_image(&img, Rect::new(10.0, 10.0, 30.0, 30.0)).unwrap();
    assert!(near(c.pixel(20, 20).unwrap(), [0, 0, 255, 255]));
    assert_eq!(c.pixel(35, 35).unwrap()[3], 0);

    // degenerate destinations draw nothing
    c.draw_image(&img, Rect::new(0.0, 0.0, 0.0, 10.0)).unwrap();
    assert_eq!(c.pixel(0, 5).unwrap()[3], 0);
}

#[test]
fn shapes_outside_surface_are_noops() {
    let mut c = Canvas2d::new(10, 10).unwrap();
    c.set_transform(Affine::translate(Vec2::new(100.0, 100.0)));
    c.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0)).unwrap();
    assert!(c.data().iter().all(|&b| b == 0));
}

#[test]
fn identical_draws_fingerprint_identically() {
    let draw = || {
        let mut c = Canvas2d::new(64, 64).unwrap();
        c.set_shadow(Shadow::new(Color::rgba(0, 0, 0, 0.15), 6.0, 0.0, 3.0));
        c.set_fill(Color::rgb(30, 120, 200));
        c.fill_path(&crate::render::path::circle(32.0, 32.0, 20.0))
            .unwrap();
        c.into_frame()
    };
    let (a, b) = (draw(), draw());
    assert!(a.premultiplied);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a, b);
}
