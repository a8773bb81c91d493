use super::*;
use crate::render::paint::Paint;

#[test]
fn drop_shadow_sets_canvas_shadow_and_reset_clears_it() {
    let mut c = Canvas2d::new(10, 10).unwrap();
    drop_shadow(&mut c, 15.0, 30.0);
    let s = c.state().shadow.unwrap();
    assert_eq!(s.color, Color::rgba8(0, 0, 0, 38));
    assert_eq!(s.blur, 30.0);
    assert_eq!((s.offset.x, s.offset.y), (0.0, 15.0));

    reset_shadow(&mut c);
    assert!(c.state().shadow.is_none());
}

#[test]
fn shade_matches_channel_interpolation() {
    let base = Color::rgb(100, 150, 200);
    assert_eq!(shade(base, -0.1), Color::rgb(90, 135, 180));
    assert_eq!(shade(base, 0.0), base);
}

#[test]
fn wrinkle_is_a_faint_two_pixel_stroke() {
    let mut c = Canvas2d::new(100, 100).unwrap();
    c.set_fill(Color::WHITE);
    c.fill_rect(kurbo::Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    wrinkle(&mut c, (10.0, 50.0), (90.0, 50.0), (50.0, 50.0), 0.5).unwrap();

    assert_eq!(c.state().line_width, WRINKLE_WIDTH);
    assert_eq!(c.stats().draw_calls, 2);
    let on = c.pixel(50, 50).unwrap();
    let off = c.pixel(50, 20).unwrap();
    assert!(on[0] < 200 && on[0] > 100, "{on:?}");
    assert_eq!(off, [255, 255, 255, 255]);
}

#[test]
fn crease_uses_default_wrinkle_opacity() {
    let mut c = Canvas2d::new(100, 100).unwrap();
    crease(&mut c, Point::new(10.0, 50.0), (90.0, 50.0), (50.0, 40.0)).unwrap();
    let Paint::Solid(stroke) = &c.state().stroke else {
        panic!("crease strokes with a solid color");
    };
    assert_eq!(*stroke, Color::BLACK.with_alpha(WRINKLE_ALPHA));
    assert_eq!(c.stats().draw_calls, 1);
}

#[test]
fn fill_and_stroke_issues_two_draws() {
    let mut c = Canvas2d::new(40, 40).unwrap();
    outline_style(&mut c, Color::WHITE, INK, 2.0);
    fill_and_stroke(&mut c, &crate::render::path::rect(5.0, 5.0, 30.0, 30.0)).unwrap();
    assert_eq!(c.stats().draw_calls, 2);
    assert_eq!(c.state().line_width, 2.0);
}
