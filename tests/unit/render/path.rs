use super::*;
use kurbo::Shape;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn clockwise_sweep_wraps_negative_differences() {
    assert!(close(arc_sweep(0.0, PI, false), PI));
    assert!(close(arc_sweep(PI, 0.0, false), PI));
    assert!(close(arc_sweep(0.0, 2.0 * PI, false), TAU));
    assert!(close(arc_sweep(0.0, 5.0 * PI, false), TAU));
}

#[test]
fn counter_clockwise_sweep_is_negative() {
    assert!(close(arc_sweep(0.0, PI / 2.0, true), -1.5 * PI));
    assert!(close(arc_sweep(PI, 0.0, true), -PI));
    assert!(close(arc_sweep(2.0 * PI, 0.0, true), -TAU));
}

#[test]
fn arc_starts_with_move_and_joins_with_line() {
    let mut p = BezPath::new();
    arc(&mut p, (10.0, 10.0), 5.0, 0.0, PI, false);
    assert!(matches!(p.elements()[0], kurbo::PathEl::MoveTo(pt) if close(pt.x, 15.0)));

    let mut q = BezPath::new();
    q.move_to((0.0, 0.0));
    arc(&mut q, (10.0, 10.0), 5.0, 0.0, PI, false);
    assert!(matches!(q.elements()[1], kurbo::PathEl::LineTo(_)));
}

#[test]
fn arc_circle_bounds_match_radius() {
    let bb = arc_circle(50.0, 40.0, 10.0).bounding_box();
    assert!((bb.x0 - 40.0).abs() < 0.15);
    assert!((bb.x1 - 60.0).abs() < 0.15);
    assert!((bb.y0 - 30.0).abs() < 0.15);
    assert!((bb.y1 - 50.0).abs() < 0.15);
}

#[test]
fn shapes_cover_expected_bounds() {
    let r = rect(10.0, 20.0, 30.0, 40.0).bounding_box();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (10.0, 20.0, 40.0, 60.0));

    let rr = round_rect(0.0, 0.0, 100.0, 50.0, 80.0).bounding_box();
    assert!((rr.x1 - 100.0).abs() < 0.15 && (rr.y1 - 50.0).abs() < 0.15);

    let e = ellipse(100.0, 50.0, 40.0, 10.0).bounding_box();
    assert!((e.width() - 80.0).abs() < 0.15 && (e.height() - 20.0).abs() < 0.15);
}

#[test]
fn union_keeps_every_subpath() {
    let u = union([circle(0.0, 0.0, 1.0), circle(10.0, 0.0, 1.0)]);
    let moves = u
        .elements()
        .iter()
        .filter(|e| matches!(e, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}
