use std::f64::consts::{PI, TAU};

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Flattening tolerance for curves built from shapes, in local units.
pub const SHAPE_TOLERANCE: f64 = 0.1;

pub fn rect(x: f64, y: f64, w: f64, h: f64) -> BezPath {
    Rect::new(x, y, x + w, y + h).to_path(SHAPE_TOLERANCE)
}

pub fn round_rect(x: f64, y: f64, w: f64, h: f64, radius: f64) -> BezPath {
    let r = radius.max(0.0).min(w.abs() / 2.0).min(h.abs() / 2.0);
    kurbo::RoundedRect::new(x, y, x + w, y + h, r).to_path(SHAPE_TOLERANCE)
}

pub fn circle(cx: f64, cy: f64, r: f64) -> BezPath {
    kurbo::Circle::new((cx, cy), r).to_path(SHAPE_TOLERANCE)
}

pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> BezPath {
    kurbo::Ellipse::new((cx, cy), (rx, ry), 0.0).to_path(SHAPE_TOLERANCE)
}

/// Sweep of a canvas `arc()` call.
///
/// Clockwise arcs whose end precedes the start wrap forward by whole turns; a difference of
/// a full turn or more draws the whole circle.
pub fn arc_sweep(start: f64, end: f64, counter_clockwise: bool) -> f64 {
    let delta = end - start;
    if !counter_clockwise {
        if delta >= TAU {
            TAU
        } else {
            delta.rem_euclid(TAU)
        }
    } else if -delta >= TAU {
        -TAU
    } else {
        -((-delta).rem_euclid(TAU))
    }
}

/// Append a circular arc to `path`, connecting from the current point with a line.
pub fn arc(
    path: &mut BezPath,
    center: impl Into<Point>,
    radius: f64,
    start: f64,
    end: f64,
    counter_clockwise: bool,
) {
    let center = center.into();
    let first = center + Vec2::from_angle(start) * radius;
    if path.elements().is_empty() {
        path.move_to(first);
    } else {
        path.line_to(first);
    }

    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: arc_sweep(start, end, counter_clockwise),
        x_rotation: 0.0,
    };
    for el in arc.append_iter(SHAPE_TOLERANCE) {
        path.push(el);
    }
}

/// Closed full circle drawn through [`arc`], matching `arc(cx, cy, r, 0, 2PI)`.
pub fn arc_circle(cx: f64, cy: f64, r: f64) -> BezPath {
    let mut p = BezPath::new();
    arc(&mut p, (cx, cy), r, 0.0, 2.0 * PI, false);
    p.close_path();
    p
}

/// Concatenate several closed sub-paths into one path.
pub fn union(parts: impl IntoIterator<Item = BezPath>) -> BezPath {
    let mut out = BezPath::new();
    for part in parts {
        for el in part.elements() {
            out.push(*el);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/path.rs"]
mod tests;
