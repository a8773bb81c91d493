use crate::assets::color::Color;
use crate::foundation::core::{Point, Vec2};

/// How a draw call combines with what is already on the surface.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOp {
    #[default]
    SourceOver,
    Multiply,
    Overlay,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Gradient along the segment `start -> end`, in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

/// Concentric radial gradient between `inner` and `outer` radii, in device pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub inner: f64,
    pub outer: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Self::Linear(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Self::Radial(g)
    }
}

impl Paint {
    pub(crate) fn is_gradient(&self) -> bool {
        !matches!(self, Self::Solid(_))
    }

    /// Premultiplied color at the centre of device pixel `(x, y)`.
    pub(crate) fn sample_premul(&self, x: u32, y: u32) -> [u8; 4] {
        let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        match self {
            Self::Solid(c) => c.to_premul(),
            Self::Linear(g) => {
                let d = g.end - g.start;
                let len2 = d.hypot2();
                let t = if len2 <= f64::EPSILON {
                    0.0
                } else {
                    (p - g.start).dot(d) / len2
                };
                stop_color_at(&g.stops, t as f32)
            }
            Self::Radial(g) => {
                let dist = Vec2::new(p.x - g.center.x, p.y - g.center.y).hypot();
                let span = g.outer - g.inner;
                let t = if span.abs() <= f64::EPSILON {
                    if dist < g.inner { 0.0 } else { 1.0 }
                } else {
                    (dist - g.inner) / span
                };
                stop_color_at(&g.stops, t as f32)
            }
        }
    }
}

/// Interpolate premultiplied stop colors; offsets outside the stop range take the nearest stop.
pub(crate) fn stop_color_at(stops: &[GradientStop], t: f32) -> [u8; 4] {
    let Some(first) = stops.first() else {
        return [0, 0, 0, 0];
    };
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    if t <= first.offset {
        return first.color.to_premul();
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let u = if span <= f32::EPSILON {
                1.0
            } else {
                (t - a.offset) / span
            };
            let (ca, cb) = (a.color.to_premul(), b.color.to_premul());
            let mut out = [0u8; 4];
            for i in 0..4 {
                let (x, y) = (f32::from(ca[i]), f32::from(cb[i]));
                out[i] = (x + (y - x) * u).round().clamp(0.0, 255.0) as u8;
            }
            return out;
        }
    }
    stops[stops.len() - 1].color.to_premul()
}

/// Canvas-style drop shadow. Offsets and blur are device pixels and ignore the transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f64,
    pub offset: Vec2,
}

impl Shadow {
    pub fn new(color: Color, blur: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            color,
            blur,
            offset: Vec2::new(offset_x, offset_y),
        }
    }

    /// A shadow only paints when it is visible and displaced or blurred.
    pub(crate) fn is_visible(&self) -> bool {
        self.color.a > 0 && (self.blur > 0.0 || self.offset.x != 0.0 || self.offset.y != 0.0)
    }

    /// Gaussian standard deviation matching a canvas `shadowBlur` value.
    pub(crate) fn sigma(&self) -> f64 {
        if self.blur.is_finite() {
            self.blur.max(0.0) / 2.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
