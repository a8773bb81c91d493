use std::f64::consts::TAU;

use crate::assets::color::Color;
use crate::foundation::core::{BezPath, DesignArea, Point, Vec2};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::paint::{GradientStop, RadialGradient};
use crate::render::path;
use crate::templates::primitives::{
    INK, INK_SOFT, drop_shadow, outline_style, reset_shadow, shade, wrinkle,
};
use crate::templates::registry::ShapeTemplate;

pub(crate) const PILLOW: ShapeTemplate = ShapeTemplate {
    key: "PILLOW",
    width: 800,
    height: 800,
    design_area: DesignArea::new(200, 200, 400, 400),
    draw: draw_pillow,
};

pub(crate) const DESK_MAT: ShapeTemplate = ShapeTemplate {
    key: "DESK_MAT",
    width: 1000,
    height: 600,
    design_area: DesignArea::new(90, 140, 820, 320),
    draw: draw_desk_mat,
};

pub(crate) const CLOCK: ShapeTemplate = ShapeTemplate {
    key: "CLOCK",
    width: 800,
    height: 800,
    design_area: DesignArea::new(230, 230, 340, 340),
    draw: draw_clock,
};

pub(crate) const SHOWER_CURTAIN: ShapeTemplate = ShapeTemplate {
    key: "SHOWER_CURTAIN",
    width: 800,
    height: 1000,
    design_area: DesignArea::new(150, 150, 500, 700),
    draw: draw_shower_curtain,
};

pub(crate) const GENERIC_RECTANGLE: ShapeTemplate = ShapeTemplate {
    key: "GENERIC_RECTANGLE",
    width: 1000,
    height: 700,
    design_area: DesignArea::new(140, 140, 720, 420),
    draw: draw_generic_rectangle,
};

pub(crate) const GENERIC_SQUARE: ShapeTemplate = ShapeTemplate {
    key: "GENERIC_SQUARE",
    width: 800,
    height: 800,
    design_area: DesignArea::new(150, 150, 500, 500),
    draw: draw_generic_square,
};

fn draw_pillow(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 15.0, 30.0);
    outline_style(c, color, Color::rgb(0xcc, 0xcc, 0xcc), 1.0);

    let mut pillow = BezPath::new();
    pillow.move_to((150.0, 150.0));
    pillow.quad_to((400.0, 100.0), (650.0, 150.0));
    pillow.quad_to((700.0, 400.0), (650.0, 650.0));
    pillow.quad_to((400.0, 700.0), (150.0, 650.0));
    pillow.quad_to((100.0, 400.0), (150.0, 150.0));
    c.fill_path(&pillow)?;
    reset_shadow(c);
    c.stroke_path(&pillow)?;

    c.set_fill(RadialGradient {
        center: Point::new(400.0, 400.0),
        inner: 100.0,
        outer: 400.0,
        stops: vec![
            GradientStop::new(0.0, Color::WHITE.with_alpha(0.2)),
            GradientStop::new(1.0, Color::BLACK.with_alpha(0.1)),
        ],
    });
    c.fill_path(&pillow)
}

fn draw_desk_mat(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let mat = path::round_rect(60.0, 110.0, 880.0, 380.0, 30.0);
    c.fill_path(&mat)?;
    reset_shadow(c);
    c.stroke_path(&mat)?;

    // stitched edge
    c.set_stroke(shade(color, -0.25));
    c.set_line_width(3.0);
    c.stroke_path(&path::round_rect(72.0, 122.0, 856.0, 356.0, 24.0))
}

fn draw_clock(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 25.0);
    outline_style(c, color, INK, 12.0);
    let face = path::circle(400.0, 400.0, 250.0);
    c.fill_path(&face)?;
    reset_shadow(c);
    c.stroke_path(&face)?;

    let center = Point::new(400.0, 400.0);
    let mut ticks = BezPath::new();
    for hour in 0u32..12 {
        let dir = Vec2::from_angle(TAU * f64::from(hour) / 12.0);
        ticks.move_to(center + dir * 212.0);
        ticks.line_to(center + dir * 234.0);
    }
    c.set_stroke(INK_SOFT);
    c.set_line_width(6.0);
    c.stroke_path(&ticks)?;

    c.set_fill(INK);
    c.fill_path(&path::circle(400.0, 400.0, 8.0))
}

fn draw_shower_curtain(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    c.set_fill(Color::rgb(0x99, 0x99, 0x99));
    c.fill_path(&path::round_rect(80.0, 70.0, 640.0, 12.0, 6.0))?;

    drop_shadow(c, 15.0, 30.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let mut curtain = BezPath::new();
    curtain.move_to((120.0, 100.0));
    curtain.line_to((680.0, 100.0));
    curtain.line_to((690.0, 880.0));
    curtain.quad_to((400.0, 920.0), (110.0, 880.0));
    curtain.close_path();
    c.fill_path(&curtain)?;
    reset_shadow(c);
    c.stroke_path(&curtain)?;

    let rings = path::union((0u32..10).map(|i| path::circle(130.0 + 60.0 * f64::from(i), 96.0, 10.0)));
    c.set_stroke(Color::rgb(0x77, 0x77, 0x77));
    c.set_line_width(4.0);
    c.stroke_path(&rings)?;

    for x in [250.0, 400.0, 550.0] {
        wrinkle(c, (x, 110.0), (x + 10.0, 880.0), (x - 20.0, 500.0), 0.08)?;
    }
    Ok(())
}

fn draw_generic_rectangle(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let item = path::round_rect(100.0, 100.0, 800.0, 500.0, 16.0);
    c.fill_path(&item)?;
    reset_shadow(c);
    c.stroke_path(&item)
}

fn draw_generic_square(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, Color::BLACK, 4.0);
    let item = path::round_rect(100.0, 100.0, 600.0, 600.0, 20.0);
    c.fill_path(&item)?;
    reset_shadow(c);
    c.stroke_path(&item)
}
