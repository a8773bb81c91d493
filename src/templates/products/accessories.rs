use std::f64::consts::PI;

use crate::assets::color::Color;
use crate::foundation::core::{BezPath, DesignArea, Rect};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::path;
use crate::templates::primitives::{
    INK_DARK, INK_SOFT, drop_shadow, fill_and_stroke, outline_style, reset_shadow, shade,
};
use crate::templates::registry::ShapeTemplate;

pub(crate) const MUG: ShapeTemplate = ShapeTemplate {
    key: "MUG",
    width: 800,
    height: 700,
    design_area: DesignArea::new(300, 250, 220, 250),
    draw: draw_mug,
};

pub(crate) const TOTE_BAG: ShapeTemplate = ShapeTemplate {
    key: "TOTE_BAG",
    width: 800,
    height: 900,
    design_area: DesignArea::new(250, 350, 300, 350),
    draw: draw_tote_bag,
};

pub(crate) const PHONE_CASE: ShapeTemplate = ShapeTemplate {
    key: "PHONE_CASE",
    width: 600,
    height: 1000,
    design_area: DesignArea::new(160, 240, 280, 440),
    draw: draw_phone_case,
};

pub(crate) const STICKER: ShapeTemplate = ShapeTemplate {
    key: "STICKER",
    width: 600,
    height: 600,
    design_area: DesignArea::new(150, 150, 300, 300),
    draw: draw_sticker,
};

pub(crate) const BUTTON: ShapeTemplate = ShapeTemplate {
    key: "BUTTON",
    width: 600,
    height: 600,
    design_area: DesignArea::new(180, 180, 240, 240),
    draw: draw_button,
};

pub(crate) const LAPTOP_SKIN: ShapeTemplate = ShapeTemplate {
    key: "LAPTOP_SKIN",
    width: 1000,
    height: 700,
    design_area: DesignArea::new(180, 130, 640, 400),
    draw: draw_laptop_skin,
};

fn draw_mug(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);

    let mut handle = BezPath::new();
    path::arc(&mut handle, (580.0, 350.0), 90.0, -PI / 2.0, PI / 2.0, false);
    c.set_stroke(color);
    c.set_line_width(25.0);
    c.stroke_path(&handle)?;
    reset_shadow(c);
    c.set_stroke(INK_DARK);
    c.set_line_width(2.0);
    c.stroke_path(&handle)?;

    // separate fills: the rim must not cut into the body
    let mut body = BezPath::new();
    body.move_to((220.0, 200.0));
    body.line_to((230.0, 550.0));
    body.quad_to((400.0, 600.0), (570.0, 550.0));
    body.line_to((580.0, 200.0));
    c.set_fill(color);
    c.fill_path(&body)?;
    c.stroke_path(&body)?;

    let rim = path::ellipse(400.0, 200.0, 180.0, 40.0);
    c.set_fill(shade(color, -0.08));
    fill_and_stroke(c, &rim)?;

    c.set_fill(Color::WHITE.with_alpha(0.4));
    c.fill_rect(Rect::new(260.0, 250.0, 290.0, 550.0))
}

fn draw_tote_bag(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let bag = path::rect(200.0, 300.0, 400.0, 450.0);
    c.fill_path(&bag)?;
    reset_shadow(c);
    c.stroke_path(&bag)?;

    c.set_fill(INK_DARK);
    c.fill_path(&path::union([
        path::rect(250.0, 100.0, 30.0, 200.0),
        path::rect(520.0, 100.0, 30.0, 200.0),
    ]))?;

    let mut strap = BezPath::new();
    path::arc(&mut strap, (400.0, 100.0), 135.0, PI, 0.0, false);
    c.set_stroke(INK_DARK);
    c.set_line_width(30.0);
    c.stroke_path(&strap)
}

fn draw_phone_case(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 25.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let case = path::round_rect(150.0, 100.0, 300.0, 600.0, 45.0);
    c.fill_path(&case)?;
    reset_shadow(c);
    c.stroke_path(&case)?;

    c.set_fill(INK_DARK);
    c.fill_path(&path::round_rect(170.0, 120.0, 100.0, 100.0, 25.0))
}

fn draw_sticker(c: &mut Canvas2d, _color: Color) -> EngineResult<()> {
    drop_shadow(c, 8.0, 15.0);
    outline_style(c, Color::WHITE, Color::rgb(0xcc, 0xcc, 0xcc), 4.0);

    let mut sticker = BezPath::new();
    sticker.move_to((300.0, 100.0));
    sticker.quad_to((500.0, 100.0), (500.0, 300.0));
    sticker.quad_to((500.0, 500.0), (300.0, 500.0));
    sticker.quad_to((100.0, 500.0), (100.0, 300.0));
    sticker.quad_to((100.0, 100.0), (300.0, 100.0));
    c.fill_path(&sticker)?;
    reset_shadow(c);
    c.stroke_path(&sticker)
}

fn draw_button(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 8.0, 15.0);
    outline_style(c, color, Color::rgb(0xbb, 0xbb, 0xbb), 3.0);
    let face = path::circle(300.0, 300.0, 180.0);
    c.fill_path(&face)?;
    reset_shadow(c);
    c.stroke_path(&face)?;

    // rolled metal edge
    c.set_stroke(Color::WHITE.with_alpha(0.35));
    c.set_line_width(6.0);
    c.stroke_path(&path::circle(300.0, 300.0, 170.0))
}

fn draw_laptop_skin(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 15.0, 30.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let lid = path::round_rect(150.0, 100.0, 700.0, 460.0, 24.0);
    c.fill_path(&lid)?;
    reset_shadow(c);
    c.stroke_path(&lid)?;

    outline_style(c, Color::rgb(0xc8, 0xc8, 0xc8), INK_SOFT, 2.0);
    fill_and_stroke(c, &path::round_rect(100.0, 560.0, 800.0, 26.0, 10.0))?;

    c.set_fill(Color::rgb(0x99, 0x99, 0x99));
    c.fill_path(&path::round_rect(440.0, 560.0, 120.0, 10.0, 4.0))
}
