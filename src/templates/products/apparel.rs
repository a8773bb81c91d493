use std::f64::consts::PI;

use crate::assets::color::Color;
use crate::foundation::core::{BezPath, DesignArea};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::path;
use crate::templates::primitives::{
    INK, crease, drop_shadow, fill_and_stroke, outline_style, reset_shadow, shade, wrinkle,
};
use crate::templates::registry::ShapeTemplate;

pub(crate) const STANDARD_TEE: ShapeTemplate = ShapeTemplate {
    key: "STANDARD_TEE",
    width: 1000,
    height: 1000,
    design_area: DesignArea::new(350, 300, 300, 400),
    draw: draw_tee,
};

pub(crate) const HOODIE: ShapeTemplate = ShapeTemplate {
    key: "HOODIE",
    width: 900,
    height: 1100,
    design_area: DesignArea::new(280, 350, 340, 250),
    draw: draw_hoodie,
};

pub(crate) const HAT: ShapeTemplate = ShapeTemplate {
    key: "HAT",
    width: 1000,
    height: 800,
    design_area: DesignArea::new(400, 300, 200, 90),
    draw: draw_hat,
};

pub(crate) const DRESS: ShapeTemplate = ShapeTemplate {
    key: "DRESS",
    width: 800,
    height: 1100,
    design_area: DesignArea::new(300, 360, 200, 300),
    draw: draw_dress,
};

pub(crate) const SOCKS: ShapeTemplate = ShapeTemplate {
    key: "SOCKS",
    width: 700,
    height: 900,
    design_area: DesignArea::new(235, 200, 190, 300),
    draw: draw_socks,
};

pub(crate) const APRON: ShapeTemplate = ShapeTemplate {
    key: "APRON",
    width: 800,
    height: 1000,
    design_area: DesignArea::new(260, 300, 280, 300),
    draw: draw_apron,
};

fn draw_tee(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 15.0, 30.0);
    outline_style(c, color, INK, 2.0);

    let mut body = BezPath::new();
    body.move_to((380.0, 150.0));
    body.quad_to((500.0, 200.0), (620.0, 150.0));
    body.line_to((750.0, 180.0));
    body.quad_to((800.0, 250.0), (820.0, 350.0));
    body.line_to((720.0, 380.0));
    body.line_to((700.0, 300.0));
    body.quad_to((710.0, 500.0), (710.0, 800.0));
    body.quad_to((500.0, 820.0), (290.0, 800.0));
    body.quad_to((290.0, 500.0), (300.0, 300.0));
    body.line_to((280.0, 380.0));
    body.line_to((180.0, 350.0));
    body.quad_to((200.0, 250.0), (250.0, 180.0));
    body.line_to((380.0, 150.0));
    body.close_path();
    c.fill_path(&body)?;
    reset_shadow(c);
    c.stroke_path(&body)?;

    let mut collar = BezPath::new();
    collar.move_to((380.0, 150.0));
    collar.quad_to((500.0, 200.0), (620.0, 150.0));
    collar.quad_to((500.0, 230.0), (380.0, 150.0));
    c.set_fill(shade(color, -0.1));
    fill_and_stroke(c, &collar)?;

    wrinkle(c, (300.0, 300.0), (400.0, 400.0), (350.0, 350.0), 0.1)?;
    wrinkle(c, (700.0, 300.0), (600.0, 400.0), (650.0, 350.0), 0.1)
}

fn draw_hoodie(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 20.0, 40.0);
    outline_style(c, color, INK, 2.0);

    let mut hood = BezPath::new();
    hood.move_to((300.0, 150.0));
    hood.quad_to((450.0, 100.0), (600.0, 150.0));
    hood.line_to((600.0, 250.0));
    hood.line_to((300.0, 250.0));
    hood.close_path();
    fill_and_stroke(c, &hood)?;

    let mut body = BezPath::new();
    body.move_to((300.0, 250.0));
    body.line_to((150.0, 350.0));
    body.line_to((150.0, 900.0));
    body.quad_to((450.0, 950.0), (750.0, 900.0));
    body.line_to((750.0, 350.0));
    body.line_to((600.0, 250.0));
    body.close_path();
    fill_and_stroke(c, &body)?;

    c.set_fill(shade(color, -0.05));
    fill_and_stroke(c, &path::round_rect(300.0, 600.0, 300.0, 200.0, 20.0))?;
    reset_shadow(c);
    Ok(())
}

fn draw_hat(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, INK, 4.0);

    let mut crown = BezPath::new();
    path::arc(&mut crown, (500.0, 400.0), 250.0, PI, 0.0, false);
    crown.close_path();
    c.fill_path(&crown)?;
    reset_shadow(c);
    c.stroke_path(&crown)?;

    // panel seams
    let mut seams = BezPath::new();
    seams.move_to((500.0, 150.0));
    seams.line_to((500.0, 400.0));
    seams.move_to((420.0, 163.0));
    seams.quad_to((360.0, 280.0), (370.0, 400.0));
    seams.move_to((580.0, 163.0));
    seams.quad_to((640.0, 280.0), (630.0, 400.0));
    c.set_stroke(shade(color, -0.2));
    c.set_line_width(2.0);
    c.stroke_path(&seams)?;

    c.set_fill(shade(color, -0.15));
    c.fill_path(&path::circle(500.0, 152.0, 12.0))?;

    outline_style(c, shade(color, -0.08), INK, 4.0);
    fill_and_stroke(c, &path::round_rect(250.0, 400.0, 500.0, 60.0, 10.0))
}

fn draw_dress(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 20.0, 40.0);
    outline_style(c, color, INK, 2.0);

    let mut dress = BezPath::new();
    dress.move_to((310.0, 140.0));
    dress.line_to((350.0, 140.0));
    dress.quad_to((400.0, 210.0), (450.0, 140.0));
    dress.line_to((490.0, 140.0));
    dress.quad_to((520.0, 240.0), (505.0, 330.0));
    dress.quad_to((620.0, 650.0), (690.0, 960.0));
    dress.quad_to((400.0, 1010.0), (110.0, 960.0));
    dress.quad_to((180.0, 650.0), (295.0, 330.0));
    dress.quad_to((280.0, 240.0), (310.0, 140.0));
    dress.close_path();
    c.fill_path(&dress)?;
    reset_shadow(c);
    c.stroke_path(&dress)?;

    c.set_fill(shade(color, -0.15));
    c.fill_path(&path::rect(293.0, 322.0, 214.0, 24.0))?;

    wrinkle(c, (330.0, 700.0), (250.0, 940.0), (300.0, 820.0), 0.08)?;
    wrinkle(c, (470.0, 700.0), (550.0, 940.0), (500.0, 820.0), 0.08)?;
    crease(c, (400.0, 720.0), (400.0, 970.0), (390.0, 850.0))
}

fn draw_socks(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, INK, 2.0);

    let mut sock = BezPath::new();
    sock.move_to((230.0, 120.0));
    sock.line_to((430.0, 120.0));
    sock.line_to((430.0, 560.0));
    sock.quad_to((440.0, 640.0), (520.0, 680.0));
    sock.line_to((560.0, 700.0));
    sock.quad_to((620.0, 740.0), (575.0, 790.0));
    sock.line_to((420.0, 790.0));
    sock.quad_to((240.0, 780.0), (232.0, 620.0));
    sock.close_path();
    c.fill_path(&sock)?;
    reset_shadow(c);
    c.stroke_path(&sock)?;

    let mut toe = BezPath::new();
    toe.move_to((520.0, 680.0));
    toe.line_to((560.0, 700.0));
    toe.quad_to((620.0, 740.0), (575.0, 790.0));
    toe.line_to((520.0, 790.0));
    toe.close_path();
    c.set_fill(shade(color, -0.15));
    c.fill_path(&toe)?;

    outline_style(c, shade(color, -0.1), INK, 2.0);
    fill_and_stroke(c, &path::rect(225.0, 100.0, 210.0, 60.0))?;

    let mut ribs = BezPath::new();
    let mut x = 245.0;
    while x < 430.0 {
        ribs.move_to((x, 104.0));
        ribs.line_to((x, 156.0));
        x += 20.0;
    }
    c.set_stroke(shade(color, -0.25));
    c.set_line_width(2.0);
    c.stroke_path(&ribs)
}

fn draw_apron(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    let strap = shade(color, -0.2);
    let mut neck = BezPath::new();
    path::arc(&mut neck, (400.0, 200.0), 110.0, PI, 0.0, false);
    c.set_stroke(strap);
    c.set_line_width(14.0);
    c.stroke_path(&neck)?;

    let mut ties = BezPath::new();
    ties.move_to((190.0, 430.0));
    ties.quad_to((130.0, 470.0), (90.0, 540.0));
    ties.move_to((610.0, 430.0));
    ties.quad_to((670.0, 470.0), (710.0, 540.0));
    c.set_line_width(10.0);
    c.stroke_path(&ties)?;

    drop_shadow(c, 15.0, 30.0);
    outline_style(c, color, INK, 2.0);
    let mut body = BezPath::new();
    body.move_to((250.0, 200.0));
    body.line_to((550.0, 200.0));
    body.line_to((560.0, 330.0));
    body.quad_to((610.0, 345.0), (620.0, 420.0));
    body.line_to((640.0, 880.0));
    body.quad_to((400.0, 910.0), (160.0, 880.0));
    body.line_to((180.0, 420.0));
    body.quad_to((190.0, 345.0), (240.0, 330.0));
    body.close_path();
    c.fill_path(&body)?;
    reset_shadow(c);
    c.stroke_path(&body)?;

    c.set_fill(shade(color, -0.06));
    fill_and_stroke(c, &path::round_rect(300.0, 660.0, 200.0, 150.0, 12.0))
}
