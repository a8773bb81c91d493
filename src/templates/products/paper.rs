use crate::assets::color::Color;
use crate::foundation::core::{BezPath, DesignArea, Rect};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::render::path;
use crate::templates::primitives::{
    INK, INK_DARK, INK_SOFT, drop_shadow, fill_and_stroke, outline_style, reset_shadow, shade,
};
use crate::templates::registry::ShapeTemplate;

pub(crate) const POSTER: ShapeTemplate = ShapeTemplate {
    key: "POSTER",
    width: 800,
    height: 1000,
    design_area: DesignArea::new(160, 110, 480, 680),
    draw: draw_poster,
};

pub(crate) const SPIRAL_NOTEBOOK: ShapeTemplate = ShapeTemplate {
    key: "SPIRAL_NOTEBOOK",
    width: 800,
    height: 1000,
    design_area: DesignArea::new(150, 150, 500, 700),
    draw: draw_spiral_notebook,
};

pub(crate) const CANVAS: ShapeTemplate = ShapeTemplate {
    key: "CANVAS",
    width: 800,
    height: 800,
    design_area: DesignArea::new(150, 150, 500, 500),
    draw: draw_canvas,
};

pub(crate) const JOURNAL: ShapeTemplate = ShapeTemplate {
    key: "JOURNAL",
    width: 800,
    height: 1000,
    design_area: DesignArea::new(200, 150, 430, 700),
    draw: draw_journal,
};

pub(crate) const PUZZLE: ShapeTemplate = ShapeTemplate {
    key: "PUZZLE",
    width: 900,
    height: 700,
    design_area: DesignArea::new(100, 100, 700, 500),
    draw: draw_puzzle,
};

fn draw_poster(c: &mut Canvas2d, _color: Color) -> EngineResult<()> {
    drop_shadow(c, 20.0, 40.0);
    outline_style(c, Color::WHITE, INK_DARK, 15.0);
    c.stroke_path(&path::rect(150.0, 100.0, 500.0, 700.0))?;
    reset_shadow(c);
    c.fill_rect(Rect::new(158.0, 108.0, 642.0, 792.0))
}

fn draw_spiral_notebook(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    let cover = path::round_rect(100.0, 100.0, 600.0, 800.0, 10.0);

    drop_shadow(c, 10.0, 20.0);
    c.set_fill(INK_SOFT);
    c.fill_path(&cover)?;
    outline_style(c, color, INK, 1.0);
    reset_shadow(c);
    fill_and_stroke(c, &cover)?;

    // rings of different rows never overlap
    let ys = (0u32..).map(|i| 120.0 + 40.0 * f64::from(i)).take_while(|y| *y < 880.0);
    let holes = path::union(ys.clone().map(|y| path::arc_circle(120.0, y, 6.0)));
    let rings = path::union(ys.map(|y| path::arc_circle(110.0, y, 15.0)));

    c.set_fill(Color::BLACK);
    c.fill_path(&holes)?;
    c.set_stroke(Color::rgb(0x88, 0x88, 0x88));
    c.set_line_width(8.0);
    c.stroke_path(&rings)
}

fn draw_canvas(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 20.0, 40.0);
    c.set_fill(color);
    c.fill_path(&path::rect(150.0, 150.0, 500.0, 500.0))?;
    reset_shadow(c);

    // wrapped edges
    let mut right = BezPath::new();
    right.move_to((650.0, 150.0));
    right.line_to((665.0, 162.0));
    right.line_to((665.0, 662.0));
    right.line_to((650.0, 650.0));
    right.close_path();
    c.set_fill(shade(color, -0.25));
    c.fill_path(&right)?;

    let mut bottom = BezPath::new();
    bottom.move_to((150.0, 650.0));
    bottom.line_to((650.0, 650.0));
    bottom.line_to((665.0, 662.0));
    bottom.line_to((162.0, 662.0));
    bottom.close_path();
    c.set_fill(shade(color, -0.35));
    c.fill_path(&bottom)?;

    c.set_stroke(INK);
    c.set_line_width(1.0);
    c.stroke_path(&path::rect(150.0, 150.0, 500.0, 500.0))
}

fn draw_journal(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    c.set_fill(Color::rgb(0xf5, 0xf1, 0xe8));
    c.fill_path(&path::round_rect(162.0, 108.0, 500.0, 780.0, 8.0))?;
    reset_shadow(c);

    outline_style(c, color, INK, 2.0);
    fill_and_stroke(c, &path::round_rect(150.0, 100.0, 500.0, 780.0, 12.0))?;

    c.set_fill(shade(color, -0.2));
    c.fill_path(&path::rect(150.0, 100.0, 36.0, 780.0))?;

    let mut ribbon = BezPath::new();
    ribbon.move_to((560.0, 880.0));
    ribbon.line_to((580.0, 880.0));
    ribbon.line_to((580.0, 945.0));
    ribbon.line_to((570.0, 932.0));
    ribbon.line_to((560.0, 945.0));
    ribbon.close_path();
    c.set_fill(Color::rgb(0xb2, 0x22, 0x22));
    c.fill_path(&ribbon)
}

fn draw_puzzle(c: &mut Canvas2d, color: Color) -> EngineResult<()> {
    drop_shadow(c, 10.0, 20.0);
    outline_style(c, color, INK_SOFT, 2.0);
    let board = path::rect(100.0, 100.0, 700.0, 500.0);
    c.fill_path(&board)?;
    reset_shadow(c);
    c.stroke_path(&board)?;

    let cols = [240.0, 380.0, 520.0, 660.0];
    let rows = [225.0, 350.0, 475.0];
    let mut seams = BezPath::new();
    for &x in &cols {
        seams.move_to((x, 100.0));
        let mut top = 100.0;
        for &bottom in rows.iter().chain(std::iter::once(&600.0)) {
            let mid = (top + bottom) / 2.0;
            seams.line_to((x, mid - 14.0));
            seams.quad_to((x + 28.0, mid), (x, mid + 14.0));
            seams.line_to((x, bottom));
            top = bottom;
        }
    }
    for &y in &rows {
        seams.move_to((100.0, y));
        let mut left = 100.0;
        for &right in cols.iter().chain(std::iter::once(&800.0)) {
            let mid = (left + right) / 2.0;
            seams.line_to((mid - 14.0, y));
            seams.quad_to((mid, y - 28.0), (mid + 14.0, y));
            seams.line_to((right, y));
            left = right;
        }
    }
    c.set_stroke(Color::BLACK.with_alpha(0.25));
    c.set_line_width(2.0);
    c.stroke_path(&seams)
}
