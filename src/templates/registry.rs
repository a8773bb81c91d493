use crate::assets::color::Color;
use crate::foundation::core::{DesignArea, SurfaceSize};
use crate::foundation::error::EngineResult;
use crate::render::canvas::Canvas2d;
use crate::templates::products::{accessories, apparel, home, paper};

/// Paints a product silhouette in its local coordinate space.
pub type DrawFn = fn(&mut Canvas2d, Color) -> EngineResult<()>;

/// Geometry and drawing routine of one product type.
#[derive(Clone, Copy, Debug)]
pub struct ShapeTemplate {
    pub key: &'static str,
    pub width: u32,
    pub height: u32,
    /// Where the design lands, in surface pixels.
    pub design_area: DesignArea,
    pub(crate) draw: DrawFn,
}

impl ShapeTemplate {
    pub const fn dimensions(&self) -> SurfaceSize {
        SurfaceSize::new(self.width, self.height)
    }

    /// Paint the silhouette with `color` as its base.
    pub fn draw(&self, canvas: &mut Canvas2d, color: Color) -> EngineResult<()> {
        (self.draw)(canvas, color)
    }
}

pub const GENERIC_SQUARE: &str = "GENERIC_SQUARE";

const TEMPLATE_TABLE: [ShapeTemplate; 23] = [
    apparel::STANDARD_TEE,
    apparel::HOODIE,
    accessories::MUG,
    accessories::TOTE_BAG,
    accessories::PHONE_CASE,
    home::PILLOW,
    paper::POSTER,
    accessories::STICKER,
    paper::SPIRAL_NOTEBOOK,
    apparel::HAT,
    home::DESK_MAT,
    paper::CANVAS,
    accessories::LAPTOP_SKIN,
    apparel::DRESS,
    home::CLOCK,
    home::SHOWER_CURTAIN,
    paper::JOURNAL,
    paper::PUZZLE,
    apparel::SOCKS,
    apparel::APRON,
    accessories::BUTTON,
    home::GENERIC_RECTANGLE,
    home::GENERIC_SQUARE,
];

// Every design area must sit inside its surface.
const _: () = {
    let mut i = 0;
    while i < TEMPLATE_TABLE.len() {
        let t = &TEMPLATE_TABLE[i];
        assert!(t.width > 0 && t.height > 0);
        assert!(t.design_area.fits_within(t.dimensions()));
        i += 1;
    }
};

/// All product templates, in registry order.
pub static TEMPLATES: &[ShapeTemplate] = &TEMPLATE_TABLE;

/// Exact-key lookup.
pub fn template(key: &str) -> Option<&'static ShapeTemplate> {
    TEMPLATES.iter().find(|t| t.key == key)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.key)
}

pub(crate) fn generic_square() -> &'static ShapeTemplate {
    &TEMPLATES[TEMPLATES.len() - 1]
}

#[cfg(test)]
#[path = "../../tests/unit/templates/registry.rs"]
mod tests;
