use crate::templates::registry::{ShapeTemplate, generic_square, template};

/// One substring routing rule: the first needle contained in the lower-cased product type wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub needles: &'static [&'static str],
    pub key: &'static str,
}

const fn rule(needles: &'static [&'static str], key: &'static str) -> RouteRule {
    RouteRule { needles, key }
}

/// Ordered routing table; earlier rules win.
pub static RULES: &[RouteRule] = &[
    rule(&["tee"], "STANDARD_TEE"),
    rule(&["hoodie"], "HOODIE"),
    rule(&["mug"], "MUG"),
    rule(&["tote"], "TOTE_BAG"),
    rule(&["case"], "PHONE_CASE"),
    rule(&["pillow"], "PILLOW"),
    rule(&["poster"], "POSTER"),
    rule(&["sticker"], "STICKER"),
    rule(&["notebook"], "SPIRAL_NOTEBOOK"),
    rule(&["hat", "cap"], "HAT"),
    rule(&["mat", "mouse"], "DESK_MAT"),
    rule(&["canvas"], "CANVAS"),
    rule(&["skin", "laptop"], "LAPTOP_SKIN"),
    rule(&["dress", "skirt"], "DRESS"),
    rule(&["clock"], "CLOCK"),
    rule(&["curtain"], "SHOWER_CURTAIN"),
    rule(&["journal"], "JOURNAL"),
    rule(&["puzzle"], "PUZZLE"),
    rule(&["sock"], "SOCKS"),
    rule(&["apron"], "APRON"),
    rule(&["button", "pin", "magnet"], "BUTTON"),
    rule(&["coaster"], "GENERIC_SQUARE"),
    rule(
        &[
            "card", "blanket", "tapestry", "duvet", "scarf", "towel", "banner", "flag", "print",
            "rug",
        ],
        "GENERIC_RECTANGLE",
    ),
    rule(&["block", "tile", "acrylic", "square"], "GENERIC_SQUARE"),
    rule(&["bag", "pouch", "backpack"], "TOTE_BAG"),
];

/// Which step of the lookup produced the template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Rule { index: usize, needle: &'static str },
    Fallback,
}

#[derive(Clone, Copy, Debug)]
pub struct Resolution {
    pub template: &'static ShapeTemplate,
    pub matched: MatchKind,
}

/// Map a free-form product type to a template. Never fails.
pub fn resolve_template(product_type: &str) -> Resolution {
    let resolution = lookup(product_type);
    tracing::debug!(
        product_type,
        template = resolution.template.key,
        matched = ?resolution.matched,
        "resolved product template"
    );
    resolution
}

fn lookup(product_type: &str) -> Resolution {
    if let Some(t) = template(product_type) {
        return Resolution {
            template: t,
            matched: MatchKind::Exact,
        };
    }

    let lower = product_type.to_lowercase();
    for (index, r) in RULES.iter().enumerate() {
        let Some(needle) = r.needles.iter().copied().find(|n| lower.contains(n)) else {
            continue;
        };
        if let Some(t) = template(r.key) {
            return Resolution {
                template: t,
                matched: MatchKind::Rule { index, needle },
            };
        }
    }

    Resolution {
        template: generic_square(),
        matched: MatchKind::Fallback,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/resolve.rs"]
mod tests;
