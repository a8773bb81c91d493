use super::*;
use crate::templates::registry::TEMPLATES;

fn key_of(product_type: &str) -> &'static str {
    resolve_template(product_type).template.key
}

#[test]
fn exact_keys_win() {
    for t in TEMPLATES {
        let r = resolve_template(t.key);
        assert_eq!(r.template.key, t.key);
        assert_eq!(r.matched, MatchKind::Exact);
    }
}

#[test]
fn substring_rules_are_case_insensitive() {
    assert_eq!(key_of("Premium Hoodie V2"), "HOODIE");
    assert_eq!(key_of("16oz Ceramic Mug"), "MUG");
    assert_eq!(key_of("LARGE_PRINT_TEE"), "STANDARD_TEE");
    assert_eq!(key_of("iPhone 15 Case"), "PHONE_CASE");
}

#[test]
fn earlier_rules_shadow_later_ones() {
    // "tee" precedes the print catch-all
    assert_eq!(key_of("art print tee"), "STANDARD_TEE");
    // "tote" precedes the generic bag branch
    assert_eq!(key_of("tote bag"), "TOTE_BAG");
    match resolve_template("tote bag").matched {
        MatchKind::Rule { index, needle } => {
            assert_eq!(needle, "tote");
            assert_eq!(RULES[index].key, "TOTE_BAG");
        }
        other => panic!("unexpected match {other:?}"),
    }
}

#[test]
fn catch_all_families_route() {
    assert_eq!(key_of("Greeting Card"), "GENERIC_RECTANGLE");
    assert_eq!(key_of("MOUSE_PAD"), "DESK_MAT");
    assert_eq!(key_of("Acrylic Block"), "GENERIC_SQUARE");
    assert_eq!(key_of("coaster"), "GENERIC_SQUARE");
    assert_eq!(key_of("POUCH"), "TOTE_BAG");
    assert_eq!(key_of("BACKPACK"), "TOTE_BAG");
    assert_eq!(key_of("enamel pin"), "BUTTON");
}

#[test]
fn duffle_bag_takes_the_generic_bag_branch() {
    let r = resolve_template("duffle bag");
    assert_eq!(r.template.key, "TOTE_BAG");
    assert_eq!(
        r.matched,
        MatchKind::Rule {
            index: RULES.len() - 1,
            needle: "bag"
        }
    );
}

#[test]
fn unknown_types_fall_back_to_generic_square() {
    for input in ["flying_carpet", "unknown_widget_123", ""] {
        let r = resolve_template(input);
        assert_eq!(r.template.key, "GENERIC_SQUARE", "{input}");
        assert_eq!(r.matched, MatchKind::Fallback);
        assert_eq!((r.template.width, r.template.height), (800, 800));
    }
}

#[test]
fn every_rule_targets_a_registered_template() {
    for r in RULES {
        assert!(template(r.key).is_some(), "{}", r.key);
        assert!(r.needles.iter().all(|n| *n == n.to_lowercase()));
    }
}
