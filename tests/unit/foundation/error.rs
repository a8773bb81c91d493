use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EngineError::image_load("https://example.com/a.png", "404")
            .to_string()
            .contains("image load error:")
    );
    assert!(
        EngineError::canvas_unavailable("x")
            .to_string()
            .contains("canvas unavailable:")
    );
    assert!(
        EngineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(EngineError::render("x").to_string().contains("render error:"));
    assert!(EngineError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EngineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn image_load_truncates_long_urls() {
    let url = format!("data:image/png;base64,{}", "A".repeat(500));
    let err = EngineError::image_load(&url, "bad data");
    let EngineError::ImageLoad { url: shown, .. } = &err else {
        panic!("expected ImageLoad");
    };
    assert_eq!(shown.chars().count(), 53);
    assert!(shown.ends_with("..."));
    assert!(err.is_image_load());
}

#[test]
fn short_urls_are_kept_verbatim() {
    assert_eq!(truncate_url("x.png"), "x.png");
    assert!(!EngineError::validation("x").is_image_load());
}
