use super::*;

#[test]
fn classifies_uris() {
    assert_eq!(
        DesignSource::from_uri("https://cdn.example.com/a.png"),
        DesignSource::Http("https://cdn.example.com/a.png".to_owned())
    );
    assert_eq!(
        DesignSource::from_uri("HTTP://cdn.example.com/a.png"),
        DesignSource::Http("HTTP://cdn.example.com/a.png".to_owned())
    );
    assert!(matches!(
        DesignSource::from_uri("data:image/png;base64,AAAA"),
        DesignSource::DataUri(_)
    ));
    assert_eq!(
        DesignSource::from_uri("file:///tmp/design.png"),
        DesignSource::File(PathBuf::from("/tmp/design.png"))
    );
    assert_eq!(
        DesignSource::from_uri("designs/a.png"),
        DesignSource::File(PathBuf::from("designs/a.png"))
    );
}

#[test]
fn data_uri_roundtrip() {
    let uri = encode_data_uri("image/png", b"\x89PNG-ish");
    assert!(uri.starts_with("data:image/png;base64,"));
    let payload = decode_data_uri(&uri).unwrap();
    assert_eq!(payload.mime.as_deref(), Some("image/png"));
    assert_eq!(payload.bytes, b"\x89PNG-ish");
}

#[test]
fn data_uri_without_mime_or_with_params() {
    let p = decode_data_uri("data:;base64,aGk=").unwrap();
    assert_eq!(p.mime, None);
    assert_eq!(p.bytes, b"hi");

    let p = decode_data_uri("DATA:Image/SVG+xml;charset=utf-8;base64,aGk=").unwrap();
    assert_eq!(p.mime.as_deref(), Some("image/svg+xml"));
}

#[test]
fn data_uri_errors_are_image_load_errors() {
    for bad in [
        "data:image/png;base64",
        "data:image/png,plain",
        "data:image/png;base64,@@@",
        "https://x",
    ] {
        let err = decode_data_uri(bad).unwrap_err();
        assert!(err.is_image_load(), "{bad}");
    }
}
