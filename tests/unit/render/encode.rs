use super::*;

fn frame(px: [u8; 4], w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: px.repeat((w * h) as usize),
        premultiplied: true,
    }
}

#[test]
fn png_round_trips_straight_alpha() {
    // premultiplied half-transparent red
    let f = frame([128, 0, 0, 128], 3, 2);
    let bytes = encode_frame(&f, OutputFormat::Png).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 128]);
}

#[test]
fn jpeg_flattens_on_white() {
    let f = frame([0, 0, 0, 0], 16, 16);
    let bytes = encode_frame(&f, OutputFormat::jpeg()).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
    let p = img.get_pixel(8, 8).0;
    assert!(p.iter().all(|&c| c >= 250), "{p:?}");
}

#[test]
fn data_url_prefix_follows_format() {
    let f = frame([10, 20, 30, 255], 2, 2);
    assert!(
        encode_data_url(&f, OutputFormat::Png)
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
    assert!(
        encode_data_url(&f, OutputFormat::jpeg())
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );
}

#[test]
fn mismatched_buffer_is_rejected() {
    let mut f = frame([0, 0, 0, 255], 2, 2);
    f.data.pop();
    let err = encode_frame(&f, OutputFormat::Png).unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
}

#[test]
fn output_format_serde_shape() {
    let json = serde_json::to_string(&OutputFormat::jpeg()).unwrap();
    assert_eq!(json, r#"{"format":"jpeg","quality":0.95}"#);
    let png: OutputFormat = serde_json::from_str(r#"{"format":"png"}"#).unwrap();
    assert_eq!(png, OutputFormat::Png);
    assert_eq!(OutputFormat::jpeg().extension(), "jpg");
}

#[test]
fn unpremultiply_handles_transparent_pixels() {
    let mut px = vec![10u8, 20, 30, 0, 64, 32, 0, 128];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..], &[128, 64, 0, 128]);
}
