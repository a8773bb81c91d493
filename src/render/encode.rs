use std::io::Cursor;

use image::ImageEncoder as _;

use crate::assets::source::encode_data_uri;
use crate::foundation::core::{SurfaceSize, expect_rgba_len};
use crate::foundation::error::{EngineError, EngineResult};
use crate::render::canvas::FrameRGBA;

/// Default JPEG quality, as a unit fraction.
pub const DEFAULT_JPEG_QUALITY: f32 = 0.95;

/// Encoded output format of a mockup.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    /// Lossy output flattened onto white; `quality` is in `(0, 1]`.
    Jpeg { quality: f32 },
}

impl OutputFormat {
    pub fn jpeg() -> Self {
        Self::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg { .. } => "image/jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpg",
        }
    }
}

/// Encode a premultiplied frame to PNG or JPEG bytes.
pub fn encode_frame(frame: &FrameRGBA, format: OutputFormat) -> EngineResult<Vec<u8>> {
    expect_rgba_len(
        &frame.data,
        SurfaceSize::new(frame.width, frame.height),
        "encode",
    )?;

    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => {
            let mut straight = frame.data.clone();
            if frame.premultiplied {
                unpremultiply_in_place(&mut straight);
            }
            image::codecs::png::PngEncoder::new(Cursor::new(&mut buf))
                .write_image(
                    &straight,
                    frame.width,
                    frame.height,
                    image::ExtendedColorType::Rgba8,
                )
                .map_err(|e| EngineError::encode(format!("png: {e}")))?;
        }
        OutputFormat::Jpeg { quality } => {
            let rgb = flatten_on_white(frame);
            let q = (quality.clamp(0.01, 1.0) * 100.0).round() as u8;
            image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut buf), q)
                .write_image(&rgb, frame.width, frame.height, image::ExtendedColorType::Rgb8)
                .map_err(|e| EngineError::encode(format!("jpeg: {e}")))?;
        }
    }
    Ok(buf)
}

/// Encode a frame as a `data:image/...;base64,` URI.
pub fn encode_data_url(frame: &FrameRGBA, format: OutputFormat) -> EngineResult<String> {
    let bytes = encode_frame(frame, format)?;
    Ok(encode_data_uri(format.mime(), &bytes))
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

fn flatten_on_white(frame: &FrameRGBA) -> Vec<u8> {
    let mut out = Vec::with_capacity(frame.data.len() / 4 * 3);
    for px in frame.data.chunks_exact(4) {
        let a = px[3];
        for &c in &px[..3] {
            let premul = if frame.premultiplied {
                c
            } else {
                crate::foundation::math::mul_div255_u8(u16::from(c), u16::from(a))
            };
            out.push(premul.saturating_add(255 - a));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
