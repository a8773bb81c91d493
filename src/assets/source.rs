//! Where a design image comes from.

use std::path::PathBuf;

use base64::Engine as _;

use crate::foundation::error::{EngineError, EngineResult};

/// Source of a design image, parsed from the request's `design_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignSource {
    /// `http://` or `https://` URL.
    Http(String),
    /// `data:` URI with an inline (base64) payload.
    DataUri(String),
    /// Local file, from `file://` URIs and bare paths.
    File(PathBuf),
}

impl DesignSource {
    /// Parse a resource URI string.
    ///
    /// - `data:image/png;base64,...` - data URI
    /// - `http://...` or `https://...` - URL
    /// - `file:///path/to/design.png` - file URI
    /// - anything else - treated as a file path
    pub fn from_uri(uri: &str) -> Self {
        let trimmed = uri.trim();
        let lower = trimmed
            .get(..8)
            .map(|p| p.to_ascii_lowercase())
            .unwrap_or_else(|| trimmed.to_ascii_lowercase());
        if lower.starts_with("data:") {
            Self::DataUri(trimmed.to_owned())
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.to_owned())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            Self::File(PathBuf::from(path))
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl From<&str> for DesignSource {
    fn from(s: &str) -> Self {
        Self::from_uri(s)
    }
}

/// Decoded payload of a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUriPayload {
    /// Declared media type, lower-cased (`image/png`); `None` when omitted.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Decode `data:[<mime>][;base64],<payload>`.
///
/// Only base64 payloads are accepted.
pub fn decode_data_uri(uri: &str) -> EngineResult<DataUriPayload> {
    let rest = uri
        .get(..5)
        .filter(|p| p.eq_ignore_ascii_case("data:"))
        .map(|_| &uri[5..])
        .ok_or_else(|| EngineError::image_load(uri, "not a data URI"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| EngineError::image_load(uri, "data URI has no ',' separator"))?;

    let mut parts = header.split(';');
    let mime = parts
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_ascii_lowercase);
    let is_base64 = parts.any(|p| p.trim().eq_ignore_ascii_case("base64"));
    if !is_base64 {
        return Err(EngineError::image_load(
            uri,
            "only base64 data URIs are supported",
        ));
    }

    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| EngineError::image_load(uri, format!("invalid base64 payload: {e}")))?;
    Ok(DataUriPayload { mime, bytes })
}

/// Encode bytes as `data:<mime>;base64,...`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    let body = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{body}")
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
