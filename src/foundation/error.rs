/// Convenience result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Longest prefix of a design URL quoted back in load errors.
const URL_PREVIEW_CHARS: usize = 50;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// The design image could not be fetched, read or decoded.
    ///
    /// This is the only failure expected under normal operation; callers decide whether to
    /// retry or fall back to an undecorated product render.
    #[error("image load error: failed to load {url}: {reason}")]
    ImageLoad {
        /// Truncated form of the failing URL.
        url: String,
        /// What went wrong.
        reason: String,
    },

    /// No drawing surface can be allocated for the requested template.
    #[error("canvas unavailable: {0}")]
    CanvasUnavailable(String),

    /// Invalid caller-provided data (color, placement, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal inconsistencies while drawing or compositing.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the final surface.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// Build a [`EngineError::ImageLoad`] value, truncating long URLs (data URIs in particular).
    pub fn image_load(url: &str, reason: impl Into<String>) -> Self {
        Self::ImageLoad {
            url: truncate_url(url),
            reason: reason.into(),
        }
    }

    /// Build a [`EngineError::CanvasUnavailable`] value.
    pub fn canvas_unavailable(msg: impl Into<String>) -> Self {
        Self::CanvasUnavailable(msg.into())
    }

    /// Build a [`EngineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EngineError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`EngineError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether the error came from loading the design (and so may succeed on another attempt).
    pub fn is_image_load(&self) -> bool {
        matches!(self, Self::ImageLoad { .. })
    }
}

pub(crate) fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_PREVIEW_CHARS {
        return url.to_owned();
    }
    let head: String = url.chars().take(URL_PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
