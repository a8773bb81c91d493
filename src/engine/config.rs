use std::time::Duration;

use crate::assets::color::Color;
use crate::assets::loader::LoaderOpts;
use crate::engine::request::MockupStyle;
use crate::render::encode::OutputFormat;

pub const ENV_LOAD_TIMEOUT_MS: &str = "ARTISAN_MOCKUP_LOAD_TIMEOUT_MS";
pub const ENV_MAX_DESIGN_BYTES: &str = "ARTISAN_MOCKUP_MAX_DESIGN_BYTES";
pub const ENV_DEFAULT_COLOR: &str = "ARTISAN_MOCKUP_DEFAULT_COLOR";

/// Base color used when a request carries none.
pub const DEFAULT_PRODUCT_COLOR: Color = Color::rgb(0xf2, 0xf2, 0xf2);

/// Engine-wide options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineOpts {
    /// Upper bound on loading one design.
    pub load_timeout: Duration,
    pub default_color: Color,
    pub default_style: MockupStyle,
    pub output: OutputFormat,
    /// Largest accepted encoded design payload.
    pub max_design_bytes: usize,
}

impl Default for EngineOpts {
    fn default() -> Self {
        let loader = LoaderOpts::default();
        Self {
            load_timeout: loader.timeout,
            default_color: DEFAULT_PRODUCT_COLOR,
            default_style: MockupStyle::default(),
            output: OutputFormat::Png,
            max_design_bytes: loader.max_bytes,
        }
    }
}

impl EngineOpts {
    /// Defaults overridden by `ARTISAN_MOCKUP_*` environment variables. Unparseable values
    /// are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`EngineOpts::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let load_timeout = lookup(ENV_LOAD_TIMEOUT_MS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.load_timeout);
        let max_design_bytes = lookup(ENV_MAX_DESIGN_BYTES)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.max_design_bytes);
        let default_color = lookup(ENV_DEFAULT_COLOR)
            .and_then(|v| Color::from_hex(&v).ok())
            .unwrap_or(defaults.default_color);
        Self {
            load_timeout,
            max_design_bytes,
            default_color,
            ..defaults
        }
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    pub fn with_default_style(mut self, style: MockupStyle) -> Self {
        self.default_style = style;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn with_max_design_bytes(mut self, max: usize) -> Self {
        self.max_design_bytes = max;
        self
    }

    pub fn loader_opts(&self) -> LoaderOpts {
        LoaderOpts {
            timeout: self.load_timeout,
            max_bytes: self.max_design_bytes,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
