use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{DesignArea, Rect, SurfaceSize};
use crate::foundation::error::{EngineError, EngineResult};

/// Finish applied to the composited design.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockupStyle {
    /// Design multiplied into the fabric, sheen on top.
    #[default]
    Realistic,
    /// Flat silhouette and design, no lighting.
    Minimal,
    /// Studio backdrop, sheared design and a vignette.
    #[serde(rename = "3d")]
    ThreeD,
}

impl MockupStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Minimal => "minimal",
            Self::ThreeD => "3d",
        }
    }
}

impl fmt::Display for MockupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MockupStyle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "realistic" => Ok(Self::Realistic),
            "minimal" => Ok(Self::Minimal),
            "3d" => Ok(Self::ThreeD),
            other => Err(EngineError::validation(format!(
                "unknown style \"{other}\" (expected realistic, minimal or 3d)"
            ))),
        }
    }
}

/// Where the design lands on the product surface, in template pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise degrees about the placement centre.
    #[serde(default)]
    pub rotation: f64,
    /// Apply the 3D shear whatever the style.
    #[serde(default)]
    pub perspective: bool,
}

impl DesignPlacement {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
            perspective: false,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_perspective(mut self, perspective: bool) -> Self {
        self.perspective = perspective;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Reject placements that are non-finite, empty or not fully inside `size`.
    pub fn validate(&self, size: SurfaceSize) -> EngineResult<()> {
        let fields = [self.x, self.y, self.width, self.height, self.rotation];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::validation(
                "design position must contain finite numbers",
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(EngineError::validation(format!(
                "design position must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        let inside = self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= f64::from(size.width)
            && self.y + self.height <= f64::from(size.height);
        if !inside {
            return Err(EngineError::validation(format!(
                "design position ({}, {}, {}x{}) exceeds the {}x{} product surface",
                self.x, self.y, self.width, self.height, size.width, size.height
            )));
        }
        Ok(())
    }
}

impl From<DesignArea> for DesignPlacement {
    fn from(a: DesignArea) -> Self {
        Self::new(
            f64::from(a.x),
            f64::from(a.y),
            f64::from(a.width),
            f64::from(a.height),
        )
    }
}

/// One mockup to generate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockupRequest {
    /// `http(s)://` URL, base64 `data:` URI, local path or `file://` URI.
    pub design_url: String,
    /// Free-form product name; routed to a template, never rejected.
    pub product_type: String,
    /// CSS hex base color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<MockupStyle>,
    /// Overrides the template's design area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_position: Option<DesignPlacement>,
}

impl MockupRequest {
    pub fn new(design_url: impl Into<String>, product_type: impl Into<String>) -> Self {
        Self {
            design_url: design_url.into(),
            product_type: product_type.into(),
            color: None,
            style: None,
            design_position: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_style(mut self, style: MockupStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_design_position(mut self, placement: DesignPlacement) -> Self {
        self.design_position = Some(placement);
        self
    }
}

/// A finished, encoded mockup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockupResult {
    /// `data:image/png;base64,...` (or `image/jpeg`).
    pub url: String,
    /// Echo of the requested product type, not the template key.
    pub product_type: String,
    pub width: u32,
    pub height: u32,
}

/// Outcome of a batch run, keyed by template key.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BatchReport {
    pub results: BTreeMap<String, MockupResult>,
    pub failures: BTreeMap<String, String>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/request.rs"]
mod tests;
