//! Artisan Mockup renders print-on-demand product mockups procedurally.
//!
//! There are no product photographs. Each product is a vector silhouette drawn at a fixed
//! size, the customer's design is composited into its design area, and synthetic lighting
//! is laid over the result:
//!
//! - Route a free-form product name to a [`ShapeTemplate`] ([`resolve_template`])
//! - Build a [`MockupEngine`] from [`EngineOpts`]
//! - Call [`MockupEngine::generate_mockup`] with a [`MockupRequest`] to get an encoded
//!   [`MockupResult`], or [`MockupEngine::generate_all_mockups`] for the whole catalog
#![forbid(unsafe_code)]

mod assets;
mod engine;
mod foundation;
mod render;
mod templates;

pub use crate::foundation::core::{Affine, BezPath, DesignArea, Point, Rect, SurfaceSize, Vec2};
pub use crate::foundation::error::{EngineError, EngineResult};

pub use crate::assets::color::Color;
pub use crate::assets::decode::{DesignImage, RasterDesign, decode_design};
pub use crate::assets::loader::{DefaultDesignLoader, DesignLoader, LoaderOpts};
pub use crate::assets::source::{DesignSource, encode_data_uri};

pub use crate::render::canvas::{Canvas2d, DrawState, DrawStats, FrameRGBA};
pub use crate::render::encode::{DEFAULT_JPEG_QUALITY, OutputFormat, encode_data_url, encode_frame};
pub use crate::render::paint::{
    CompositeOp, GradientStop, LinearGradient, Paint, RadialGradient, Shadow,
};
pub use crate::render::path;

pub use crate::templates::registry::{GENERIC_SQUARE, ShapeTemplate, TEMPLATES, keys, template};
pub use crate::templates::resolve::{MatchKind, RULES, Resolution, RouteRule, resolve_template};

pub use crate::engine::config::{
    DEFAULT_PRODUCT_COLOR, ENV_DEFAULT_COLOR, ENV_LOAD_TIMEOUT_MS, ENV_MAX_DESIGN_BYTES,
    EngineOpts,
};
pub use crate::engine::mockup::{
    MockupEngine, RenderedMockup, generate_all_mockups, generate_mockup,
};
pub use crate::engine::request::{
    BatchReport, DesignPlacement, MockupRequest, MockupResult, MockupStyle,
};
