use crate::assets::color::Color;
use crate::assets::decode::DesignImage;
use crate::assets::loader::{DefaultDesignLoader, DesignLoader};
use crate::engine::compositor::overlay_design;
use crate::engine::config::EngineOpts;
use crate::engine::lighting::{add_lighting_effects, draw_background};
use crate::engine::request::{BatchReport, DesignPlacement, MockupRequest, MockupResult, MockupStyle};
use crate::foundation::error::{EngineError, EngineResult};
use crate::render::canvas::{Canvas2d, DrawStats, FrameRGBA};
use crate::render::encode::encode_data_url;
use crate::templates::registry::{ShapeTemplate, TEMPLATES};
use crate::templates::resolve::{MatchKind, resolve_template};

/// Raw output of one render, before encoding.
#[derive(Clone, Debug)]
pub struct RenderedMockup {
    /// Premultiplied RGBA8 pixels.
    pub frame: FrameRGBA,
    pub template: &'static ShapeTemplate,
    pub matched: MatchKind,
    pub style: MockupStyle,
    pub stats: DrawStats,
}

/// Renders product mockups.
///
/// Every call draws on its own surface, so one engine can serve concurrent requests. The
/// only suspension point is loading the design through `L`.
#[derive(Clone, Debug)]
pub struct MockupEngine<L: DesignLoader = DefaultDesignLoader> {
    opts: EngineOpts,
    loader: L,
}

impl MockupEngine<DefaultDesignLoader> {
    pub fn new(opts: EngineOpts) -> EngineResult<Self> {
        let loader = DefaultDesignLoader::new(opts.loader_opts())?;
        Ok(Self { opts, loader })
    }
}

impl<L: DesignLoader> MockupEngine<L> {
    pub fn with_loader(opts: EngineOpts, loader: L) -> Self {
        Self { opts, loader }
    }

    pub fn opts(&self) -> &EngineOpts {
        &self.opts
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve, draw, load the design, composite, light and encode.
    ///
    /// Input problems (color, placement, surface size) fail before the design is fetched.
    /// A design that cannot be loaded yields [`EngineError::ImageLoad`]; nothing is retried.
    #[tracing::instrument(skip_all, fields(product_type = %request.product_type))]
    pub async fn generate_mockup(&self, request: &MockupRequest) -> EngineResult<MockupResult> {
        let stage = self.prepare(request)?;
        let design = self.load_design(&request.design_url).await?;
        let rendered = stage.finish(Some(&design))?;
        self.encode(&request.product_type, &rendered)
    }

    /// Synchronous render against an already loaded design.
    pub fn render(
        &self,
        request: &MockupRequest,
        design: &DesignImage,
    ) -> EngineResult<RenderedMockup> {
        self.prepare(request)?.finish(Some(design))
    }

    /// Silhouette only, lit in the realistic style.
    pub fn render_base_product(
        &self,
        product_type: &str,
        color: Option<&str>,
    ) -> EngineResult<RenderedMockup> {
        let mut request =
            MockupRequest::new(String::new(), product_type).with_style(MockupStyle::Realistic);
        request.color = color.map(str::to_owned);
        self.prepare(&request)?.finish(None)
    }

    /// Encoded form of [`MockupEngine::render_base_product`], for when a design fails to load.
    #[tracing::instrument(skip(self))]
    pub fn generate_base_product(
        &self,
        product_type: &str,
        color: Option<&str>,
    ) -> EngineResult<MockupResult> {
        let rendered = self.render_base_product(product_type, color)?;
        self.encode(product_type, &rendered)
    }

    /// One mockup per registry template, in registry order.
    ///
    /// Failures are recorded per template key and never stop the batch.
    #[tracing::instrument(skip_all, fields(templates = TEMPLATES.len()))]
    pub async fn generate_all_mockups(&self, design_url: &str, color: Option<&str>) -> BatchReport {
        let mut report = BatchReport::default();
        for template in TEMPLATES {
            let mut request = MockupRequest::new(design_url, template.key);
            request.color = color.map(str::to_owned);
            match self.generate_mockup(&request).await {
                Ok(result) => {
                    report.results.insert(template.key.to_owned(), result);
                }
                Err(err) => {
                    tracing::warn!(template = template.key, error = %err, "mockup failed");
                    report.failures.insert(template.key.to_owned(), err.to_string());
                }
            }
        }
        tracing::info!(
            succeeded = report.results.len(),
            failed = report.failures.len(),
            "batch finished"
        );
        report
    }

    fn prepare(&self, request: &MockupRequest) -> EngineResult<Stage> {
        let resolution = resolve_template(&request.product_type);
        let template = resolution.template;
        let color = match request.color.as_deref() {
            Some(hex) => Color::from_hex(hex)?,
            None => self.opts.default_color,
        };
        let style = request.style.unwrap_or(self.opts.default_style);
        let placement = request
            .design_position
            .unwrap_or_else(|| DesignPlacement::from(template.design_area));
        placement.validate(template.dimensions())?;

        let mut canvas = Canvas2d::new(template.width, template.height)?;
        if style == MockupStyle::ThreeD {
            draw_background(&mut canvas)?;
        }
        template.draw(&mut canvas, color)?;
        canvas.reset_state();

        Ok(Stage {
            canvas,
            template,
            matched: resolution.matched,
            style,
            placement,
        })
    }

    async fn load_design(&self, uri: &str) -> EngineResult<DesignImage> {
        let timeout = self.opts.load_timeout;
        match tokio::time::timeout(timeout, self.loader.load(uri)).await {
            Ok(loaded) => loaded,
            Err(_) => Err(EngineError::image_load(
                uri,
                format!("timed out after {} ms", timeout.as_millis()),
            )),
        }
    }

    fn encode(&self, product_type: &str, rendered: &RenderedMockup) -> EngineResult<MockupResult> {
        let url = encode_data_url(&rendered.frame, self.opts.output)?;
        Ok(MockupResult {
            url,
            product_type: product_type.to_owned(),
            width: rendered.frame.width,
            height: rendered.frame.height,
        })
    }
}

/// A drawn silhouette waiting for its design.
struct Stage {
    canvas: Canvas2d,
    template: &'static ShapeTemplate,
    matched: MatchKind,
    style: MockupStyle,
    placement: DesignPlacement,
}

impl Stage {
    fn finish(mut self, design: Option<&DesignImage>) -> EngineResult<RenderedMockup> {
        if let Some(design) = design {
            overlay_design(&mut self.canvas, design, &self.placement, self.style)?;
        }
        add_lighting_effects(&mut self.canvas, self.template, self.style)?;
        let stats = self.canvas.stats().clone();
        Ok(RenderedMockup {
            frame: self.canvas.into_frame(),
            template: self.template,
            matched: self.matched,
            style: self.style,
            stats,
        })
    }
}

/// [`MockupEngine::generate_mockup`] on an engine configured from the environment.
pub async fn generate_mockup(request: &MockupRequest) -> EngineResult<MockupResult> {
    MockupEngine::new(EngineOpts::from_env())?
        .generate_mockup(request)
        .await
}

/// [`MockupEngine::generate_all_mockups`] on an engine configured from the environment.
pub async fn generate_all_mockups(design_url: &str, color: Option<&str>) -> EngineResult<BatchReport> {
    let engine = MockupEngine::new(EngineOpts::from_env())?;
    Ok(engine.generate_all_mockups(design_url, color).await)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/mockup.rs"]
mod tests;
