use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use base64::Engine as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use artisan_mockup::{
    Color, DesignLoader as _, EngineOpts, MockupEngine, MockupRequest, MockupStyle, OutputFormat,
    RenderedMockup,
};

#[derive(Parser, Debug)]
#[command(name = "artisan-mockup", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one product mockup to an image file.
    Render(RenderArgs),
    /// Render the design onto every product template.
    Batch(BatchArgs),
    /// Render an undecorated product.
    Base(BaseArgs),
    /// List product templates, or show which template a product name routes to.
    Templates(TemplatesArgs),
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// JPEG quality in (0, 1].
    #[arg(long, default_value_t = artisan_mockup::DEFAULT_JPEG_QUALITY)]
    quality: f32,

    /// Design load timeout in milliseconds (overrides ARTISAN_MOCKUP_LOAD_TIMEOUT_MS).
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Design URL, data URI or file path.
    #[arg(long)]
    design: String,

    /// Product type, e.g. "Premium Hoodie" or "MUG".
    #[arg(long)]
    product: String,

    /// Base color as CSS hex.
    #[arg(long)]
    color: Option<String>,

    /// realistic, minimal or 3d.
    #[arg(long)]
    style: Option<MockupStyle>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Design URL, data URI or file path.
    #[arg(long)]
    design: String,

    /// Base color as CSS hex.
    #[arg(long)]
    color: Option<String>,

    /// Directory receiving one image per template.
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct BaseArgs {
    /// Product type.
    #[arg(long)]
    product: String,

    /// Base color as CSS hex.
    #[arg(long)]
    color: Option<String>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Parser, Debug)]
struct TemplatesArgs {
    /// Resolve this product name instead of listing the registry.
    #[arg(long)]
    resolve: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args).await,
        Command::Batch(args) => cmd_batch(args).await,
        Command::Base(args) => cmd_base(args),
        Command::Templates(args) => cmd_templates(args),
    }
}

fn make_engine(output: &OutputArgs) -> anyhow::Result<MockupEngine> {
    let format = match output.format {
        FormatChoice::Png => OutputFormat::Png,
        FormatChoice::Jpeg => {
            anyhow::ensure!(
                output.quality > 0.0 && output.quality <= 1.0,
                "--quality must be in (0, 1], got {}",
                output.quality
            );
            OutputFormat::Jpeg {
                quality: output.quality,
            }
        }
    };
    let mut opts = EngineOpts::from_env().with_output(format);
    if let Some(ms) = output.timeout_ms {
        opts = opts.with_load_timeout(Duration::from_millis(ms.max(1)));
    }
    Ok(MockupEngine::new(opts)?)
}

fn write_image(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

fn summary(rendered: &RenderedMockup, out: &Path) -> serde_json::Value {
    serde_json::json!({
        "out": out.display().to_string(),
        "template": rendered.template.key,
        "matched": rendered.matched,
        "style": rendered.style,
        "width": rendered.frame.width,
        "height": rendered.frame.height,
        "stats": rendered.stats,
    })
}

async fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let engine = make_engine(&args.output)?;
    let mut request = MockupRequest::new(args.design.as_str(), args.product.as_str());
    request.color = args.color;
    request.style = args.style;

    let design = engine.loader().load(&request.design_url).await?;
    let rendered = engine.render(&request, &design)?;
    let bytes = artisan_mockup::encode_frame(&rendered.frame, engine.opts().output)?;
    write_image(&args.out, &bytes)?;

    println!("{}", serde_json::to_string_pretty(&summary(&rendered, &args.out))?);
    Ok(())
}

async fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let engine = make_engine(&args.output)?;
    if let Some(hex) = args.color.as_deref() {
        Color::from_hex(hex)?;
    }
    let report = engine
        .generate_all_mockups(&args.design, args.color.as_deref())
        .await;

    let ext = engine.opts().output.extension();
    let mut written = serde_json::Map::new();
    for (key, result) in &report.results {
        let (_, payload) = result
            .url
            .split_once(";base64,")
            .with_context(|| format!("mockup for {key} is not a base64 data URL"))?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .with_context(|| format!("decode mockup for {key}"))?;
        let path = args.out_dir.join(format!("{}.{ext}", key.to_ascii_lowercase()));
        write_image(&path, &bytes)?;
        written.insert(key.clone(), serde_json::json!(path.display().to_string()));
    }

    let out = serde_json::json!({
        "written": written,
        "failures": report.failures,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    anyhow::ensure!(
        !report.results.is_empty(),
        "every mockup failed ({} templates)",
        report.failures.len()
    );
    Ok(())
}

fn cmd_base(args: BaseArgs) -> anyhow::Result<()> {
    let engine = make_engine(&args.output)?;
    let rendered = engine.render_base_product(&args.product, args.color.as_deref())?;
    let bytes = artisan_mockup::encode_frame(&rendered.frame, engine.opts().output)?;
    write_image(&args.out, &bytes)?;
    println!("{}", serde_json::to_string_pretty(&summary(&rendered, &args.out))?);
    Ok(())
}

fn cmd_templates(args: TemplatesArgs) -> anyhow::Result<()> {
    if let Some(name) = args.resolve {
        let resolution = artisan_mockup::resolve_template(&name);
        let out = serde_json::json!({
            "productType": name,
            "template": resolution.template.key,
            "matched": resolution.matched,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    for t in artisan_mockup::TEMPLATES {
        let a = t.design_area;
        println!(
            "{:<18} {:>4}x{:<4}  area {},{} {}x{}",
            t.key, t.width, t.height, a.x, a.y, a.width, a.height
        );
    }
    Ok(())
}
