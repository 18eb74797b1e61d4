use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use stitchgrid::api;
use stitchgrid::models::AppConfig;
use stitchgrid::server;

#[derive(Parser)]
#[command(name = "stitchgrid")]
#[command(about = "Photo to stitch chart server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert a photo to chart PNGs without a server
    Render {
        /// Source image file
        #[arg(short, long)]
        image: PathBuf,

        /// Grid width in stitches (default from config)
        #[arg(long)]
        width: Option<u32>,

        /// Grid height in stitches (default from config)
        #[arg(long)]
        height: Option<u32>,

        /// Palette size (default from config)
        #[arg(long)]
        colors: Option<usize>,

        /// Directory to write the PNG files into (default from config)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Skip the palette ids in the chart cells
        #[arg(long)]
        no_numbers: bool,
    },
    /// Show configuration and asset sources
    Status,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stitchgrid API",
        description = "Photo to stitch chart server",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_generate,
        api::handle_recolor,
        api::handle_clear,
        api::handle_numbers,
        api::handle_render_chart,
        api::handle_render_legend,
        api::handle_render_gauge,
        api::handle_render_all,
    ),
    components(schemas(
        api::ColorEntry,
        api::GenerateResponse,
        api::RecolorRequest,
        api::RecolorResponse,
        api::NumbersRequest,
        api::SuccessResponse,
        api::RenderRequest,
        api::RenderResponse,
        api::ArtifactPaths,
        api::RenderAllResponse,
    )),
    tags(
        (name = "Pattern", description = "Pattern generation and palette editing"),
        (name = "Artifacts", description = "Printable artifact export")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            image,
            width,
            height,
            colors,
            out_dir,
            no_numbers,
        }) => run_render_command(&image, width, height, colors, out_dir, no_numbers),
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Status) | None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert a photo to the three chart PNGs (no server needed)
fn run_render_command(
    image: &Path,
    width: Option<u32>,
    height: Option<u32>,
    colors: Option<usize>,
    out_dir: Option<PathBuf>,
    no_numbers: bool,
) -> anyhow::Result<()> {
    use stitchgrid::assets::AssetLoader;
    use stitchgrid::rendering::{chart_svg, gauge_svg, legend_svg, ChartOptions, SvgRenderer};
    use stitchgrid::services::{CHART_FILE, GAUGE_FILE, LEGEND_FILE};

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stitchgrid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Create asset loader with optional external paths from env vars
    let fonts_dir = std::env::var("FONTS_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let asset_loader = AssetLoader::new(fonts_dir, config_file);

    let config = AppConfig::load_from_assets(&asset_loader);
    let width = width.unwrap_or(config.default_width);
    let height = height.unwrap_or(config.default_height);
    let colors = colors.unwrap_or(config.default_colors);
    let out_dir = out_dir.unwrap_or(config.output_dir);

    let image_bytes = std::fs::read(image)?;
    let pattern = stitch_quant::generate(&image_bytes, width, height, colors)?;

    let renderer = SvgRenderer::with_fonts(asset_loader.get_fonts());
    let show_numbers = !no_numbers;

    let artifacts = [
        (
            CHART_FILE,
            renderer.render_png(chart_svg(&pattern, &ChartOptions::export(show_numbers)).as_bytes())?,
        ),
        (
            LEGEND_FILE,
            renderer.render_png(legend_svg(pattern.palette()).as_bytes())?,
        ),
        (
            GAUGE_FILE,
            renderer.render_png(gauge_svg(pattern.width(), pattern.height()).as_bytes())?,
        ),
    ];

    std::fs::create_dir_all(&out_dir)?;
    for (name, bytes) in &artifacts {
        let path = out_dir.join(name);
        std::fs::write(&path, bytes)?;
        println!("Wrote {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    use stitchgrid::assets::AssetLoader;

    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let fonts_dir = std::env::var("FONTS_DIR").ok();
    let output_dir = std::env::var("OUTPUT_DIR").ok();

    // Header
    println!("Stitchgrid v{VERSION} - photo to stitch chart server\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FONTS_DIR   = {}",
        fonts_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  OUTPUT_DIR  = {}",
        output_dir.as_deref().unwrap_or("(not set)")
    );

    // Asset sources section
    println!("\nAsset Sources:");

    let config_source = if let Some(ref path) = config_file {
        let p = PathBuf::from(path);
        if p.exists() {
            path.to_string()
        } else {
            "embedded (file not found)".to_string()
        }
    } else {
        "embedded".to_string()
    };
    println!("  Config: {config_source}");

    let loader = AssetLoader::new(
        fonts_dir.clone().map(PathBuf::from),
        config_file.clone().map(PathBuf::from),
    );
    let fonts = loader.get_fonts();
    if fonts.is_empty() {
        println!("  Fonts:  system only");
    } else {
        println!("  Fonts:  {} custom + system", fonts.len());
    }

    // Effective defaults section
    let config = AppConfig::load_from_assets(&loader);
    println!("\nDefaults:");
    println!(
        "  Grid:   {} x {} stitches",
        config.default_width, config.default_height
    );
    println!("  Colors: {}", config.default_colors);
    println!("  Output: {}", config.output_dir.display());

    // Commands section
    println!("\nCommands:");
    println!("  stitchgrid serve     Start the HTTP server");
    println!("  stitchgrid render    Convert a photo to chart PNGs");
    println!("\nRun 'stitchgrid --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    use stitchgrid::assets::AssetLoader;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stitchgrid=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create asset loader with optional external paths from env vars
    let fonts_dir = std::env::var("FONTS_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let output_dir = std::env::var("OUTPUT_DIR").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let asset_loader = Arc::new(AssetLoader::new(fonts_dir.clone(), config_file.clone()));

    // Log asset sources
    tracing::info!(
        fonts = ?fonts_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "system".to_string()),
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let mut config = AppConfig::load_from_assets(&asset_loader);
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    // Create application state using shared server module
    let state = server::create_app_state(asset_loader, config)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Stitchgrid server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
