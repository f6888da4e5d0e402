use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use wash_batch::{ImageInput, Rgb, WashPlan, WashPlanner};

use dyewash::api;
use dyewash::models::AppConfig;
use dyewash::report;
use dyewash::server;
use dyewash::services::ColorService;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Parser)]
#[command(name = "dyewash")]
#[command(about = "Dye-wash batch planner - order garment colors to minimize machine washes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Plan wash batches for image files on disk
    Sort {
        /// Image files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the plan as JSON (same shape as the HTTP response)
        #[arg(long)]
        json: bool,

        /// Override the CIEDE2000 batching threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Plan wash batches for colors given as "#rrggbb", "#rgb" or "r,g,b"
    Colors {
        /// Colors to plan
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print the plan as JSON (same shape as the HTTP response)
        #[arg(long)]
        json: bool,

        /// Override the CIEDE2000 batching threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dyewash API",
        description = "Dye-wash batch planner - order garment colors to minimize machine washes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_sort_colors),
    components(schemas(
        api::SortColorsForm,
        api::SortColorsResponse,
        api::ColorEntry,
        api::RgbEntry,
        api::LabEntry,
        api::SkippedEntry,
    )),
    tags(
        (name = "Colors", description = "Dominant color extraction and wash batching")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Sort {
            files,
            json,
            threshold,
        }) => run_sort_command(&files, json, threshold).await,
        Some(Commands::Colors {
            colors,
            json,
            threshold,
        }) => run_colors_command(&colors, json, threshold),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dyewash=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load config from CONFIG_FILE and apply a command-line threshold override
fn load_cli_config(threshold: Option<f64>) -> anyhow::Result<AppConfig> {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let mut config = AppConfig::load(config_file.as_deref())?;

    if let Some(threshold) = threshold {
        config.wash.delta_e_threshold = threshold;
        config.validate()?;
    }

    Ok(config)
}

fn print_plan(
    plan: &WashPlan,
    thumbnails: &[Option<String>],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let response = api::SortColorsResponse::from_plan(plan, thumbnails);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", report::render_text(plan));
    }
    Ok(())
}

/// Analyze image files from disk (no server needed)
async fn run_sort_command(
    files: &[PathBuf],
    json: bool,
    threshold: Option<f64>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = load_cli_config(threshold)?;
    let planner = Arc::new(WashPlanner::new(config.plan_config()));
    let service = ColorService::new(planner, config.upload.thumbnail_size);

    // Unreadable files are reported as skipped, like undecodable ones
    let outcome = service.analyze_files(files).await?;
    print_plan(&outcome.plan, &outcome.thumbnails, json)
}

/// Plan colors given on the command line
fn run_colors_command(
    colors: &[String],
    json: bool,
    threshold: Option<f64>,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = load_cli_config(threshold)?;
    let planner = WashPlanner::new(config.plan_config());

    let inputs = colors
        .iter()
        .map(|text| {
            let rgb: Rgb = text
                .parse()
                .with_context(|| format!("Invalid color {text:?}"))?;
            Ok(ImageInput::with_color(text.trim(), rgb))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let plan = planner.plan(inputs)?;
    print_plan(&plan, &[], json)
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Dyewash v{VERSION} - dye-wash batch planner");
    println!("Orders garment colors to minimize machine washes\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:5000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Config source
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "built-in defaults (file not found)".to_string(),
        None => "built-in defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    match AppConfig::load(config_file.as_deref().map(Path::new)) {
        Ok(config) => {
            println!("  wash.hue_max             = {}", config.wash.hue_max);
            println!(
                "  wash.black_brightness_max = {}",
                config.wash.black_brightness_max
            );
            println!(
                "  wash.delta_e_threshold   = {}",
                config.wash.delta_e_threshold
            );
            println!("  upload.max_files         = {}", config.upload.max_files);
            println!(
                "  upload.max_file_bytes    = {}",
                config.upload.max_file_bytes
            );
            println!(
                "  upload.thumbnail_size    = {}",
                config.upload.thumbnail_size
            );
        }
        Err(e) => println!("  error: {e}"),
    }

    // Commands section
    println!("\nCommands:");
    println!("  dyewash serve    Start the HTTP server");
    println!("  dyewash sort     Plan wash batches for image files");
    println!("  dyewash colors   Plan wash batches for hex or r,g,b colors");
    println!("\nRun 'dyewash --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dyewash=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    tracing::info!(
        config = %config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string()),
        "Configuration source"
    );

    // Refuse to start on a broken config file
    let config = AppConfig::load(config_file.as_deref())?;

    let state = server::create_app_state(config)?;

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Dyewash server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
