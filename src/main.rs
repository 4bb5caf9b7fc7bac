// src/main.rs - Desktop entry point

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use stocklens::app::ApplicationCore;
use stocklens::error::Result;
use stocklens::ui::App;

#[derive(Parser)]
#[command(
    name = "stocklens",
    version = stocklens::VERSION,
    about = "Inventory lookup with QR scanning and an AR stock overlay",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long)]
    debug: bool,

    #[arg(long)]
    headless: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the application
    Run {
        #[arg(long)]
        headless: bool,
    },
    /// Show application status
    Status,
    /// Check application health
    Health,
    /// Validate configuration
    ValidateConfig {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli);

    match &cli.command {
        Some(Commands::Run { headless }) => run_application(&cli, *headless || cli.headless).await,
        Some(Commands::Status) => show_status().await,
        Some(Commands::Health) => check_health().await,
        Some(Commands::ValidateConfig { config }) => {
            validate_config(config.clone().or(cli.config.clone())).await
        }
        None => run_application(&cli, cli.headless).await,
    }
}

fn setup_logging(cli: &Cli) {
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

async fn run_application(cli: &Cli, headless: bool) -> Result<()> {
    tracing::info!("Starting StockLens v{}", stocklens::VERSION);

    let mut app = if let Some(config_path) = &cli.config {
        // The UI bootstraps its own services from the same file.
        std::env::set_var("STOCKLENS_CONFIG", config_path);
        ApplicationCore::with_config_file(config_path)
    } else {
        ApplicationCore::new()
    };

    app.initialize().await?;

    if headless {
        tracing::info!("Running in headless mode");
        app.wait_for_shutdown().await?;
    } else {
        tracing::info!("Starting UI");

        #[cfg(feature = "desktop")]
        {
            use dioxus::desktop::{Config, WindowBuilder};

            let config = Config::new().with_window(
                WindowBuilder::new()
                    .with_title("StockLens")
                    .with_resizable(true)
                    .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(480.0, 860.0)),
            );

            dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
        }
        #[cfg(not(feature = "desktop"))]
        {
            let _ = App;
            tracing::warn!("Built without the desktop feature; running headless");
            app.wait_for_shutdown().await?;
        }
    }

    app.shutdown().await?;
    Ok(())
}

async fn show_status() -> Result<()> {
    println!("StockLens Status");
    println!("================");

    let mut app = ApplicationCore::new();
    app.initialize().await?;

    let stats = app.get_stats().await;

    println!("Version: {}", stats.version);
    println!("State: {:?}", stats.state);
    println!("Uptime: {:?}", stats.uptime);
    println!(
        "Managers: {}/{} initialized",
        stats.initialized_managers, stats.manager_count
    );

    app.shutdown().await?;
    Ok(())
}

async fn check_health() -> Result<()> {
    let mut app = ApplicationCore::new();
    app.initialize().await?;

    let health = app.get_health().await;

    println!("StockLens Health");
    println!("================");
    println!("Overall status: {:?}", health.status);
    println!("Uptime: {:?}", health.uptime);
    println!(
        "Last check: {}",
        health.last_check.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!("Manager Health:");

    for (name, status) in &health.managers {
        let status_icon = match status {
            stocklens::manager::HealthStatus::Healthy => "✅",
            stocklens::manager::HealthStatus::Degraded => "⚠️",
            stocklens::manager::HealthStatus::Unhealthy => "❌",
            stocklens::manager::HealthStatus::Unknown => "❓",
        };
        println!("  {} {}: {:?}", status_icon, name, status);
    }

    let exit_code = match health.status {
        stocklens::manager::HealthStatus::Healthy => 0,
        stocklens::manager::HealthStatus::Degraded => 1,
        stocklens::manager::HealthStatus::Unhealthy => 2,
        stocklens::manager::HealthStatus::Unknown => 3,
    };

    app.shutdown().await?;

    if exit_code != 0 {
        process::exit(exit_code);
    }

    Ok(())
}

async fn validate_config(config_path: Option<PathBuf>) -> Result<()> {
    println!("Validating configuration...");

    let manager = if let Some(path) = &config_path {
        stocklens::config::ConfigManager::with_config_file(path)
    } else {
        stocklens::config::ConfigManager::new()
    };

    let config = manager.load()?;

    println!("✅ Configuration is valid");
    println!("   App: {}", config.app.name);
    println!("   Environment: {}", config.app.environment);
    println!("   Lookup latency: {}ms", config.lookup.latency_ms);

    Ok(())
}
