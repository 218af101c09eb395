//! Status service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use status_service::api::AppState;
use status_service::clock::ProcessClock;
use status_service::config::Config;
use status_service::metadata::ServiceInfo;
use status_service::{metrics, server, ServiceError};

/// Minimal HTTP service exposing a root endpoint and a liveness probe.
#[derive(Parser, Debug)]
#[command(name = "status-service")]
#[command(about = "Minimal HTTP service exposing a root endpoint and a liveness probe")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Anchor uptime before anything else runs
    let clock = ProcessClock::start();
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("status_service=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    let info = ServiceInfo::from_build();
    let config = load_config(args.port)?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config, info),
        Some(Command::Serve) | None => cmd_serve(&config, AppState::new(info, clock)).await,
    }
}

/// Load configuration from the environment, applying the CLI port override.
fn load_config(port_override: Option<u16>) -> anyhow::Result<Config> {
    let mut config = Config::load().map_err(|e| {
        let e = ServiceError::from(e);
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    Ok(config)
}

/// Print the resolved configuration.
fn cmd_check_config(config: &Config, info: ServiceInfo) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("{} - CONFIGURATION CHECK", info.name.to_uppercase());
    println!("======================================================================");
    println!("  Service: {}", info);
    println!("  Port: {}", config.port);
    println!("  Listen address: {}", server::listen_addr(config));
    println!("  Health check: {}", config.health_url());
    println!("  Root endpoint: {}", config.root_url());
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until it fails or the process is terminated.
async fn cmd_serve(config: &Config, state: AppState) -> anyhow::Result<()> {
    info!("Configuration loaded successfully");

    server::run(config, state).await.map_err(|e| {
        error!("Server failed: {}", e);
        e.into()
    })
}
