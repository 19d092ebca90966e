//! Twin daemon - medical device digital twin backend.
//!
//! The daemon provides:
//! - Rule-based and LLM-backed architecture generation
//! - Ventilator and CGM digital twin simulation
//! - Threshold compliance checks over simulation output

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod server;

use config::DaemonConfig;
use error::{DaemonError, DaemonResult};
use server::Server;

/// Twin Daemon CLI.
#[derive(Parser)]
#[command(name = "twind")]
#[command(about = "Digital twin backend for medical device design", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TWIN_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "TWIN_LISTEN_ADDR")]
    listen: Option<String>,

    /// Ollama-compatible endpoint for the generation backend
    #[arg(long, env = "TWIN_MODEL_ENDPOINT")]
    model_endpoint: Option<String>,

    /// Model name to request from the backend
    #[arg(long, env = "TWIN_MODEL")]
    model: Option<String>,

    /// Log level
    #[arg(long, env = "TWIN_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "TWIN_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(endpoint) = cli.model_endpoint {
        config.model.endpoint = endpoint;
    }
    if let Some(model) = cli.model {
        config.model.model = model;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        "starting twin daemon"
    );

    // Create and run server
    let server = Server::new(config);
    server.run().await
}
