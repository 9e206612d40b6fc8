//! Greeting service binary.
//!
//! Resolves configuration (defaults → config file → command-line flags),
//! binds the listener, and serves until the process is terminated. The
//! only fatal failure is a bind or configuration error at startup.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_service::config::{self, ConfigError, ServiceConfig};
use greeting_service::http::HttpServer;

#[derive(Debug, Parser)]
#[command(name = "greeting-service")]
#[command(about = "Plain-text greeting HTTP service", long_about = None)]
struct Cli {
    /// Address to bind for listening (host:port). Overrides the config file.
    #[arg(long = "binding_address")]
    binding_address: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Layer config sources: file (if given) under flags, defaults underneath.
fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(addr) = &cli.binding_address {
        config.listener.bind_address = addr.clone();
    }

    config::validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("greeting-service v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to resolve configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    // Bind failure is fatal: no retry.
    let listener = match TcpListener::bind(&config.listener.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.listener.bind_address,
                error = %e,
                "Failed to bind listener"
            );
            std::process::exit(1);
        }
    };

    let server = HttpServer::new(config);
    if let Err(e) = server.run(listener).await {
        tracing::error!(error = %e, "HTTP server failed");
        std::process::exit(1);
    }
}
