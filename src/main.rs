//! The backend web server for the browser extension's assignment lookups.

mod api;
mod config;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    init_tracing(&config);

    tracing::info!(address = %config.address, "Listening...");

    let listener = TcpListener::bind(&config.address)
        .await
        .with_context(|| format!("failed to bind to {}", config.address))?;

    tracing::info!("Ready!");

    let router = api::router().layer(TraceLayer::new_for_http());

    axum::serve(listener, router).await?;

    Ok(())
}

/// Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over the configured log
/// level.
fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
