//! hbc-ai - Heartbeat Sound Classification service
//!
//! Serves the classification web UI and JSON API. The audio model runs
//! behind a hosted inference endpoint selected by the configured model id.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hbc_ai::config::{CliOverrides, ServiceConfig};
use hbc_ai::services::{HuggingFaceClassifier, SampleLibrary};
use hbc_ai::{build_router, AppState};

/// Command-line arguments for hbc-ai
#[derive(Parser, Debug)]
#[command(name = "hbc-ai")]
#[command(about = "Heartbeat sound classification service")]
#[command(version)]
struct Args {
    /// TOML config file (default: <config dir>/hbc/hbc-ai.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model identifier on the inference endpoint
    #[arg(short, long)]
    model_id: Option<String>,

    /// Inference endpoint base URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Directory holding the bundled sample recordings
    #[arg(short, long)]
    samples_dir: Option<PathBuf>,

    /// Address to bind
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config = hbc_common::config::load_config(args.config.as_deref(), "hbc-ai")
        .context("Failed to load configuration file")?;

    // RUST_LOG wins over the configured level
    let level = &toml_config.logging.level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hbc_ai={level},hbc_common={level},tower_http={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting hbc-ai (Heartbeat Sound Classification) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let overrides = CliOverrides {
        model_id: args.model_id,
        inference_endpoint: args.endpoint,
        samples_dir: args.samples_dir,
        bind_address: args.bind,
        port: args.port,
    };
    let config = ServiceConfig::resolve(&overrides, &toml_config)?;

    let classifier = HuggingFaceClassifier::new(config.inference_settings())
        .context("Failed to create inference client")?;
    info!("Inference endpoint: {}", classifier.model_url());

    let samples = SampleLibrary::new(&config.samples_dir);
    if samples.dir().is_dir() {
        let available = samples.list().iter().filter(|s| s.available).count();
        info!(
            "Samples: {} ({} of 5 available)",
            samples.dir().display(),
            available
        );
    } else {
        warn!(
            "Samples directory {} not found; sample buttons will be disabled",
            samples.dir().display()
        );
    }

    let state = AppState::new(Arc::new(classifier), samples)
        .with_max_upload_bytes(config.max_upload_bytes);
    let app = build_router(state);

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("Listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
