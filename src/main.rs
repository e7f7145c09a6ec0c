//! Pitwall server binary.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (expects telemetry.py next to the binary)
//! cargo run --release
//!
//! # Override the bind address
//! cargo run --release -- --addr 127.0.0.1:5001
//! ```
//!
//! # Environment Variables
//!
//! See [`pitwall::config::AppConfig`] for the full list. The usual
//! ones: `OPENAI_API_KEY`, `PITWALL_TELEMETRY_SCRIPT`, `RUST_LOG`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pitwall::analysis::AnalysisClient;
use pitwall::api::{create_app, ApiState};
use pitwall::config::AppConfig;
use pitwall::telemetry::subprocess::SubprocessProvider;

#[derive(Parser, Debug)]
#[command(name = "pitwall")]
#[command(about = "Driver telemetry comparison backend")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:5001")
    #[arg(short, long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local development keeps the API key in a .env file.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();
    let config = AppConfig::from_env();
    let server_addr = args.addr.unwrap_or_else(|| config.server_addr.clone());

    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set — /analyze requests will be rejected upstream");
    }

    let state = ApiState {
        provider: Arc::new(SubprocessProvider::from_config(&config)),
        analysis: Arc::new(AnalysisClient::from_config(&config)),
        model: config.openai_model.clone(),
    };

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&server_addr)
        .await
        .with_context(|| format!("failed to bind {server_addr}"))?;
    info!(addr = %server_addr, "pitwall listening");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
