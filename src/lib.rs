//! Pitwall: driver telemetry comparison backend.
//!
//! Fetches two drivers' telemetry for one track/year/session through an
//! external extraction source, merges the possibly-misaligned series
//! into one comparable snapshot, and runs a bounded analysis
//! request/response cycle against a text-generation service.
//!
//! ## Architecture
//!
//! - **Telemetry providers**: subprocess adapter over the extraction
//!   script, plus an in-memory fixture for tests
//! - **Merger**: pairs two bundles with static track metadata
//! - **Analysis**: prompt builder, generation-service client, and
//!   free-text block formatter
//! - **API**: Axum routes consumed by the chart UI

pub mod analysis;
pub mod api;
pub mod config;
pub mod telemetry;
pub mod tracks;
pub mod types;

// Re-export the HTTP surface
pub use api::{create_app, ApiState};

// Re-export configuration
pub use config::AppConfig;

// Re-export telemetry pipeline entry points
pub use telemetry::{compare_drivers, fetch_pair, TelemetryError, TelemetryProvider};

// Re-export commonly used types
pub use types::{
    AnalysisBlock, AnalysisRequest, BlockKind, MergedTelemetry, TelemetryQuery,
    TelemetrySeriesBundle,
};

// Re-export analysis operations
pub use analysis::{build_prompt, format_response, AnalysisClient, AnalysisError};
