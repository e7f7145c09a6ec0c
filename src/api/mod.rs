//! REST API module using Axum.
//!
//! HTTP surface consumed by the chart UI:
//! - `GET /telemetry` — one driver's bundle per query
//! - `POST /analyze` — AI comparison of two fetched bundles
//! - `GET /health` — liveness probe

pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::ApiState;

/// Create the complete application router.
///
/// CORS is permissive — the chart UI is served from a separate origin
/// during development.
pub fn create_app(state: ApiState) -> Router {
    Router::new()
        .route("/telemetry", get(handlers::get_telemetry))
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
