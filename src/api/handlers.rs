//! Request handlers for the telemetry and analysis endpoints.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::analysis::{self, AnalysisClient, AnalysisError};
use crate::telemetry::{merge, TelemetryProvider};
use crate::types::{AnalysisBlock, TelemetryQuery, TelemetrySeriesBundle};

/// Shared handler state. Everything is read-only after startup.
#[derive(Clone)]
pub struct ApiState {
    pub provider: Arc<dyn TelemetryProvider>,
    pub analysis: Arc<AnalysisClient>,
    /// Model identifier sent with every analysis request.
    pub model: String,
}

// ============================================================================
// GET /telemetry
// ============================================================================

/// Fetch one driver's telemetry bundle.
///
/// Any adapter failure is a 500 with a plain-text message — the UI
/// shows it verbatim and lets the user retry.
pub async fn get_telemetry(
    State(state): State<ApiState>,
    Query(query): Query<TelemetryQuery>,
) -> Result<Json<TelemetrySeriesBundle>, (StatusCode, String)> {
    match state.provider.fetch(&query).await {
        Ok(bundle) => Ok(Json(bundle)),
        Err(e) => {
            tracing::error!(driver = %query.driver, error = %e, "telemetry fetch failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

// ============================================================================
// POST /analyze
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub telemetry: Option<AnalyzePayload>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzePayload {
    #[serde(default)]
    pub driver1: Option<TelemetrySeriesBundle>,
    #[serde(default)]
    pub driver2: Option<TelemetrySeriesBundle>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Raw analysis text, as returned by the generation service.
    pub analysis: String,
    /// The same text pre-classified into display blocks.
    pub blocks: Vec<AnalysisBlock>,
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message.into() })))
}

/// Run the full analysis pipeline for two fetched bundles.
pub async fn analyze(
    State(state): State<ApiState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<Value>)> {
    let Some(payload) = request.telemetry else {
        return Err(bad_request("Invalid telemetry data."));
    };
    let (Some(driver1), Some(driver2)) = (payload.driver1, payload.driver2) else {
        return Err(bad_request("Invalid telemetry data."));
    };

    let track = driver1.track.clone().unwrap_or_default();
    let merged = merge::merge(driver1, driver2, &track);

    let prompt = analysis::build_prompt(&merged, &state.model)
        .map_err(|e| bad_request(e.to_string()))?;

    let analysis_text = state.analysis.request_analysis(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "analysis request failed");
        match e {
            AnalysisError::InvalidInput(_) => bad_request(e.to_string()),
            AnalysisError::ServiceUnavailable(_) | AnalysisError::ServiceError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            ),
        }
    })?;

    let blocks = analysis::format_response(&analysis_text);
    Ok(Json(AnalyzeResponse {
        analysis: analysis_text,
        blocks,
    }))
}

// ============================================================================
// GET /health
// ============================================================================

pub async fn health(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.provider.provider_name(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
