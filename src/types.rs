//! Core data model for telemetry comparison and analysis.
//!
//! A [`TelemetrySeriesBundle`] is one driver's full telemetry for one
//! query. All of its sample sequences share the same index domain
//! (position = distance bucket), but two drivers' bundles may have
//! different lengths — nothing here truncates or pads.

use serde::{Deserialize, Serialize};

/// One telemetry query: which driver, where, and when.
///
/// Values are passed through to the external extraction source
/// unvalidated; a nonexistent driver code surfaces as a source error,
/// not an input error.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryQuery {
    pub driver: String,
    pub track: String,
    pub year: String,
    pub session: String,
}

impl TelemetryQuery {
    pub fn new(driver: &str, track: &str, year: &str, session: &str) -> Self {
        Self {
            driver: driver.to_string(),
            track: track.to_string(),
            year: year.to_string(),
            session: session.to_string(),
        }
    }
}

/// One driver's telemetry series for one query.
///
/// Fields are optional so that a bundle arriving over the wire with
/// gaps still merges — consumers omit the views they cannot render.
/// Bundles produced by the extraction source normally carry every
/// field. Immutable once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySeriesBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    /// Fastest lap time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap_time: Option<f64>,
    /// One duration per track sector, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_times: Option<Vec<f64>>,
    /// Speed samples in km/h, indexed by distance bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<Vec<f64>>,
    /// Throttle samples, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<Vec<f64>>,
    /// Brake-active samples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brake: Option<Vec<bool>>,
}

/// Two drivers' bundles plus static track presentation metadata.
///
/// Created fresh on each successful dual fetch; never mutated after.
/// The metadata field names match what the chart UI consumes.
#[derive(Debug, Clone, Serialize)]
pub struct MergedTelemetry {
    pub driver1: TelemetrySeriesBundle,
    pub driver2: TelemetrySeriesBundle,
    #[serde(rename = "circuitImage")]
    pub circuit_image: String,
    #[serde(rename = "funFacts")]
    pub fun_facts: Vec<String>,
}

/// A bounded-size prompt plus fixed generation parameters.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Classification of one formatted line of model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Bullet,
    Paragraph,
}

/// One display unit of formatted analysis text.
///
/// A sequence of blocks preserves the source text's line order; blank
/// lines produce no block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl AnalysisBlock {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_deserializes_with_missing_fields() {
        let json = r#"{"driver": "VER", "speed": [301.0, 305.5]}"#;
        let bundle: TelemetrySeriesBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.driver.as_deref(), Some("VER"));
        assert_eq!(bundle.speed.as_deref(), Some(&[301.0, 305.5][..]));
        assert!(bundle.sector_times.is_none());
        assert!(bundle.brake.is_none());
    }

    #[test]
    fn bundle_round_trips_full_payload() {
        let json = r#"{
            "driver": "LEC",
            "track": "Monaco",
            "year": "2024",
            "session_type": "Q",
            "fastest_lap_time": 70.27,
            "sector_times": [18.1, 33.9, 18.2],
            "speed": [120.0],
            "throttle": [55.0],
            "brake": [true]
        }"#;
        let bundle: TelemetrySeriesBundle = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&bundle).unwrap();
        assert_eq!(back["sector_times"][1], 33.9);
        assert_eq!(back["session_type"], "Q");
    }

    #[test]
    fn missing_fields_are_not_serialized() {
        let bundle = TelemetrySeriesBundle {
            driver: Some("VER".to_string()),
            ..Default::default()
        };
        let v = serde_json::to_value(&bundle).unwrap();
        assert!(v.get("sector_times").is_none());
        assert!(v.get("brake").is_none());
    }

    #[test]
    fn block_kind_serializes_lowercase() {
        let block = AnalysisBlock::new(BlockKind::Heading, "1. Strengths");
        let v = serde_json::to_value(&block).unwrap();
        assert_eq!(v["kind"], "heading");
        assert_eq!(v["text"], "1. Strengths");
    }

    #[test]
    fn merged_telemetry_uses_ui_field_names() {
        let merged = MergedTelemetry {
            driver1: TelemetrySeriesBundle {
                driver: Some("VER".to_string()),
                ..Default::default()
            },
            driver2: TelemetrySeriesBundle {
                driver: Some("LEC".to_string()),
                ..Default::default()
            },
            circuit_image: "/Monaco_Circuit.avif".to_string(),
            fun_facts: vec!["fact".to_string()],
        };
        let v = serde_json::to_value(&merged).unwrap();
        assert!(v.get("circuitImage").is_some());
        assert!(v.get("funFacts").is_some());
    }
}
