//! In-memory telemetry provider for tests and offline runs.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{TelemetryError, TelemetryProvider};
use crate::types::{TelemetryQuery, TelemetrySeriesBundle};

/// Serves pre-loaded bundles keyed by driver code.
///
/// An unknown driver behaves like the real extraction source: the
/// lookup failure comes back as [`TelemetryError::SourceError`].
#[derive(Default)]
pub struct FixtureProvider {
    bundles: HashMap<String, TelemetrySeriesBundle>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(mut self, driver: &str, bundle: TelemetrySeriesBundle) -> Self {
        self.bundles.insert(driver.to_string(), bundle);
        self
    }
}

#[async_trait]
impl TelemetryProvider for FixtureProvider {
    async fn fetch(&self, query: &TelemetryQuery) -> Result<TelemetrySeriesBundle, TelemetryError> {
        self.bundles.get(&query.driver).cloned().ok_or_else(|| {
            TelemetryError::SourceError(format!(
                "No data for driver {} at {} in {} {}",
                query.driver, query.track, query.year, query.session
            ))
        })
    }

    fn provider_name(&self) -> &str {
        "fixture"
    }
}
