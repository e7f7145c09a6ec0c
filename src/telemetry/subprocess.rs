//! Subprocess-based telemetry provider.
//!
//! Runs the external extraction script once per query with four
//! positional arguments (driver, track, year, session) and parses the
//! single JSON document it prints to stdout. The script exits non-zero
//! with diagnostics on stderr when it cannot run at all; lookup
//! failures (unknown driver, no session data) come back as an
//! `{"error": "..."}` payload with exit 0 and are surfaced as
//! [`TelemetryError::SourceError`] just the same.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::{TelemetryError, TelemetryProvider};
use crate::config::AppConfig;
use crate::types::{TelemetryQuery, TelemetrySeriesBundle};

/// Production telemetry provider backed by the extraction script.
pub struct SubprocessProvider {
    python_exe: String,
    script_path: String,
    timeout: Duration,
}

impl SubprocessProvider {
    pub fn new(python_exe: &str, script_path: &str, timeout: Duration) -> Self {
        Self {
            python_exe: python_exe.to_string(),
            script_path: script_path.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.python_exe,
            &config.telemetry_script,
            config.fetch_timeout,
        )
    }
}

#[async_trait]
impl TelemetryProvider for SubprocessProvider {
    async fn fetch(&self, query: &TelemetryQuery) -> Result<TelemetrySeriesBundle, TelemetryError> {
        tracing::debug!(
            driver = %query.driver,
            track = %query.track,
            year = %query.year,
            session = %query.session,
            "spawning telemetry extraction"
        );

        let run = Command::new(&self.python_exe)
            .arg(&self.script_path)
            .arg(&query.driver)
            .arg(&query.track)
            .arg(&query.year)
            .arg(&query.session)
            .kill_on_drop(true)
            .output();

        // The original ran unbounded; the timeout keeps a wedged
        // extraction from suspending the caller forever.
        let output = match tokio::time::timeout(self.timeout, run).await {
            Err(_) => {
                return Err(TelemetryError::SourceUnavailable(format!(
                    "extraction did not finish within {}s",
                    self.timeout.as_secs()
                )))
            }
            Ok(Err(e)) => {
                return Err(TelemetryError::SourceUnavailable(format!(
                    "failed to run {}: {}",
                    self.python_exe, e
                )))
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = ?output.status.code(), "telemetry extraction failed");
            return Err(TelemetryError::SourceError(stderr.trim().to_string()));
        }

        let payload: serde_json::Value = serde_json::from_slice(&output.stdout)
            .map_err(|e| TelemetryError::MalformedOutput(e.to_string()))?;

        // Lookup failures are reported in-band with exit 0.
        if let Some(message) = payload.get("error").and_then(|v| v.as_str()) {
            return Err(TelemetryError::SourceError(message.to_string()));
        }

        serde_json::from_value(payload).map_err(|e| TelemetryError::MalformedOutput(e.to_string()))
    }

    fn provider_name(&self) -> &str {
        "subprocess"
    }
}
