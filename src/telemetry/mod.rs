//! Telemetry acquisition and merging.
//!
//! The extraction source is a foreign-runtime boundary, abstracted as
//! [`TelemetryProvider`] with a subprocess-based production adapter
//! ([`subprocess::SubprocessProvider`]) and an in-memory fixture for
//! tests ([`fixture::FixtureProvider`]).

pub mod fixture;
pub mod merge;
pub mod subprocess;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{MergedTelemetry, TelemetryQuery, TelemetrySeriesBundle};

/// Failures while fetching telemetry from the extraction source.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The extraction process could not be started, or did not finish
    /// within the configured bound.
    #[error("telemetry source unavailable: {0}")]
    SourceUnavailable(String),

    /// The extraction process reported a failure. Its diagnostic text
    /// is surfaced verbatim, never parsed.
    #[error("telemetry source failed: {0}")]
    SourceError(String),

    /// The extraction process emitted something that is not a valid
    /// telemetry payload.
    #[error("telemetry source emitted malformed output: {0}")]
    MalformedOutput(String),
}

/// Where telemetry bundles come from.
///
/// One call performs exactly one acquisition — no retry, no batching,
/// no caching. Two calls for different drivers are independent and may
/// run concurrently.
#[async_trait]
pub trait TelemetryProvider: Send + Sync {
    /// Fetch one driver's telemetry bundle for one query.
    async fn fetch(&self, query: &TelemetryQuery) -> Result<TelemetrySeriesBundle, TelemetryError>;

    /// Human-readable name for logging (e.g. "subprocess", "fixture").
    fn provider_name(&self) -> &str;
}

/// Fetch two drivers' bundles concurrently.
///
/// The two fetches are issued together and the first failure wins —
/// one driver succeeding never masks the other failing.
pub async fn fetch_pair(
    provider: &(impl TelemetryProvider + ?Sized),
    first: &TelemetryQuery,
    second: &TelemetryQuery,
) -> Result<(TelemetrySeriesBundle, TelemetrySeriesBundle), TelemetryError> {
    tokio::try_join!(provider.fetch(first), provider.fetch(second))
}

/// Fetch both drivers concurrently and merge into one comparable snapshot.
///
/// This is the library entry point for embedders that do not go
/// through the HTTP surface.
pub async fn compare_drivers(
    provider: &(impl TelemetryProvider + ?Sized),
    driver1: &str,
    driver2: &str,
    track: &str,
    year: &str,
    session: &str,
) -> Result<MergedTelemetry, TelemetryError> {
    let first = TelemetryQuery::new(driver1, track, year, session);
    let second = TelemetryQuery::new(driver2, track, year, session);
    let (bundle1, bundle2) = fetch_pair(provider, &first, &second).await?;
    Ok(merge::merge(bundle1, bundle2, track))
}
