//! Comparative analysis pipeline: prompt construction, the call to the
//! text-generation service, and formatting of the returned free text.

pub mod client;
pub mod format;
pub mod prompt;

use thiserror::Error;

pub use client::AnalysisClient;
pub use format::format_response;
pub use prompt::build_prompt;

/// Failures in the analysis request/response cycle.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The merged telemetry is missing a field the analysis cannot be
    /// grounded without (driver identifier or sector times).
    #[error("invalid analysis input: {0}")]
    InvalidInput(String),

    /// The text-generation service could not be reached, or the
    /// request timed out.
    #[error("analysis service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The service answered with a non-success response. Quota and
    /// auth failures land here too — they are not distinguished.
    #[error("analysis service error: {0}")]
    ServiceError(String),
}
