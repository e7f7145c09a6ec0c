//! Application configuration, loaded from the environment once at startup.
//!
//! ## Environment Variables
//!
//! - `PITWALL_SERVER_ADDR`: HTTP bind address (default `0.0.0.0:5001`)
//! - `PITWALL_PYTHON`: Python executable for the extraction script
//!   (default `python3`)
//! - `PITWALL_TELEMETRY_SCRIPT`: path to the extraction script
//!   (default `telemetry.py`)
//! - `PITWALL_FETCH_TIMEOUT_SECS`: upper bound on one extraction run
//!   (default 180 — session loads are slow on a cold cache)
//! - `OPENAI_API_KEY`: bearer token for the text-generation service
//! - `OPENAI_BASE_URL`: service base URL (default `https://api.openai.com`)
//! - `OPENAI_MODEL`: model identifier (default `gpt-3.5-turbo`)
//! - `PITWALL_ANALYSIS_TIMEOUT_SECS`: HTTP client timeout (default 30)

use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server bind address.
    pub server_addr: String,
    /// Python executable used to run the extraction script.
    pub python_exe: String,
    /// Path to the telemetry extraction script.
    pub telemetry_script: String,
    /// Upper bound on a single extraction subprocess run.
    pub fetch_timeout: Duration,
    /// API key for the text-generation service.
    pub openai_api_key: String,
    /// Base URL of the text-generation service.
    pub openai_base_url: String,
    /// Model identifier sent with every analysis request.
    pub openai_model: String,
    /// HTTP client timeout for analysis requests.
    pub analysis_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server_addr: env_or("PITWALL_SERVER_ADDR", "0.0.0.0:5001"),
            python_exe: env_or("PITWALL_PYTHON", "python3"),
            telemetry_script: env_or("PITWALL_TELEMETRY_SCRIPT", "telemetry.py"),
            fetch_timeout: Duration::from_secs(env_secs("PITWALL_FETCH_TIMEOUT_SECS", 180)),
            openai_api_key: env_or("OPENAI_API_KEY", ""),
            openai_base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com"),
            openai_model: env_or("OPENAI_MODEL", "gpt-3.5-turbo"),
            analysis_timeout: Duration::from_secs(env_secs("PITWALL_ANALYSIS_TIMEOUT_SECS", 30)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:5001".to_string(),
            python_exe: "python3".to_string(),
            telemetry_script: "telemetry.py".to_string(),
            fetch_timeout: Duration::from_secs(180),
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com".to_string(),
            openai_model: "gpt-3.5-turbo".to_string(),
            analysis_timeout: Duration::from_secs(30),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_secs(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
