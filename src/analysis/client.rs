//! HTTP client for the text-generation service.
//!
//! One chat-completion call per analysis, no retry policy — a failed
//! attempt is reported to the caller immediately and retrying is a
//! user-facing action.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::config::AppConfig;
use crate::types::AnalysisRequest;

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl AnalysisClient {
    /// Create a client with a bounded request timeout.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.openai_base_url,
            &config.openai_api_key,
            config.analysis_timeout,
        )
    }

    /// Send one analysis request and return the raw response text,
    /// trimmed of surrounding whitespace.
    pub async fn request_analysis(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "system",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let resp = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::ServiceUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::error!(%status, "text-generation service returned an error");
            return Err(AnalysisError::ServiceError(format!(
                "status {status}: {}",
                detail.trim()
            )));
        }

        let completion: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| AnalysisError::ServiceError(format!("unreadable response: {e}")))?;

        first_choice_text(completion)
    }
}

/// Extract the first completion choice, trimmed.
fn first_choice_text(completion: ChatCompletionResponse) -> Result<String, AnalysisError> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(|| AnalysisError::ServiceError("response contained no choices".to_string()))
}
