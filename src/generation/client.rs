// Generation service client

use super::rate_limit;
use crate::models::GenerationOutcome;
use serde_json::json;
use std::time::Duration;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API base
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request deadline in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for the single-shot generation exchange
///
/// One request in, one complete reply out. No streaming, no retry;
/// retrying is a user-level action.
pub struct GenerationClient {
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl GenerationClient {
    /// Create a client with the default endpoint, model, and deadline
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Model identifier reported back to the editor
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Perform the single request/response exchange and classify the result
    ///
    /// Never mutates conversation state; the caller folds the outcome in.
    pub async fn generate(&self, instruction: &str) -> GenerationOutcome {
        if instruction.trim().is_empty() {
            return GenerationOutcome::InvalidInput;
        }

        let client = match reqwest::Client::builder().timeout(self.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                return classify_error(&format!("Failed to build HTTP client: {}", e));
            }
        };

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let body = json!({
            "contents": [{
                "parts": [{ "text": instruction }]
            }]
        });

        let response = match client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return classify_error(&format!("Failed to reach generation service: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return classify_error(&format!("Generation service error ({}): {}", status, text));
        }

        let reply: serde_json::Value = match response.json().await {
            Ok(value) => value,
            Err(e) => {
                return classify_error(&format!("Failed to parse response: {}", e));
            }
        };

        match reply_text(&reply) {
            Some(text) if !text.is_empty() => GenerationOutcome::Success { reply_text: text },
            _ => GenerationOutcome::Failure {
                detail: "Generation service returned an empty reply".to_string(),
            },
        }
    }
}

fn classify_error(detail: &str) -> GenerationOutcome {
    log::warn!("Generation exchange failed: {}", detail);
    if rate_limit::is_rate_limit_signal(detail) {
        GenerationOutcome::RateLimited
    } else {
        GenerationOutcome::Failure {
            detail: detail.to_string(),
        }
    }
}

/// Concatenated text of the first candidate's parts
fn reply_text(reply: &serde_json::Value) -> Option<String> {
    let parts = reply["candidates"].get(0)?["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect::<Vec<_>>()
        .join("");
    Some(text)
}
