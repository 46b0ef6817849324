// src/llm/gemini/client.rs
// Gemini generateContent client (single request, no retry)
// Authenticates with the `key` query parameter, not a Bearer header

use crate::error::Result;
use crate::http::create_shared_client;
use crate::llm::gemini::extraction::extract_text_from_body;
use crate::llm::gemini::types::GeminiRequest;
use crate::llm::provider::TextGenerator;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument, warn};
use uuid::Uuid;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini API client
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for the default model and endpoint
    pub fn new() -> Self {
        Self::with_model(DEFAULT_MODEL.to_string())
    }

    pub fn with_model(model: String) -> Self {
        Self::with_http_client(DEFAULT_API_BASE.to_string(), model, create_shared_client())
    }

    /// Create a client with a custom endpoint base and a shared HTTP client
    pub fn with_http_client(api_base: String, model: String, http: reqwest::Client) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// `{api_base}/{model}:generateContent`, without the key
    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    #[instrument(
        skip(self, api_key, prompt),
        fields(request_id, model = %self.model, prompt_len = prompt.len())
    )]
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());

        let url = self.endpoint();
        let redacted_url = format!("{}?key=<redacted>", url);
        info!(
            request_id = %request_id,
            url = %redacted_url,
            "Starting Gemini generateContent request"
        );

        let request = GeminiRequest::from_prompt(prompt);
        let body = serde_json::to_string(&request)?;
        debug!(request_id = %request_id, "Gemini request: {}", body);

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let response_body = response.text().await?;

        // Error replies are still JSON and go through extraction like any other body
        if !status.is_success() {
            warn!(
                request_id = %request_id,
                status = %status,
                body = %response_body,
                "Gemini returned non-success status"
            );
        }

        let text = extract_text_from_body(&response_body)?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms = duration_ms,
            content_len = text.len(),
            "Gemini generation complete"
        );

        Ok(text)
    }
}
