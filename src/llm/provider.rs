// src/llm/provider.rs
// Text generation abstraction

use async_trait::async_trait;

use crate::error::Result;

/// Anything that turns a prompt into letter text.
///
/// The API key is passed on every call: it is acquired fresh for each
/// generation and never stored by the client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier, for logging
    fn model_name(&self) -> String;

    /// Send one prompt and return the extracted text (or the fallback text).
    /// Transport failures and non-JSON bodies are errors.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String>;
}
