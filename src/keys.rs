// src/keys.rs
// API key acquisition, performed fresh for every generation

use crate::config::ApiKeys;
use crate::error::Result;

/// Source of the API key for one generation.
/// `Ok(None)` means no key was supplied and the generation is skipped.
pub trait KeySource {
    fn request_api_key(&mut self) -> Result<Option<String>>;
}

/// Key taken from the environment (GEMINI_API_KEY or GOOGLE_API_KEY)
#[derive(Debug, Clone, Default)]
pub struct EnvKeySource {
    keys: ApiKeys,
}

impl EnvKeySource {
    pub fn new(keys: ApiKeys) -> Self {
        Self { keys }
    }
}

impl KeySource for EnvKeySource {
    fn request_api_key(&mut self) -> Result<Option<String>> {
        Ok(self.keys.gemini.clone())
    }
}

/// Treat an entered key as absent when it is empty.
/// Whitespace is kept as typed; the service decides whether it is valid.
pub fn normalize_entered_key(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
