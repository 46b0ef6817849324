// src/config/env.rs
// Environment-based configuration - single source of truth for env vars

use tracing::{debug, info};

/// API keys loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// Gemini/Google API key (GEMINI_API_KEY or GOOGLE_API_KEY)
    pub gemini: Option<String>,
}

impl ApiKeys {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load keys through `lookup`, filtering empty values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read_key = |name: &str| lookup(name).filter(|k| !k.trim().is_empty());
        let gemini = read_key("GEMINI_API_KEY").or_else(|| read_key("GOOGLE_API_KEY"));

        if gemini.is_some() {
            debug!("Gemini API key found in environment");
        }
        Self { gemini }
    }
}

/// Environment configuration - all env vars in one place
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub api_keys: ApiKeys,
    /// Model override (LETTERHAMMER_MODEL)
    pub model: Option<String>,
    /// Endpoint base override (LETTERHAMMER_API_BASE)
    pub api_base: Option<String>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup)
    pub fn load() -> Self {
        info!("Loading environment configuration");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());
        Self {
            api_keys: ApiKeys::from_lookup(&lookup),
            model: non_empty("LETTERHAMMER_MODEL"),
            api_base: non_empty("LETTERHAMMER_API_BASE"),
        }
    }
}
