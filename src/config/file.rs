// src/config/file.rs
// File-based configuration from ~/.letterhammer/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct LetterConfig {
    #[serde(default)]
    pub llm: LlmConfig,
}

/// LLM configuration section
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct LlmConfig {
    /// Gemini model name, e.g. "gemini-2.0-flash"
    pub model: Option<String>,
    /// Endpoint base, up to and including `/models`
    pub api_base: Option<String>,
}

impl LetterConfig {
    /// Load config from ~/.letterhammer/config.toml
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Missing or unparsable files yield the defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        letterhammer_dir().join("config.toml")
    }
}

/// ~/.letterhammer, or ./.letterhammer without a home directory
pub fn letterhammer_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".letterhammer")
}
