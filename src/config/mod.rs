// src/config/mod.rs
// Configuration: CLI flags > environment > config file > defaults

pub mod env;
pub mod file;

pub use env::{ApiKeys, EnvConfig};
pub use file::LetterConfig;

use crate::llm::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

/// Resolved settings for the Gemini client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub model: String,
    pub api_base: String,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub api_base: Option<String>,
}

impl Settings {
    pub fn resolve(overrides: &Overrides, env: &EnvConfig, file: &LetterConfig) -> Self {
        let pick = |flag: &Option<String>,
                    var: &Option<String>,
                    entry: &Option<String>,
                    default: &str| {
            flag.clone()
                .or_else(|| var.clone())
                .or_else(|| entry.clone())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            model: pick(&overrides.model, &env.model, &file.llm.model, DEFAULT_MODEL),
            api_base: pick(
                &overrides.api_base,
                &env.api_base,
                &file.llm.api_base,
                DEFAULT_API_BASE,
            ),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&Overrides::default(), &EnvConfig::default(), &LetterConfig::default())
    }
}
