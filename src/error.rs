// src/error.rs
// Error types for LetterHammer

use thiserror::Error;

/// Main error type for the LetterHammer library
#[derive(Error, Debug)]
pub enum LetterError {
    #[error("scenario card has no heading")]
    MissingHeading,

    #[error("scenario not defined: {0}")]
    UnknownScenario(String),

    #[error("invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response from AI service: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("no terminal to copy to (stdout and stderr are redirected)")]
    NoTerminal,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using LetterError
pub type Result<T> = std::result::Result<T, LetterError>;

impl LetterError {
    /// Message shown to the user when a generation fails
    pub fn to_user_string(&self) -> String {
        match self {
            LetterError::Http(e) if e.is_connect() => {
                "Could not reach the AI service. Check your connection and try again.".to_string()
            }
            LetterError::Http(e) if e.is_timeout() => {
                "The AI service took too long to answer. Try again.".to_string()
            }
            LetterError::InvalidResponse(_) => {
                "The AI service returned something that is not JSON.".to_string()
            }
            other => other.to_string(),
        }
    }
}
