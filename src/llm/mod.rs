// src/llm/mod.rs
// Generative-text clients

pub mod gemini;
mod provider;

pub use gemini::{FALLBACK_TEXT, GeminiClient, extract_text};
pub use provider::TextGenerator;
