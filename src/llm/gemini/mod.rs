// src/llm/gemini/mod.rs
// Google Gemini generateContent client

mod client;
mod extraction;
pub mod types;

pub use client::{DEFAULT_API_BASE, DEFAULT_MODEL, GeminiClient};
pub use extraction::{FALLBACK_TEXT, extract_text, extract_text_from_body};
