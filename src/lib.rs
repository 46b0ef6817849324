// src/lib.rs
// LetterHammer - scenario forms in, formal letters out

pub mod cards;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod generator;
pub mod http;
pub mod keys;
pub mod llm;
pub mod modal;
pub mod prompt;
pub mod result;
pub mod session;
pub mod ui;

pub use error::{LetterError, Result};
