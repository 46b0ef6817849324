// src/prompt.rs
// Answer collection and prompt assembly

use crate::catalog::Field;
use crate::error::{LetterError, Result};

/// Header line that opens every prompt
const PROMPT_HEADER: &str = "Write a formal letter for scenario:";

/// Field id -> entered value, ordered by first insertion.
///
/// Re-inserting an id overwrites its value in place, so duplicate ids
/// collapse to a single line carrying the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, String)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        let id = id.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((id, value)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Harvest one answer per field, reading values through `read`.
    /// Values are taken verbatim; a field `read` knows nothing about becomes "".
    pub fn harvest<'a, F>(fields: &[Field], mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        let mut answers = Self::new();
        for f in fields {
            answers.insert(f.id, read(f.id).unwrap_or_default());
        }
        answers
    }
}

/// Build the prompt sent to the model.
///
/// Format: header line naming the scenario, a blank line, then one
/// `- id: value` line per answer in insertion order.
pub fn build_prompt(scenario: &str, answers: &AnswerSet) -> String {
    let lines: Vec<String> = answers
        .iter()
        .map(|(id, value)| format!("- {}: {}", id, value))
        .collect();
    format!("{} {}\n\n{}", PROMPT_HEADER, scenario, lines.join("\n"))
}

/// Parse a command-line answer of the form `id=value`.
/// Only the first `=` separates; the value may be empty or contain `=`.
pub fn parse_answer(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), value.to_string()))
        }
        _ => Err(LetterError::InvalidAnswer(format!(
            "expected id=value, got '{}'",
            raw
        ))),
    }
}
