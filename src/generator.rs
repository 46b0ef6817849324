// src/generator.rs
// Letter generation: key -> answers -> prompt -> model -> text

use crate::catalog::Field;
use crate::error::Result;
use crate::form::InputValues;
use crate::keys::KeySource;
use crate::llm::TextGenerator;
use crate::prompt::{AnswerSet, build_prompt};
use tracing::{debug, info};

/// Drives one generation per call against a [`TextGenerator`]
pub struct LetterGenerator<G> {
    model: G,
}

impl<G: TextGenerator> LetterGenerator<G> {
    pub fn new(model: G) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &G {
        &self.model
    }

    /// Generate a letter for scenario `name`.
    ///
    /// Steps run strictly in order: acquire a key, harvest one answer per
    /// field from `inputs`, build the prompt, send it, extract the text.
    /// Returns `Ok(None)` without touching the network when no key is
    /// supplied. Transport faults and non-JSON replies are returned as errors.
    pub async fn generate_letter<K, I>(
        &self,
        keys: &mut K,
        name: &str,
        fields: &[Field],
        inputs: &I,
    ) -> Result<Option<String>>
    where
        K: KeySource + ?Sized,
        I: InputValues + ?Sized,
    {
        let Some(api_key) = keys.request_api_key()? else {
            debug!(scenario = name, "No API key supplied, generation skipped");
            return Ok(None);
        };

        let answers = AnswerSet::harvest(fields, |id| inputs.value(id));
        let prompt = build_prompt(name, &answers);

        info!(
            scenario = name,
            model = %self.model.model_name(),
            answers = answers.len(),
            prompt_len = prompt.len(),
            "Generating letter"
        );

        let text = self.model.generate(&api_key, &prompt).await?;
        Ok(Some(text))
    }
}
