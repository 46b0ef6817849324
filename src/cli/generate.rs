// src/cli/generate.rs
// `letterhammer prompt` and `letterhammer generate`

use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::catalog::{Catalog, Scenario};
use crate::config::{ApiKeys, Settings};
use crate::error::LetterError;
use crate::form::NOT_DEFINED_MESSAGE;
use crate::generator::LetterGenerator;
use crate::http::create_shared_client;
use crate::keys::EnvKeySource;
use crate::llm::GeminiClient;
use crate::prompt::{AnswerSet, build_prompt, parse_answer};
use crate::ui::{Clipboard, TerminalClipboard};

/// Turn `id=value` arguments into answers for `scenario`.
///
/// Fields without an argument are answered with "". A repeated id keeps
/// its last value. Ids the scenario does not declare are rejected.
pub fn collect_answers(scenario: &Scenario, raw: &[String]) -> crate::error::Result<AnswerSet> {
    let mut given = AnswerSet::new();
    for arg in raw {
        let (id, value) = parse_answer(arg)?;
        if scenario.field(&id).is_none() {
            let known: Vec<&str> = scenario.fields.iter().map(|f| f.id).collect();
            return Err(LetterError::InvalidAnswer(format!(
                "'{}' is not a field of {} (fields: {})",
                id,
                scenario.name,
                known.join(", ")
            )));
        }
        given.insert(id, value);
    }
    Ok(AnswerSet::harvest(scenario.fields, |id| given.get(id)))
}

fn lookup(catalog: &Catalog, name: &str) -> Result<&'static Scenario> {
    match catalog.get(name) {
        Some(scenario) => Ok(scenario),
        None => bail!("{} ({})", NOT_DEFINED_MESSAGE, name),
    }
}

pub fn run_prompt(catalog: &Catalog, scenario: &str, answers: &[String]) -> Result<()> {
    let scenario = lookup(catalog, scenario)?;
    let answers = collect_answers(scenario, answers)?;
    println!("{}", build_prompt(scenario.name, &answers));
    Ok(())
}

pub async fn run_generate(
    catalog: &Catalog,
    settings: &Settings,
    keys: ApiKeys,
    scenario: &str,
    answers: &[String],
    copy: bool,
) -> Result<()> {
    let scenario = lookup(catalog, scenario)?;
    let answers = collect_answers(scenario, answers)?;

    let client = GeminiClient::with_http_client(
        settings.api_base.clone(),
        settings.model.clone(),
        create_shared_client(),
    );
    let generator = LetterGenerator::new(client);
    let mut key_source = EnvKeySource::new(keys);

    let Some(letter) = generator
        .generate_letter(&mut key_source, scenario.name, scenario.fields, &answers)
        .await?
    else {
        bail!("No API key: set GEMINI_API_KEY (or GOOGLE_API_KEY)");
    };

    println!("{}", letter);

    if copy {
        match TerminalClipboard::new().set(&letter) {
            Ok(()) => info!(len = letter.len(), "Letter copied to clipboard"),
            Err(e) => warn!(error = %e, "Letter not copied"),
        }
    }

    Ok(())
}
