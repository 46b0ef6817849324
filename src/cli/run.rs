// src/cli/run.rs
// Interactive session on the terminal

use anyhow::Result;
use std::io::IsTerminal;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::http::create_shared_client;
use crate::llm::GeminiClient;
use crate::session::Session;
use crate::ui::{TerminalClipboard, TerminalSurface};

pub async fn run_interactive(catalog: Catalog, settings: &Settings) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "The interactive session needs a terminal.\n\
             Use `letterhammer generate <SCENARIO> -a id=value ...` for scripted use."
        );
    }

    info!(model = %settings.model, api_base = %settings.api_base, "Starting interactive session");

    let client = GeminiClient::with_http_client(
        settings.api_base.clone(),
        settings.model.clone(),
        create_shared_client(),
    );
    let mut session = Session::new(
        catalog,
        TerminalSurface::new(),
        client,
        TerminalClipboard::new(),
    );
    session.run().await?;
    Ok(())
}
