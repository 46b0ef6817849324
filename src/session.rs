// src/session.rs
// Interactive session: card -> form -> letter -> result

use crate::cards::CardBoard;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::form::{FormAction, open_scenario};
use crate::generator::LetterGenerator;
use crate::llm::TextGenerator;
use crate::modal::ModalStack;
use crate::result::{ResultAction, ResultModal, show_letter};
use crate::ui::{Clipboard, Surface};
use tracing::{debug, error, info};

/// Prefix of the notice shown when a generation fails
pub const GENERATION_FAILED: &str = "Letter generation failed";

/// Prefix of the notice shown when "Copy Letter" fails
pub const COPY_FAILED: &str = "Could not copy the letter";

/// Owns the surface, the open modals and the card snapshot for one run
pub struct Session<S, G, C> {
    catalog: Catalog,
    board: CardBoard,
    modals: ModalStack,
    surface: S,
    generator: LetterGenerator<G>,
    clipboard: C,
}

impl<S, G, C> Session<S, G, C>
where
    S: Surface,
    G: TextGenerator,
    C: Clipboard,
{
    /// Bind one card per catalog scenario and start with no open modals
    pub fn new(catalog: Catalog, surface: S, model: G, clipboard: C) -> Self {
        let board = CardBoard::from_catalog(&catalog);
        Self::with_board(catalog, board, surface, model, clipboard)
    }

    pub fn with_board(
        catalog: Catalog,
        board: CardBoard,
        surface: S,
        model: G,
        clipboard: C,
    ) -> Self {
        Self {
            catalog,
            board,
            modals: ModalStack::new(),
            surface,
            generator: LetterGenerator::new(model),
            clipboard,
        }
    }

    pub fn modals(&self) -> &ModalStack {
        &self.modals
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn model(&self) -> &G {
        self.generator.model()
    }

    /// Card clicks until the surface ends the session
    pub async fn run(&mut self) -> Result<()> {
        info!(cards = self.board.len(), "Session started");
        while let Some(index) = self.surface.pick_card(&self.board)? {
            let Some(card) = self.board.get(index) else {
                debug!(index, "Pick outside the bound cards ignored");
                continue;
            };
            let name = card.click()?;
            self.open_scenario(&name).await?;
        }
        info!("Session ended");
        Ok(())
    }

    /// Open the form for `name` and drive it until it is closed.
    ///
    /// The form closes on Cancel or once a letter has been shown. When no
    /// key is given or the generation fails, the form stays open with its
    /// answers for another attempt.
    pub async fn open_scenario(&mut self, name: &str) -> Result<()> {
        let opened = open_scenario(&self.catalog, &mut self.modals, &mut self.surface, name)?;
        let Some(mut form) = opened else {
            return Ok(());
        };

        loop {
            match self.surface.fill_form(&mut form)? {
                FormAction::Cancel => {
                    debug!(scenario = form.title(), "Form cancelled");
                    self.modals.close(form.modal_id());
                    return Ok(());
                }
                FormAction::Generate => {
                    let scenario = form.scenario();
                    let outcome = self
                        .generator
                        .generate_letter(&mut self.surface, scenario.name, scenario.fields, &form)
                        .await;

                    match outcome {
                        Ok(Some(text)) => {
                            let result = show_letter(&mut self.modals, text);
                            self.modals.close(form.modal_id());
                            return self.present_result(result);
                        }
                        Ok(None) => continue,
                        Err(e) => {
                            error!(
                                scenario = scenario.name,
                                error = %e,
                                "Letter generation failed"
                            );
                            self.surface
                                .notify(&format!("{}: {}", GENERATION_FAILED, e.to_user_string()))?;
                        }
                    }
                }
            }
        }
    }

    fn present_result(&mut self, result: ResultModal) -> Result<()> {
        loop {
            match self.surface.show_result(&result)? {
                ResultAction::Copy => {
                    if let Err(e) = result.copy(&mut self.clipboard) {
                        error!(modal_id = result.modal_id(), error = %e, "Copy failed");
                        self.surface
                            .notify(&format!("{}: {}", COPY_FAILED, e.to_user_string()))?;
                    }
                }
                ResultAction::Close => {
                    result.close(&mut self.modals);
                    return Ok(());
                }
            }
        }
    }
}
