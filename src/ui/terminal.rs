// src/ui/terminal.rs
// Interactive terminal front end built on dialoguer

use dialoguer::{Confirm, Input, Password, Select};

use crate::cards::CardBoard;
use crate::error::Result;
use crate::form::{CANCEL_LABEL, FormAction, FormModal, GENERATE_LABEL};
use crate::keys::{KeySource, normalize_entered_key};
use crate::modal::ModalId;
use crate::result::{CLOSE_LABEL, COPY_LABEL, ResultAction, ResultModal};
use crate::ui::Surface;

const BANNER: &str = r#"
  _        _   _            _   _
 | |   ___| |_| |_ ___ _ _ | | | |__ _ _ __  _ __  ___ _ _
 | |__/ -_)  _|  _/ -_) '_|| |_| / _` | '  \| '  \/ -_) '_|
 |____\___|\__|\__\___|_|  |_| |_\__,_|_|_|_|_|_|_\___|_|
"#;

const QUIT_LABEL: &str = "Quit";
const UNTITLED_CARD: &str = "(untitled)";
const RULE: &str = "----------------------------------------";

/// Renders cards as a pick list and modals as prompt blocks on stdout/stderr
#[derive(Debug, Default)]
pub struct TerminalSurface {
    banner_shown: bool,
    /// Result modal whose letter is already on screen
    rendered_result: Option<ModalId>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time a given result modal is shown
    fn first_render(&mut self, modal_id: ModalId) -> bool {
        if self.rendered_result == Some(modal_id) {
            return false;
        }
        self.rendered_result = Some(modal_id);
        true
    }
}

impl KeySource for TerminalSurface {
    fn request_api_key(&mut self) -> Result<Option<String>> {
        let key = Password::new()
            .with_prompt("Enter Gemini API Key")
            .allow_empty_password(true)
            .interact()?;
        Ok(normalize_entered_key(key))
    }
}

impl Surface for TerminalSurface {
    fn pick_card(&mut self, board: &CardBoard) -> Result<Option<usize>> {
        if !self.banner_shown {
            println!("{}", BANNER);
            self.banner_shown = true;
        }

        let mut items: Vec<&str> = board
            .cards()
            .iter()
            .map(|c| c.heading().map(str::trim).unwrap_or(UNTITLED_CARD))
            .collect();
        items.push(QUIT_LABEL);

        let selection = Select::new()
            .with_prompt("Choose a letter to write")
            .items(&items)
            .default(0)
            .interact_opt()?;

        Ok(selection.filter(|&i| i < board.len()))
    }

    fn fill_form(&mut self, form: &mut FormModal) -> Result<FormAction> {
        println!("\n{}\n{}\n{}", RULE, form.title(), RULE);

        for input in form.inputs_mut() {
            let value = Input::<String>::new()
                .with_prompt(input.label)
                .with_initial_text(input.value.clone())
                .allow_empty(true)
                .interact_text()?;
            input.value = value;
        }

        let choice = Select::new()
            .items(&[GENERATE_LABEL, CANCEL_LABEL])
            .default(0)
            .interact_opt()?;

        Ok(match choice {
            Some(0) => FormAction::Generate,
            _ => FormAction::Cancel,
        })
    }

    fn show_result(&mut self, result: &ResultModal) -> Result<ResultAction> {
        if self.first_render(result.modal_id()) {
            println!("\n{}\n{}\n{}", RULE, result.title(), RULE);
            println!("{}", result.text());
            println!("{}", RULE);
        }

        let choice = Select::new()
            .items(&[COPY_LABEL, CLOSE_LABEL])
            .default(0)
            .interact_opt()?;

        Ok(match choice {
            Some(0) => ResultAction::Copy,
            _ => ResultAction::Close,
        })
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .show_default(false)
            .wait_for_newline(true)
            .interact()?;
        Ok(())
    }
}
