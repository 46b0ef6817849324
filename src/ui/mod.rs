// src/ui/mod.rs
// Rendering seam between the letter workflow and a concrete front end

mod clipboard;
pub mod terminal;

pub use clipboard::{Clipboard, Osc52Clipboard, TerminalClipboard, TerminalStream, pick_stream};
pub use terminal::TerminalSurface;

use crate::cards::CardBoard;
use crate::error::Result;
use crate::form::{FormAction, FormModal};
use crate::keys::KeySource;
use crate::result::{ResultAction, ResultModal};

/// A front end able to show cards, forms, letters and notices.
///
/// Key acquisition is part of the surface so an interactive front end can
/// ask the user for it right before each generation.
pub trait Surface: KeySource {
    /// Let the user click a card. `None` ends the session.
    fn pick_card(&mut self, board: &CardBoard) -> Result<Option<usize>>;

    /// Render the form, let the user edit its inputs, and report the chosen action
    fn fill_form(&mut self, form: &mut FormModal) -> Result<FormAction>;

    /// Render the letter and report the chosen action
    fn show_result(&mut self, result: &ResultModal) -> Result<ResultAction>;

    /// Blocking notice to the user
    fn notify(&mut self, message: &str) -> Result<()>;
}
