// src/result.rs
// Result presenter: the generated letter with Copy / Close actions

use crate::error::Result;
use crate::modal::{ModalId, ModalKind, ModalStack};
use crate::ui::Clipboard;
use tracing::info;

pub const RESULT_TITLE: &str = "Your Letter";
pub const COPY_LABEL: &str = "Copy Letter";
pub const CLOSE_LABEL: &str = "Close";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultAction {
    Copy,
    Close,
}

/// An open letter modal holding the text exactly as generated
#[derive(Debug, Clone)]
pub struct ResultModal {
    modal_id: ModalId,
    text: String,
}

impl ResultModal {
    pub fn modal_id(&self) -> ModalId {
        self.modal_id
    }

    pub fn title(&self) -> &'static str {
        RESULT_TITLE
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Put the exact letter text on the clipboard. The modal stays open.
    pub fn copy<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<()> {
        clipboard.set(&self.text)?;
        info!(modal_id = self.modal_id, len = self.text.len(), "Letter copied");
        Ok(())
    }

    pub fn close(self, modals: &mut ModalStack) {
        modals.close(self.modal_id);
    }
}

/// Open a letter modal for `text`
pub fn show_letter(modals: &mut ModalStack, text: String) -> ResultModal {
    let modal_id = modals.open(ModalKind::Result);
    ResultModal { modal_id, text }
}
