// src/modal.rs
// Open modal overlays, in the order they were opened

use tracing::debug;

/// Handle to one opened modal
pub type ModalId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    /// Answer form for a scenario
    Form { scenario: String },
    /// Generated letter
    Result,
}

/// The set of currently open modals.
///
/// Opening never replaces an existing modal: two forms for the same
/// scenario simply stack. Closing is idempotent.
#[derive(Debug, Default)]
pub struct ModalStack {
    next_id: ModalId,
    open: Vec<(ModalId, ModalKind)>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, kind: ModalKind) -> ModalId {
        self.next_id += 1;
        let id = self.next_id;
        debug!(modal_id = id, kind = ?kind, "Modal opened");
        self.open.push((id, kind));
        id
    }

    /// Remove the modal if it is still open. Returns whether it was.
    pub fn close(&mut self, id: ModalId) -> bool {
        match self.open.iter().position(|(open_id, _)| *open_id == id) {
            Some(pos) => {
                let (_, kind) = self.open.remove(pos);
                debug!(modal_id = id, kind = ?kind, "Modal closed");
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self, id: ModalId) -> bool {
        self.open.iter().any(|(open_id, _)| *open_id == id)
    }

    /// Most recently opened modal still open
    pub fn top(&self) -> Option<&ModalKind> {
        self.open.last().map(|(_, kind)| kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &ModalKind> {
        self.open.iter().map(|(_, kind)| kind)
    }

    pub fn form_count(&self) -> usize {
        self.kinds()
            .filter(|k| matches!(k, ModalKind::Form { .. }))
            .count()
    }

    pub fn result_count(&self) -> usize {
        self.kinds()
            .filter(|k| matches!(k, ModalKind::Result))
            .count()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> ModalKind {
        ModalKind::Form {
            scenario: name.to_string(),
        }
    }

    #[test]
    fn test_open_and_close() {
        let mut modals = ModalStack::new();
        let id = modals.open(form("Medical Bill Dispute"));
        assert!(modals.is_open(id));
        assert_eq!(modals.len(), 1);

        assert!(modals.close(id));
        assert!(!modals.is_open(id));
        assert!(modals.is_empty());
    }

    #[test]
    fn test_close_twice_is_noop() {
        let mut modals = ModalStack::new();
        let id = modals.open(ModalKind::Result);
        assert!(modals.close(id));
        assert!(!modals.close(id));
    }

    #[test]
    fn test_same_scenario_stacks() {
        let mut modals = ModalStack::new();
        let first = modals.open(form("Parking Ticket Appeal"));
        let second = modals.open(form("Parking Ticket Appeal"));
        assert_ne!(first, second);
        assert_eq!(modals.form_count(), 2);

        modals.close(first);
        assert_eq!(modals.form_count(), 1);
        assert!(modals.is_open(second));
    }

    #[test]
    fn test_top_tracks_latest_open() {
        let mut modals = ModalStack::new();
        let form_id = modals.open(form("Refund Request Escalation"));
        modals.open(ModalKind::Result);
        assert_eq!(modals.top(), Some(&ModalKind::Result));

        modals.close(form_id);
        assert_eq!(modals.top(), Some(&ModalKind::Result));
        assert_eq!(modals.result_count(), 1);
        assert_eq!(modals.form_count(), 0);
    }
}
