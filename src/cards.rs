// src/cards.rs
// Scenario cards bound once at session start

use crate::catalog::Catalog;
use crate::error::{LetterError, Result};
use tracing::{debug, info};

/// A selectable scenario tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    heading: Option<String>,
}

impl Card {
    pub fn with_heading(heading: impl Into<String>) -> Self {
        Self {
            heading: Some(heading.into()),
        }
    }

    pub fn without_heading() -> Self {
        Self { heading: None }
    }

    /// Raw heading text as displayed
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Scenario name this card opens: the heading's trimmed text.
    /// A card without a heading faults here, not when bound.
    pub fn click(&self) -> Result<String> {
        let name = self
            .heading
            .as_deref()
            .map(str::trim)
            .ok_or(LetterError::MissingHeading)?;
        debug!(scenario = name, "Card clicked");
        Ok(name.to_string())
    }
}

/// Snapshot of the cards present when the session started.
/// Cards created afterwards are never bound.
#[derive(Debug, Clone, Default)]
pub struct CardBoard {
    cards: Vec<Card>,
}

impl CardBoard {
    pub fn bind(cards: Vec<Card>) -> Self {
        info!(count = cards.len(), "Bound scenario cards");
        Self { cards }
    }

    /// One card per catalog scenario, in catalog order
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::bind(catalog.names().map(Card::with_heading).collect())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_trims_heading() {
        let card = Card::with_heading("  Medical Bill Dispute \n");
        assert_eq!(card.click().unwrap(), "Medical Bill Dispute");
        assert_eq!(card.heading(), Some("  Medical Bill Dispute \n"));
    }

    #[test]
    fn test_missing_heading_faults_on_click() {
        let board = CardBoard::bind(vec![Card::without_heading()]);
        assert_eq!(board.len(), 1);
        let err = board.get(0).unwrap().click().unwrap_err();
        assert!(matches!(err, LetterError::MissingHeading));
    }

    #[test]
    fn test_from_catalog_matches_catalog_order() {
        let catalog = Catalog::builtin();
        let board = CardBoard::from_catalog(&catalog);
        let names: Vec<String> = board.cards().iter().map(|c| c.click().unwrap()).collect();
        let expected: Vec<String> = catalog.names().map(String::from).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_bind_is_a_snapshot() {
        let mut cards = vec![Card::with_heading("Parking Ticket Appeal")];
        let board = CardBoard::bind(cards.clone());
        cards.push(Card::with_heading("Late card"));
        assert_eq!(board.len(), 1);
        assert!(board.get(1).is_none());
    }

    #[test]
    fn test_empty_board() {
        let board = CardBoard::default();
        assert!(board.is_empty());
    }
}
