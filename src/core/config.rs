//! Deck configuration.
//!
//! `DeckConfig` controls the padding policy applied when a deck is built:
//! the minimum deck size and the name given to filler cards. The default
//! matches the standard 40-card format padded with `"Empty Card"`.

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// Minimum number of cards in a standard deck.
pub const MIN_DECK_SIZE: usize = 40;

/// Name of the sentinel filler card.
pub const EMPTY_CARD_NAME: &str = "Empty Card";

/// Padding policy for deck construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Decks with fewer cards are padded up to this size.
    pub min_size: usize,

    /// Name given to filler cards.
    pub filler_name: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_DECK_SIZE,
            filler_name: EMPTY_CARD_NAME.to_string(),
        }
    }
}

impl DeckConfig {
    /// Create the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum deck size (builder pattern).
    #[must_use]
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set the filler card name (builder pattern).
    #[must_use]
    pub fn with_filler_name(mut self, name: impl Into<String>) -> Self {
        self.filler_name = name.into();
        self
    }

    /// Check the config is usable.
    ///
    /// Filler cards need a non-blank name; `min_size` may be anything,
    /// zero disables padding.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.filler_name.trim().is_empty() {
            return Err(DeckError::InvalidConfig {
                field: "filler_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Number of filler cards needed to pad `len` cards up to `min_size`.
    #[must_use]
    pub fn padding_for(&self, len: usize) -> usize {
        self.min_size.saturating_sub(len)
    }
}
