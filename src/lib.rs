//! # deck-builder
//!
//! Card decks for games: build a deck from named card quantities, pad it to
//! a fixed minimum size with filler cards, shuffle, and draw.
//!
//! ## Design Principles
//!
//! 1. **Always Playable**: A freshly built deck holds at least 40 cards.
//!    Missing slots are filled with `"Empty Card"` fillers.
//!
//! 2. **Reproducible**: All randomness flows through a seedable `DeckRng`.
//!    Same seed, same shuffles and draws.
//!
//! 3. **Owned Data**: Decks own their cards outright; copying a deck never
//!    shares state with the original.
//!
//! ## Modules
//!
//! - `core`: RNG, deck configuration, errors
//! - `cards`: Card values, tags and metadata
//! - `deck`: `Deck`, `DeckList`, and the `build_deck` factories
//!
//! ## Example
//!
//! ```
//! use deck_builder::{build_deck, CardDetails, DeckList};
//!
//! let list = DeckList::new()
//!     .with_entry("Goblin", CardDetails::new().with_qty(3).with_tag("Creature"))
//!     .with_entry("Bolt", CardDetails::new().with_tag("Spell"));
//!
//! let mut deck = build_deck(&list);
//! deck.shuffle();
//! let card = deck.draw_card().unwrap();
//! assert_eq!(deck.deck_count(), 39);
//! assert!(["Goblin", "Bolt", "Empty Card"].contains(&card.name()));
//! ```

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckError, DeckRng, DeckRngState, EMPTY_CARD_NAME, MIN_DECK_SIZE};

pub use crate::cards::{AttributeKey, AttributeValue, Attributes, Card, CardMeta};

pub use crate::deck::{build_deck, build_deck_with, CardDetails, Deck, DeckList};
