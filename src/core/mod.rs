//! Core building blocks: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckConfig, EMPTY_CARD_NAME, MIN_DECK_SIZE};
pub use error::DeckError;
pub use rng::{DeckRng, DeckRngState};
