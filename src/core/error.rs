//! Error type for deck operations.

use thiserror::Error;

/// Errors returned by fallible deck operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    #[error("invalid deck config field `{field}`: {message}")]
    InvalidConfig { field: String, message: String },
}
