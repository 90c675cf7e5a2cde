//! Cards: the `Card` value type and its metadata.
//!
//! ## Key Types
//!
//! - `Card`: A name plus a `CardMeta` bag
//! - `CardMeta`: Tags and free-form extra attributes
//! - `AttributeKey` / `AttributeValue`: Extra metadata entries

pub mod attributes;
pub mod card;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{Card, CardMeta, Tags};
