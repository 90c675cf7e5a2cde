//! The `Card` value type.
//!
//! A card is a name plus a metadata bag (`CardMeta`): a duplicate-free list
//! of tags and free-form extra attributes. Cards are plain owned data, so
//! cloning a card clones every nested tag and attribute.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use super::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::core::config::EMPTY_CARD_NAME;

/// Tag list. Most cards carry a handful of tags, so they stay inline.
pub type Tags = SmallVec<[String; 4]>;

/// Metadata attached to a card: tags and extra attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardMeta {
    /// Tags in insertion order, without duplicates.
    #[serde(
        default,
        skip_serializing_if = "SmallVec::is_empty",
        deserialize_with = "deserialize_tags"
    )]
    tags: Tags,

    /// Any other metadata.
    #[serde(flatten)]
    pub extra: Attributes,
}

fn deserialize_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tags, D::Error> {
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(CardMeta::from_tags(raw).tags)
}

impl CardMeta {
    /// Create an empty metadata bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metadata from a list of tags, dropping duplicates.
    #[must_use]
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().fold(Self::new(), |meta, tag| meta.with_tag(tag))
    }

    /// Add a tag (builder pattern). Already-present tags are ignored.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.has_tag(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Add an extra attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Get an extra attribute.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.extra.get(&AttributeKey::new(key))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.extra.is_empty()
    }
}

/// A named card.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::Card;
///
/// let bolt = Card::new("Lightning Bolt")
///     .with_tag("Spell")
///     .with_attr("cost", 1i32);
///
/// assert!(bolt.has_tag("Spell"));
/// assert_eq!(bolt.get_attr("cost").and_then(|v| v.as_int()), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    name: String,
    #[serde(default)]
    details: CardMeta,
}

impl Card {
    /// Create a card with no tags or metadata.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_details(name, CardMeta::default())
    }

    /// Create a card with the given metadata.
    #[must_use]
    pub fn with_details(name: impl Into<String>, details: CardMeta) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }

    /// The `"Empty Card"` filler used to pad decks.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(EMPTY_CARD_NAME)
    }

    /// Is this the standard `"Empty Card"` filler?
    ///
    /// Decks built with a custom filler name pad with other cards; use
    /// `is_filler` with `Deck::filler_name` for those.
    #[must_use]
    pub fn is_empty_card(&self) -> bool {
        self.is_filler(EMPTY_CARD_NAME)
    }

    /// Is this a padding card named `filler_name`, with no tags or metadata?
    #[must_use]
    pub fn is_filler(&self, filler_name: &str) -> bool {
        self.name == filler_name && self.details.is_empty()
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.details = self.details.with_tag(tag);
        self
    }

    /// Add an extra attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.details = self.details.with_attr(key, value);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn details(&self) -> &CardMeta {
        &self.details
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.details.tags()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.details.has_tag(tag)
    }

    /// Get an extra attribute.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.details.get_attr(key)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
