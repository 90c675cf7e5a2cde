//! Deck lists: the named-quantity input to deck construction.
//!
//! A `DeckList` maps card names to `CardDetails` (quantity, tags, extra
//! metadata) and remembers insertion order, so decks expand in the order the
//! list was written. It serializes as a plain JSON object:
//!
//! ```
//! use deck_builder::deck::DeckList;
//!
//! let list: DeckList = serde_json::from_str(r#"{
//!     "Card A": { "qty": 3, "tags": ["Tag1"] },
//!     "Card B": { "tags": ["Tag2"], "rarity": "rare" }
//! }"#).unwrap();
//!
//! assert_eq!(list.total_cards(), 4);
//! let names: Vec<_> = list.iter().map(|(name, _)| name).collect();
//! assert_eq!(names, ["Card A", "Card B"]);
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::cards::{AttributeKey, AttributeValue, Card, CardMeta};

/// Upper bound on the up-front allocation made by `DeckList::expand`.
const EXPAND_PREALLOC_LIMIT: usize = 1024;

/// Construction-time descriptor for one deck list entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Number of copies. Absent means 1; zero or negative means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,

    /// Tags and metadata given to every copy.
    #[serde(flatten)]
    pub meta: CardMeta,
}

impl CardDetails {
    /// A single untagged copy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity (builder pattern).
    #[must_use]
    pub fn with_qty(mut self, qty: i64) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.meta = self.meta.with_tag(tag);
        self
    }

    /// Add an extra attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.meta = self.meta.with_attr(key, value);
        self
    }

    /// Number of cards this entry expands to.
    #[must_use]
    pub fn effective_qty(&self) -> usize {
        match self.qty {
            None => 1,
            Some(n) => usize::try_from(n).unwrap_or(0),
        }
    }
}

/// Ordered mapping from card name to `CardDetails`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckList {
    entries: Vec<(String, CardDetails)>,
}

impl DeckList {
    /// Create an empty deck list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry.
    ///
    /// Re-inserting a name replaces its details but keeps its original
    /// position. Returns the replaced details, if any.
    pub fn insert(&mut self, name: impl Into<String>, details: CardDetails) -> Option<CardDetails> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, details)),
            None => {
                self.entries.push((name, details));
                None
            }
        }
    }

    /// Insert an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>, details: CardDetails) -> Self {
        self.insert(name, details);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDetails> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardDetails)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Total number of cards the list expands to, before padding.
    ///
    /// Saturates at `usize::MAX` rather than overflowing.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, d)| d.effective_qty())
            .fold(0, usize::saturating_add)
    }

    /// Expand every entry into its copies, in insertion order. No padding.
    ///
    /// Memory grows with the quantities actually expanded; the up-front
    /// allocation is capped so an oversized `qty` cannot trip a capacity
    /// overflow before any card is built.
    #[must_use]
    pub fn expand(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.total_cards().min(EXPAND_PREALLOC_LIMIT));
        for (name, details) in &self.entries {
            let qty = details.effective_qty();
            trace!(card = %name, qty, "expanding deck list entry");
            for _ in 0..qty {
                cards.push(Card::with_details(name.clone(), details.meta.clone()));
            }
        }
        cards
    }
}

impl<S: Into<String>> FromIterator<(S, CardDetails)> for DeckList {
    fn from_iter<I: IntoIterator<Item = (S, CardDetails)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, details) in iter {
            list.insert(name, details);
        }
        list
    }
}

impl Serialize for DeckList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, details) in &self.entries {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DeckList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DeckListVisitor;

        impl<'de> Visitor<'de> for DeckListVisitor {
            type Value = DeckList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of card names to card details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<DeckList, A::Error> {
                let mut list = DeckList::new();
                while let Some((name, details)) = access.next_entry::<String, CardDetails>()? {
                    list.insert(name, details);
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(DeckListVisitor)
    }
}
