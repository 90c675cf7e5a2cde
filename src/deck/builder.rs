//! Deck construction from a `DeckList`.

use tracing::debug;

use super::list::DeckList;
use super::Deck;
use crate::core::{DeckConfig, DeckError, DeckRng};

/// Build a standard 40-card deck from a deck list.
///
/// Each entry contributes `qty` copies (1 when unspecified, none when zero or
/// negative) in list order; the result is padded with Empty Cards.
///
/// ```
/// use deck_builder::deck::{build_deck, CardDetails, DeckList};
///
/// let list = DeckList::new()
///     .with_entry("A", CardDetails::new().with_qty(3))
///     .with_entry("B", CardDetails::new().with_qty(2));
///
/// let deck = build_deck(&list);
/// assert_eq!(deck.deck_count(), 40);
/// assert_eq!(deck.count_named("A"), 3);
/// assert_eq!(deck.filler_count(), 35);
/// ```
#[must_use]
pub fn build_deck(list: &DeckList) -> Deck {
    debug!(entries = list.len(), "building deck");
    Deck::new(list.expand())
}

/// Build a deck with an explicit padding policy and RNG.
pub fn build_deck_with(list: &DeckList, config: &DeckConfig, rng: DeckRng) -> Result<Deck, DeckError> {
    debug!(entries = list.len(), min_size = config.min_size, "building deck");
    Deck::with_config(list.expand(), config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardDetails;

    #[test]
    fn test_build_counts() {
        let list = DeckList::new()
            .with_entry("Card A", CardDetails::new().with_qty(3).with_tag("Tag1"))
            .with_entry("Card B", CardDetails::new().with_qty(2).with_tag("Tag2"))
            .with_entry("Card C", CardDetails::new().with_tag("Tag3"));

        let deck = build_deck(&list);

        assert_eq!(deck.deck_count(), 40);
        assert_eq!(deck.count_named("Card A"), 3);
        assert_eq!(deck.count_named("Card B"), 2);
        assert_eq!(deck.count_named("Card C"), 1);
        assert_eq!(deck.filler_count(), 34);
    }

    #[test]
    fn test_build_keeps_list_order_before_padding() {
        let list = DeckList::new()
            .with_entry("Second", CardDetails::new())
            .with_entry("First", CardDetails::new().with_qty(2));

        let deck = build_deck(&list);
        let names: Vec<_> = deck.deck_list().iter().take(4).map(|c| c.name()).collect();

        assert_eq!(names, ["Second", "First", "First", "Empty Card"]);
    }

    #[test]
    fn test_build_empty_list() {
        let deck = build_deck(&DeckList::new());
        assert_eq!(deck.deck_count(), 40);
        assert!(deck.deck_list().iter().all(|c| c.is_empty_card()));
    }

    #[test]
    fn test_zero_and_negative_qty() {
        let list = DeckList::new()
            .with_entry("None", CardDetails::new().with_qty(0))
            .with_entry("Negative", CardDetails::new().with_qty(-5))
            .with_entry("One", CardDetails::new());

        let deck = build_deck(&list);

        assert_eq!(deck.count_named("None"), 0);
        assert_eq!(deck.count_named("Negative"), 0);
        assert_eq!(deck.count_named("One"), 1);
        assert_eq!(deck.filler_count(), 39);
    }

    #[test]
    fn test_build_with_config() {
        let list = DeckList::new().with_entry("A", CardDetails::new().with_qty(5));
        let config = DeckConfig::new().with_min_size(10).with_filler_name("Blank");

        let deck = build_deck_with(&list, &config, DeckRng::new(1)).unwrap();

        assert_eq!(deck.deck_count(), 10);
        assert_eq!(deck.count_named("Blank"), 5);
    }

    #[test]
    fn test_build_with_invalid_config() {
        let config = DeckConfig::new().with_filler_name("");
        let result = build_deck_with(&DeckList::new(), &config, DeckRng::new(1));
        assert!(matches!(result, Err(DeckError::InvalidConfig { .. })));
    }
}
