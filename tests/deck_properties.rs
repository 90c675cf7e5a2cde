//! Property tests for deck invariants.

use proptest::prelude::*;

use deck_builder::{build_deck, Card, CardDetails, Deck, DeckList, DeckRng, EMPTY_CARD_NAME};

fn cards(len: usize) -> Vec<Card> {
    (0..len).map(|i| Card::new(format!("Card {}", i))).collect()
}

fn sorted_names(deck: &Deck) -> Vec<String> {
    let mut names: Vec<String> = deck.deck_list().iter().map(|c| c.name().to_string()).collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn short_lists_pad_to_forty(len in 0usize..40, seed in any::<u64>()) {
        let deck = Deck::with_rng(cards(len), DeckRng::new(seed));

        prop_assert_eq!(deck.deck_count(), 40);
        prop_assert_eq!(deck.count_named(EMPTY_CARD_NAME), 40 - len);
    }

    #[test]
    fn long_lists_are_not_padded(len in 40usize..120, seed in any::<u64>()) {
        let deck = Deck::with_rng(cards(len), DeckRng::new(seed));

        prop_assert_eq!(deck.deck_count(), len);
        prop_assert_eq!(deck.count_named(EMPTY_CARD_NAME), 0);
    }

    #[test]
    fn shuffle_preserves_cards(len in 0usize..80, seed in any::<u64>()) {
        let mut deck = Deck::with_rng(cards(len), DeckRng::new(seed));
        let before = sorted_names(&deck);

        deck.shuffle();

        prop_assert_eq!(sorted_names(&deck), before);
    }

    #[test]
    fn draw_removes_exactly_one(len in 0usize..80, draws in 1usize..40, seed in any::<u64>()) {
        let mut deck = Deck::with_rng(cards(len), DeckRng::new(seed));
        let start = deck.deck_count();

        for i in 0..draws {
            let before = sorted_names(&deck);
            let drawn = deck.draw_card().unwrap();

            prop_assert_eq!(deck.deck_count(), start - i - 1);
            prop_assert!(before.iter().any(|n| n == drawn.name()));
        }
    }

    #[test]
    fn build_deck_counts_match_quantities(qtys in proptest::collection::vec(-3i64..6, 0..6)) {
        let list: DeckList = qtys
            .iter()
            .enumerate()
            .map(|(i, &q)| (format!("Entry {}", i), CardDetails::new().with_qty(q)))
            .collect();

        let deck = build_deck(&list);
        let supplied: usize = qtys.iter().map(|&q| q.max(0) as usize).sum();

        prop_assert_eq!(deck.deck_count(), supplied.max(40));
        for (i, &q) in qtys.iter().enumerate() {
            prop_assert_eq!(deck.count_named(&format!("Entry {}", i)), q.max(0) as usize);
        }
        prop_assert_eq!(deck.filler_count(), 40usize.saturating_sub(supplied));
    }
}
