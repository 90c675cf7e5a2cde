//! Decks: construction with padding, shuffling, and random draws.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered card pile, padded to a minimum size on construction
//! - `DeckList`: Ordered name -> `CardDetails` input for `build_deck`
//! - `CardDetails`: Quantity plus the tags/metadata each copy receives
//!
//! ## Padding
//!
//! A deck is never smaller than 40 cards when built: missing slots are
//! filled with `"Empty Card"` fillers. Larger card lists are kept as is.

pub mod builder;
pub mod list;

pub use builder::{build_deck, build_deck_with};
pub use list::{CardDetails, DeckList};

use tracing::{debug, trace};

use crate::cards::{Card, CardMeta};
use crate::core::{DeckConfig, DeckError, DeckRng, DeckRngState};

/// An ordered pile of cards.
///
/// Index 0 is the first card supplied at construction. `Deck` owns its cards
/// and its RNG outright, so `Clone` is a full deep copy.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::Card;
/// use deck_builder::core::DeckRng;
/// use deck_builder::deck::Deck;
///
/// let mut deck = Deck::with_rng(vec![Card::new("Card A"), Card::new("Card B")], DeckRng::new(42));
/// assert_eq!(deck.deck_count(), 40);
///
/// deck.shuffle();
/// let drawn = deck.draw_card().unwrap();
/// assert_eq!(deck.deck_count(), 39);
/// assert!(["Card A", "Card B", "Empty Card"].contains(&drawn.name()));
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    filler_name: String,
    rng: DeckRng,
}

impl Deck {
    /// Create a standard deck, padded to 40 cards, with an entropy-seeded RNG.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_rng(cards, DeckRng::from_entropy())
    }

    /// Create a standard deck with a caller-supplied RNG.
    #[must_use]
    pub fn with_rng(cards: Vec<Card>, rng: DeckRng) -> Self {
        Self::padded(cards, &DeckConfig::default(), rng)
    }

    /// Create a deck with a custom padding policy.
    pub fn with_config(cards: Vec<Card>, config: &DeckConfig, rng: DeckRng) -> Result<Self, DeckError> {
        config.validate()?;
        Ok(Self::padded(cards, config, rng))
    }

    fn padded(mut cards: Vec<Card>, config: &DeckConfig, rng: DeckRng) -> Self {
        let padding = config.padding_for(cards.len());
        if padding > 0 {
            debug!(supplied = cards.len(), padding, filler = %config.filler_name, "padding deck");
            cards.extend((0..padding).map(|_| Card::with_details(config.filler_name.as_str(), CardMeta::new())));
        }
        Self {
            cards,
            filler_name: config.filler_name.clone(),
            rng,
        }
    }

    /// The cards in their current order.
    #[must_use]
    pub fn deck_list(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards currently in the deck.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Independent copy of this deck.
    ///
    /// Every card, tag and metadata value is cloned into fresh storage. The
    /// copy carries the same RNG state, so it replays the same shuffles and
    /// draws as the original would.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Randomly reorder the deck in place.
    pub fn shuffle(&mut self) {
        trace!(count = self.cards.len(), "shuffling deck");
        self.rng.shuffle(&mut self.cards);
    }

    /// Remove and return a uniformly random card.
    ///
    /// The remaining cards keep their relative order.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        let index = self.rng.choose_index(self.cards.len()).ok_or(DeckError::EmptyDeck)?;
        let card = self.cards.remove(index);
        trace!(card = %card.name(), remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Number of cards with the given name.
    #[must_use]
    pub fn count_named(&self, name: &str) -> usize {
        self.cards.iter().filter(|c| c.name() == name).count()
    }

    /// Number of padding cards still in the deck.
    #[must_use]
    pub fn filler_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.is_filler(&self.filler_name))
            .count()
    }

    /// Name used for this deck's padding cards.
    #[must_use]
    pub fn filler_name(&self) -> &str {
        &self.filler_name
    }

    /// Capture the RNG state, e.g. to replay a game from this point.
    #[must_use]
    pub fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    /// Consume the deck, returning its cards in order.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    /// A deck of 40 Empty Cards.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for Deck {
    /// Decks compare by their cards and filler name; RNG state is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards && self.filler_name == other.filler_name
    }
}
