use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single playing card identified only by its rank value.
/// Cards with the same value are interchangeable; decks deliberately
/// contain duplicates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Rank of the card, starting at 1
    pub value: u32,
}

impl Card {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Compares two cards by value.
    pub fn compare(&self, other: &Card) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Builds `total_cards` cards whose values cycle `1..=max_card_value`.
///
/// `max_card_value` must be non-zero; [`crate::deck::Deck::create_deck`]
/// rejects zero before calling this.
pub(crate) fn cycled_cards(total_cards: usize, max_card_value: u32) -> Vec<Card> {
    let max = max_card_value as usize;
    (0..total_cards)
        .map(|i| Card::new((i % max) as u32 + 1))
        .collect()
}
