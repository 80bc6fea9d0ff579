use std::collections::VecDeque;

use crate::cards::{cycled_cards, Card};
use crate::errors::GameError;
use crate::rng::RandomSource;
use crate::shuffle::Shuffler;

/// Ordered pile of cards. The front is the top (drawn first) and new cards
/// go to the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Replaces the contents with `total_cards` cards cycling `1..=max_card_value`.
    pub fn create_deck(&mut self, total_cards: usize, max_card_value: u32) -> Result<(), GameError> {
        if max_card_value == 0 {
            return Err(GameError::InvalidArgument(
                "max card value must be at least 1".into(),
            ));
        }
        self.set_deck(cycled_cards(total_cards, max_card_value));
        Ok(())
    }

    pub fn set_deck(&mut self, cards: Vec<Card>) {
        self.cards = cards.into();
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn draw_top_card(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn shuffle(&mut self, shuffler: &dyn Shuffler, random: &mut dyn RandomSource) {
        shuffler.shuffle(self.cards.make_contiguous(), random);
    }

    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Takes every card out, top first, leaving the deck empty.
    pub fn drain_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}
