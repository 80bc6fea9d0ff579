use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::rng::RandomSource;
use crate::shuffle::Shuffler;

/// Everything the game loop needs from a seat at the table.
///
/// [`Player`] is the real implementation; the trait exists so the round
/// loop can be driven by scripted participants in tests.
pub trait Participant {
    fn name(&self) -> &str;

    /// Cards available to play right now.
    fn hand_count(&self) -> usize;

    /// Cards won but not yet shuffled back into the hand.
    fn discard_count(&self) -> usize;

    fn total_available_cards_count(&self) -> usize {
        self.hand_count() + self.discard_count()
    }

    /// Replaces the hand with the given cards (used when dealing).
    fn set_hand(&mut self, cards: Vec<Card>);

    /// Draws the top card of the hand.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidState`] when the hand is empty.
    fn show_card(&mut self) -> Result<Card, GameError>;

    fn add_deck_cards(&mut self, cards: &[Card]);

    fn add_discarded_cards(&mut self, cards: &[Card]);

    /// Moves the discard pile into the hand and shuffles it. No-op when
    /// the discard pile is empty.
    fn use_shuffled_discarded_set(&mut self, shuffler: &dyn Shuffler, random: &mut dyn RandomSource);
}

/// A named player holding a hand to play from and a discard pile of won cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Deck,
    discard: Deck,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_decks(name, Deck::new(), Deck::new())
    }

    pub fn with_decks(name: impl Into<String>, hand: Deck, discard: Deck) -> Self {
        Self {
            name: name.into(),
            hand,
            discard,
        }
    }

    pub fn hand(&self) -> &Deck {
        &self.hand
    }

    pub fn discard(&self) -> &Deck {
        &self.discard
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand_count(&self) -> usize {
        self.hand.count()
    }

    fn discard_count(&self) -> usize {
        self.discard.count()
    }

    fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand.set_deck(cards);
    }

    fn show_card(&mut self) -> Result<Card, GameError> {
        self.hand
            .draw_top_card()
            .ok_or_else(|| GameError::InvalidState(format!("player {} has no card to show", self.name)))
    }

    fn add_deck_cards(&mut self, cards: &[Card]) {
        for &card in cards {
            self.hand.add_card(card);
        }
    }

    fn add_discarded_cards(&mut self, cards: &[Card]) {
        for &card in cards {
            self.discard.add_card(card);
        }
    }

    fn use_shuffled_discarded_set(&mut self, shuffler: &dyn Shuffler, random: &mut dyn RandomSource) {
        if self.discard.is_empty() {
            return;
        }
        self.hand.set_deck(self.discard.drain_all());
        self.hand.shuffle(shuffler, random);
        self.discard.reset();
    }
}
