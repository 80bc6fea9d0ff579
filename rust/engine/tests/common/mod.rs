#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use cardwar_engine::cards::Card;
use cardwar_engine::errors::GameError;
use cardwar_engine::player::Participant;
use cardwar_engine::rng::RandomSource;
use cardwar_engine::shuffle::Shuffler;

pub fn cards(values: &[u32]) -> Vec<Card> {
    values.iter().copied().map(Card::new).collect()
}

/// Leaves the order untouched.
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&self, _cards: &mut [Card], _random: &mut dyn RandomSource) {}
}

/// Records the values of every slice it is asked to shuffle. The first
/// call (the master deck) is left as is; later calls are reversed.
#[derive(Debug, Clone, Default)]
pub struct RecordingShuffler {
    pub calls: Rc<RefCell<Vec<Vec<u32>>>>,
}

impl Shuffler for RecordingShuffler {
    fn shuffle(&self, cards: &mut [Card], _random: &mut dyn RandomSource) {
        let mut calls = self.calls.borrow_mut();
        calls.push(cards.iter().map(|c| c.value).collect());
        if calls.len() > 1 {
            cards.reverse();
        }
    }
}

/// Always answers the low end of the range.
pub struct LowRandom;

impl RandomSource for LowRandom {
    fn next_int(&mut self, low: usize, _high_inclusive: usize) -> usize {
        low
    }
}

/// Participant that plays a fixed script and records every award.
/// Cards dealt by the game are counted but ignored.
#[derive(Debug, Default)]
pub struct Scripted {
    pub name: String,
    pub script: VecDeque<Card>,
    pub discard: Vec<Card>,
    pub awards: Vec<Vec<Card>>,
    pub dealt: usize,
    pub refills: usize,
}

impl Scripted {
    pub fn new(name: &str, values: &[u32]) -> Self {
        Self {
            name: name.to_string(),
            script: cards(values).into(),
            ..Self::default()
        }
    }

    pub fn with_discard(mut self, values: &[u32]) -> Self {
        self.discard = cards(values);
        self
    }
}

impl Participant for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand_count(&self) -> usize {
        self.script.len()
    }

    fn discard_count(&self) -> usize {
        self.discard.len()
    }

    fn set_hand(&mut self, cards: Vec<Card>) {
        self.dealt = cards.len();
    }

    fn show_card(&mut self) -> Result<Card, GameError> {
        self.script
            .pop_front()
            .ok_or_else(|| GameError::InvalidState("script exhausted".into()))
    }

    fn add_deck_cards(&mut self, cards: &[Card]) {
        self.script.extend(cards.iter().copied());
    }

    fn add_discarded_cards(&mut self, cards: &[Card]) {
        self.awards.push(cards.to_vec());
        self.discard.extend_from_slice(cards);
    }

    fn use_shuffled_discarded_set(&mut self, _shuffler: &dyn Shuffler, _random: &mut dyn RandomSource) {
        if self.discard.is_empty() {
            return;
        }
        self.refills += 1;
        self.script = std::mem::take(&mut self.discard).into();
    }
}
