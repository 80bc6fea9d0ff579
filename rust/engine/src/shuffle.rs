use crate::cards::Card;
use crate::rng::RandomSource;

/// Permutes cards in place using an injected randomness source.
pub trait Shuffler {
    fn shuffle(&self, cards: &mut [Card], random: &mut dyn RandomSource);
}

/// Backward Durstenfeld pass: for `i` from `len - 1` down to `1`, swap
/// position `i` with a uniformly drawn `j` in `0..=i`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FisherYates;

impl Shuffler for FisherYates {
    fn shuffle(&self, cards: &mut [Card], random: &mut dyn RandomSource) {
        for i in (1..cards.len()).rev() {
            let j = random.next_int(0, i);
            cards.swap(i, j);
        }
    }
}
