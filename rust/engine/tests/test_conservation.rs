use cardwar_engine::deck::Deck;
use cardwar_engine::game::GameBuilder;
use cardwar_engine::observer::EventRecorder;
use cardwar_engine::player::{Participant, Player};
use cardwar_engine::rng::SeededRandom;
use cardwar_engine::shuffle::FisherYates;

fn held(players: &[Player]) -> usize {
    players.iter().map(|p| p.total_available_cards_count()).sum()
}

#[test]
fn every_card_is_accounted_for_after_play() {
    let setups: [(usize, u32, usize); 4] = [(40, 10, 2), (41, 10, 3), (52, 13, 4), (7, 2, 2)];
    for (total, max, seats) in setups {
        for seed in 0..5u64 {
            let players: Vec<Player> = (1..=seats).map(|i| Player::new(i.to_string())).collect();
            let mut game = GameBuilder::new()
                .observer(EventRecorder::new())
                .deck(Deck::new())
                .shuffler(FisherYates)
                .random(SeededRandom::new(seed))
                .players(players)
                .cards(total, max)
                .max_rounds(Some(100_000))
                .build()
                .unwrap();

            assert_eq!(held(game.players()) + game.undistributed().count(), total);

            let outcome = game.play().unwrap();
            assert_eq!(
                held(game.players()) + outcome.unclaimed.len() + game.undistributed().count(),
                total,
                "cards lost with {} cards, {} players, seed {}",
                total,
                seats,
                seed
            );
        }
    }
}

#[test]
fn value_counts_survive_play() {
    let mut game = GameBuilder::new()
        .observer(EventRecorder::new())
        .deck(Deck::new())
        .shuffler(FisherYates)
        .random(SeededRandom::new(77))
        .players(vec![Player::new("1"), Player::new("2")])
        .cards(40, 10)
        .max_rounds(Some(100_000))
        .build()
        .unwrap();
    let outcome = game.play().unwrap();

    let mut values: Vec<u32> = game
        .players()
        .iter()
        .flat_map(|p| p.hand().cards().chain(p.discard().cards()))
        .map(|c| c.value)
        .chain(outcome.unclaimed.iter().map(|c| c.value))
        .collect();
    values.sort_unstable();
    let mut expected: Vec<u32> = (0..40).map(|i| i % 10 + 1).collect();
    expected.sort_unstable();
    assert_eq!(values, expected);
}

#[test]
fn cards_are_conserved_after_every_round() {
    let setups: [(usize, u32, usize); 3] = [(40, 10, 2), (41, 10, 3), (7, 2, 2)];
    for (total, max, seats) in setups {
        for limit in 1..300u64 {
            let players: Vec<Player> = (1..=seats).map(|i| Player::new(i.to_string())).collect();
            let mut game = GameBuilder::new()
                .observer(EventRecorder::new())
                .deck(Deck::new())
                .shuffler(FisherYates)
                .random(SeededRandom::new(2024))
                .players(players)
                .cards(total, max)
                .max_rounds(Some(limit))
                .build()
                .unwrap();

            let outcome = game.play().unwrap();
            assert!(outcome.rounds <= limit);
            assert_eq!(
                held(game.players()) + outcome.unclaimed.len() + game.undistributed().count(),
                total,
                "cards lost after {} rounds with {} cards, {} players",
                outcome.rounds,
                total,
                seats
            );
        }
    }
}
