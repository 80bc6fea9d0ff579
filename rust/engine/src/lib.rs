//! # cardwar-engine: Card War Game Engine Core
//!
//! A deterministic engine for a multi-player "war" card game. Each round
//! every player reveals one card, the highest card takes the table, and ties
//! leave the cards on the table for the next round. The game ends when one
//! player holds every card or when a player runs out of cards.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card value type and deck construction helpers
//! - [`rng`] - Injected randomness sources (ChaCha20 backed)
//! - [`shuffle`] - Fisher-Yates shuffling over an injected source
//! - [`deck`] - Ordered draw-from-top / add-to-bottom card pile
//! - [`player`] - Player hand and discard pile lifecycle
//! - [`observer`] - Notification sinks for moves and results
//! - [`game`] - Setup, equal deal and round resolution
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cardwar_engine::deck::Deck;
//! use cardwar_engine::game::GameBuilder;
//! use cardwar_engine::observer::TracingObserver;
//! use cardwar_engine::player::Player;
//! use cardwar_engine::rng::SeededRandom;
//! use cardwar_engine::shuffle::FisherYates;
//!
//! let mut game = GameBuilder::new()
//!     .observer(TracingObserver)
//!     .deck(Deck::new())
//!     .shuffler(FisherYates)
//!     .players(vec![Player::new("1"), Player::new("2")])
//!     .random(SeededRandom::new(7))
//!     .cards(40, 10)
//!     .build()
//!     .unwrap();
//!
//! let outcome = game.play().unwrap();
//! println!("{} wins by {}", outcome.winner_name, outcome.reason);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles draw from the [`rng::RandomSource`] handed to the builder, so
//! the same seed replays the same game:
//!
//! ```rust
//! use cardwar_engine::rng::{RandomSource, SeededRandom};
//!
//! let mut a = SeededRandom::new(42);
//! let mut b = SeededRandom::new(42);
//! assert_eq!(a.next_int(0, 100), b.next_int(0, 100));
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod observer;
pub mod player;
pub mod rng;
pub mod shuffle;
