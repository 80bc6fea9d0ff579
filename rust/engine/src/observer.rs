//! Notification sinks for game progress.
//!
//! The engine reports three kinds of events and never inspects what a sink
//! does with them. Sinks must not fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Receives game progress notifications.
pub trait GameObserver {
    /// A player revealed `value` and has `remaining` cards left in hand.
    fn on_move(&mut self, player: &str, value: u32, remaining: usize);
    fn on_round_completed(&mut self, winner: &str);
    fn on_game_completed(&mut self, winner: &str);
}

/// A single reported event, in a serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Move {
        player: String,
        value: u32,
        remaining: usize,
    },
    RoundCompleted {
        winner: String,
    },
    GameCompleted {
        winner: String,
    },
}

/// Collects events into a shared buffer. Clones share the same buffer, so
/// one handle can go to the game while another is read afterwards.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn round_winners(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::RoundCompleted { winner } => Some(winner),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: GameEvent) {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl GameObserver for EventRecorder {
    fn on_move(&mut self, player: &str, value: u32, remaining: usize) {
        self.push(GameEvent::Move {
            player: player.to_string(),
            value,
            remaining,
        });
    }

    fn on_round_completed(&mut self, winner: &str) {
        self.push(GameEvent::RoundCompleted {
            winner: winner.to_string(),
        });
    }

    fn on_game_completed(&mut self, winner: &str) {
        self.push(GameEvent::GameCompleted {
            winner: winner.to_string(),
        });
    }
}

/// Counts events without keeping them. Clones share the count.
#[derive(Debug, Clone, Default)]
pub struct EventCounter {
    count: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}

impl GameObserver for EventCounter {
    fn on_move(&mut self, _player: &str, _value: u32, _remaining: usize) {
        self.bump();
    }

    fn on_round_completed(&mut self, _winner: &str) {
        self.bump();
    }

    fn on_game_completed(&mut self, _winner: &str) {
        self.bump();
    }
}

/// Forwards events to `tracing`: moves at trace, rounds at debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_move(&mut self, player: &str, value: u32, remaining: usize) {
        trace!(player, value, remaining, "move");
    }

    fn on_round_completed(&mut self, winner: &str) {
        debug!(winner, "round completed");
    }

    fn on_game_completed(&mut self, winner: &str) {
        info!(winner, "game completed");
    }
}

impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn on_move(&mut self, player: &str, value: u32, remaining: usize) {
        self.0.on_move(player, value, remaining);
        self.1.on_move(player, value, remaining);
    }

    fn on_round_completed(&mut self, winner: &str) {
        self.0.on_round_completed(winner);
        self.1.on_round_completed(winner);
    }

    fn on_game_completed(&mut self, winner: &str) {
        self.0.on_game_completed(winner);
        self.1.on_game_completed(winner);
    }
}
