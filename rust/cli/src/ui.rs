//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and the console
//! notification sink that narrates a game.

use std::io::Write;

use cardwar_engine::observer::GameObserver;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prints every game event as a line of text.
///
/// Sinks must not fail, so write errors are dropped.
pub struct ConsoleObserver<'a> {
    out: &'a mut dyn Write,
}

impl<'a> ConsoleObserver<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }
}

impl GameObserver for ConsoleObserver<'_> {
    fn on_move(&mut self, player: &str, value: u32, remaining: usize) {
        let _ = writeln!(self.out, "Player {}({} cards): {}", player, remaining, value);
    }

    fn on_round_completed(&mut self, winner: &str) {
        let _ = writeln!(self.out, "Player {} wins this round", winner);
    }

    fn on_game_completed(&mut self, winner: &str) {
        let _ = writeln!(self.out, "Player {} wins the game !", winner);
    }
}
