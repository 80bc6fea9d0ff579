//! # Play Command
//!
//! Plays a single game and narrates it on the output stream: every move,
//! every round winner and the final winner, followed by a summary line.

use std::io::Write;

use tracing::info;

use super::{build_game, load_config, warn_undistributed};
use crate::config::Overrides;
use crate::error::CliError;
use crate::ui::ConsoleObserver;

/// Handle the play command.
///
/// # Arguments
///
/// * `overrides` - Game settings given on the command line
/// * `out` - Output stream for the game narration and summary
/// * `err` - Error stream for warnings and errors
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration, `CliError::Engine`
/// when the game cannot be set up, and `CliError::Io` on write failures.
pub fn handle_play_command(
    overrides: &Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = load_config(overrides, err)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "play: players={} cards={} max_value={} seed={}",
        config.players.join(","),
        config.total_cards,
        config.max_card_value,
        seed
    )?;

    let (outcome, undistributed) = {
        let mut game = build_game(&config, seed, ConsoleObserver::new(&mut *out))?;
        let undistributed = game.undistributed().count();
        (game.play()?, undistributed)
    };
    warn_undistributed(err, undistributed)?;
    info!(seed, winner = %outcome.winner_name, "play finished");

    writeln!(
        out,
        "Winner: {} after {} rounds ({})",
        outcome.winner_name, outcome.rounds, outcome.reason
    )?;
    if !outcome.unclaimed.is_empty() {
        writeln!(out, "Unclaimed: {} card(s) left on the table", outcome.unclaimed.len())?;
    }
    Ok(())
}
