//! Simulation command handler.
//!
//! Plays many games back to back, game `i` seeded with `seed + i`, and
//! reports how often each player won. With `--output`, every game is also
//! written as one [`GameRecord`] JSON line.
//!
//! # Examples
//!
//! ```no_run
//! use cardwar_cli::commands::sim::handle_sim_command;
//! use cardwar_cli::config::Overrides;
//! use std::io;
//!
//! let overrides = Overrides { seed: Some(42), ..Overrides::default() };
//! handle_sim_command(1000, None, &overrides, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;
use std::path::Path;

use cardwar_engine::logger::{GameLogger, GameRecord};
use cardwar_engine::observer::{EventCounter, TracingObserver};
use tracing::info;

use super::{build_game, load_config, warn_undistributed};
use crate::config::Overrides;
use crate::error::CliError;
use crate::ui;

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `output` - Optional JSONL file receiving one record per game
/// * `overrides` - Game settings given on the command line
/// * `out` - Output stream for the summary
/// * `err` - Error stream for warnings and errors
pub fn handle_sim_command(
    games: u64,
    output: Option<&Path>,
    overrides: &Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let config = load_config(overrides, err)?;
    let base_seed = config.seed.unwrap_or_else(rand::random);

    let mut logger = match output {
        Some(path) => match GameLogger::create(path) {
            Ok(logger) => Some(logger),
            Err(e) => {
                ui::write_error(err, &format!("Failed to create {}", path.display()))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let mut wins = vec![0u64; config.players.len()];
    let mut total_rounds = 0u64;

    for i in 0..games {
        let seed = base_seed.wrapping_add(i);
        let events = EventCounter::new();
        let mut game = build_game(&config, seed, (events.clone(), TracingObserver))?;
        if i == 0 {
            warn_undistributed(err, game.undistributed().count())?;
        }
        let total_cards = game.total_cards();
        let outcome = game.play()?;

        wins[outcome.winner] += 1;
        total_rounds += outcome.rounds;

        if let Some(logger) = logger.as_mut() {
            let record = GameRecord::from_outcome(
                logger.next_id(),
                Some(seed),
                config.players.clone(),
                total_cards,
                config.max_card_value,
                &outcome,
                events.count(),
            );
            if let Err(e) = logger.write(&record) {
                ui::write_error(err, "Failed to write simulation output")?;
                return Err(CliError::Io(e));
            }
        }
    }

    info!(games, base_seed, "simulation finished");

    writeln!(out, "Simulated: {} games (seed {})", games, base_seed)?;
    for (name, count) in config.players.iter().zip(&wins) {
        writeln!(out, "Player {}: {} wins", name, count)?;
    }
    writeln!(
        out,
        "Average rounds: {:.1}",
        total_rounds as f64 / games as f64
    )?;
    Ok(())
}
