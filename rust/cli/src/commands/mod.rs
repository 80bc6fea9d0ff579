//! Command handler modules for the cardwar CLI.
//!
//! Each subcommand lives in its own module and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum
//!
//! The helpers below are shared by every command that runs a game: they
//! resolve the layered configuration and assemble a [`Game`] from it.

pub mod cfg;
pub mod deal;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;

use std::io::Write;

use cardwar_engine::deck::Deck;
use cardwar_engine::game::{Game, GameBuilder};
use cardwar_engine::observer::GameObserver;
use cardwar_engine::player::Player;
use cardwar_engine::rng::SeededRandom;
use cardwar_engine::shuffle::FisherYates;

use crate::config::{self, Config, Overrides};
use crate::error::CliError;
use crate::ui;

/// Resolves the configuration, reporting failures on `err`.
pub(crate) fn load_config(overrides: &Overrides, err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load_with_overrides(overrides) {
        Ok(resolved) => Ok(resolved.config),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(e.to_string()))
        }
    }
}

/// Builds a dealt, ready-to-play game with one [`Player`] per configured name.
pub(crate) fn build_game<'a>(
    config: &Config,
    seed: u64,
    observer: impl GameObserver + 'a,
) -> Result<Game<'a, Player>, CliError> {
    let players = config.players.iter().map(Player::new).collect();
    let game = GameBuilder::new()
        .observer(observer)
        .deck(Deck::new())
        .shuffler(FisherYates)
        .players(players)
        .random(SeededRandom::new(seed))
        .cards(config.total_cards, config.max_card_value)
        .max_rounds(config.max_rounds)
        .build()?;
    Ok(game)
}

/// Warns when the deck does not split evenly between the players.
pub(crate) fn warn_undistributed(err: &mut dyn Write, undistributed: usize) -> Result<(), CliError> {
    if undistributed > 0 {
        ui::display_warning(
            err,
            &format!(
                "{} card(s) could not be dealt evenly and stay out of play",
                undistributed
            ),
        )?;
    }
    Ok(())
}
