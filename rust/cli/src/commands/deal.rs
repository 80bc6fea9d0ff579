//! Deal command handler.
//!
//! Sets a game up exactly as `play` would, then prints each player's
//! starting hand (top card first) and the cards left out of the deal.

use std::io::Write;

use cardwar_engine::cards::Card;
use cardwar_engine::observer::TracingObserver;
use cardwar_engine::player::Participant;

use super::{build_game, load_config};
use crate::config::Overrides;
use crate::error::CliError;

fn join_cards<'c>(cards: impl Iterator<Item = &'c Card>) -> String {
    cards
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Handle the deal command.
///
/// Supports the same seeding as `play`, so a dealt layout can be inspected
/// before replaying it.
pub fn handle_deal_command(
    overrides: &Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let config = load_config(overrides, err)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let game = build_game(&config, seed, TracingObserver)?;

    writeln!(out, "Seed: {}", seed)?;
    for player in game.players() {
        writeln!(
            out,
            "Player {} ({} cards): {}",
            player.name(),
            player.hand_count(),
            join_cards(player.hand().cards())
        )?;
    }
    let rest = game.undistributed();
    if rest.is_empty() {
        writeln!(out, "Undealt: none")?;
    } else {
        writeln!(out, "Undealt: {}", join_cards(rest.cards()))?;
    }
    Ok(())
}
