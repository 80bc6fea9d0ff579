//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "cardwar",
    version,
    about = "Card war game engine: play, simulate and inspect games"
)]
pub struct CardwarCli {
    /// Log engine progress to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game and narrate every move
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Play many games and summarize the results
    Sim {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u64,
        /// Write one JSON record per game to this file
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Show the starting hands without playing
    Deal {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Game settings that may override the configuration file and environment.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Seed for every shuffle in the game
    #[arg(long)]
    pub seed: Option<u64>,
    /// Comma-separated player names, in play order
    #[arg(long, value_delimiter = ',')]
    pub players: Option<Vec<String>>,
    /// Number of cards in the master deck
    #[arg(long)]
    pub cards: Option<usize>,
    /// Highest card value; values cycle from 1 up to it
    #[arg(long = "max-value")]
    pub max_value: Option<u32>,
    /// Stop after this many rounds and award the game to the leader
    #[arg(long = "max-rounds")]
    pub max_rounds: Option<u64>,
}

impl From<&GameArgs> for Overrides {
    fn from(args: &GameArgs) -> Self {
        Overrides {
            players: args.players.clone(),
            total_cards: args.cards,
            max_card_value: args.max_value,
            seed: args.seed,
            max_rounds: args.max_rounds,
        }
    }
}
