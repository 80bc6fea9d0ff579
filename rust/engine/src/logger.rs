use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::game::{EndReason, GameOutcome};

/// Summary of one finished game, serialized as a JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed of the randomness source, when known
    pub seed: Option<u64>,
    /// Player names in session order
    pub players: Vec<String>,
    pub total_cards: usize,
    pub max_card_value: u32,
    pub rounds: u64,
    pub winner: String,
    pub reason: EndReason,
    /// Number of events the observer received
    pub events: usize,
    /// Timestamp when the game was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn from_outcome(
        game_id: String,
        seed: Option<u64>,
        players: Vec<String>,
        total_cards: usize,
        max_card_value: u32,
        outcome: &GameOutcome,
        events: usize,
    ) -> Self {
        Self {
            game_id,
            seed,
            players,
            total_cards,
            max_card_value,
            rounds: outcome.rounds,
            winner: outcome.winner_name.clone(),
            reason: outcome.reason,
            events,
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends one [`GameRecord`] per line to a JSONL file.
///
/// Game ids share the calendar day the log was opened and count up from 1,
/// so a `sim` run's records sort in play order.
pub struct GameLogger {
    out: Option<BufWriter<File>>,
    day: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for writing, creating missing parent directories.
    /// An existing file is truncated.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => create_dir_all(dir)?,
            _ => {}
        }
        Ok(Self {
            out: Some(BufWriter::new(File::create(path)?)),
            day: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids for `day`; writes are dropped.
    pub fn with_seq_for_test(day: &str) -> Self {
        Self {
            out: None,
            day: day.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.day, self.seq)
    }

    /// Writes `record` as a single line, stamping `ts` with the current UTC
    /// time when the record has none. Flushed per game so a stopped `sim`
    /// keeps every finished game.
    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };
        let ts = record
            .ts
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        let stamped = GameRecord {
            ts: Some(ts),
            ..record.clone()
        };
        serde_json::to_writer(&mut *out, &stamped).map_err(std::io::Error::other)?;
        out.write_all(b"\n")?;
        out.flush()
    }
}
