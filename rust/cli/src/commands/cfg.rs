//! Configuration command handler.
//!
//! Displays the resolved configuration, each value paired with the layer it
//! came from (`default`, `file`, `env` or `cli`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "value": ["1", "2"],
//!     "source": "default"
//!   },
//!   "total_cards": {
//!     "value": 40,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "total_cards": {
            "value": config.total_cards,
            "source": sources.total_cards,
        },
        "max_card_value": {
            "value": config.max_card_value,
            "source": sources.max_card_value,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "max_rounds": {
            "value": config.max_rounds,
            "source": sources.max_rounds,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
