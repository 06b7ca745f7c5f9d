//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays the resolved configuration
//! with the source of each value (default, configuration file, or
//! environment).

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it as
/// formatted JSON on the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails and
/// `CliError::Io` if writing to the output stream fails.
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
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "deck_count": {
            "value": config.deck_count,
            "source": sources.deck_count,
        },
        "window": {
            "value": config.window,
            "source": sources.window,
        },
        "ai_edge": {
            "value": config.ai_edge,
            "source": sources.ai_edge,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
