//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value next to its source:
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "num_decks": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Loads the configuration with source tracking and prints it as JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if the config file or an env override is
/// invalid, and `CliError::Io` if writing the output fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "num_decks": {
            "value": config.num_decks,
            "source": sources.num_decks,
        },
        "dealer": {
            "value": config.dealer.as_str(),
            "source": sources.dealer,
        },
        "wager": {
            "value": config.wager,
            "source": sources.wager,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
