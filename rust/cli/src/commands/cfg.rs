//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, file or environment):
//!
//! ```json
//! {
//!   "game": {
//!     "value": "holdem",
//!     "source": "default"
//!   },
//!   "seats": {
//!     "value": 2,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = render(&config, &sources);
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn render(config: &config::Config, sources: &config::ConfigSources) -> serde_json::Value {
    serde_json::json!({
        "game": {
            "value": config.game,
            "source": sources.game,
        },
        "seats": {
            "value": config.seats,
            "source": sources.seats,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "suits": {
            "value": config.suits,
            "source": sources.suits,
        }
    })
}
