//! Command handler modules for the handreader CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed in, never stdout directly
//! - Errors propagated via the `CliError` enum

pub mod bench;
pub mod cfg;
pub mod drill;
pub mod games;
pub mod showdown;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use drill::handle_drill_command;
pub use games::handle_games_command;
pub use showdown::handle_showdown_command;
