//! # handreader CLI library
//!
//! Command-line front end for the `handreader_engine` showdown engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, resolves configuration and dispatches to a
//! command handler. Output and error streams are injected so the whole CLI
//! can be driven in-process.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = handreader_cli::run(
//!     ["handreader", "showdown", "--game", "draw-27", "--seat", "1=7h 5c 4d 3s 2h",
//!      "--seat", "2=8h 6c 4c 3d 2d"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Winner: seat 1"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `showdown`: resolve a showdown from explicit holdings
//! - `drill`: deal a random table and show the answer
//! - `games`: list supported games and their holding shapes
//! - `bench`: time showdown resolution
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, HandreaderCli};
use commands::showdown::ShowdownArgs;
use commands::{
    handle_bench_command, handle_cfg_command, handle_drill_command, handle_games_command,
    handle_showdown_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["showdown", "drill", "games", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. Logging is not initialised here; the binary does
/// that once in `main`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandreaderCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Games => handle_games_command(out),
        Commands::Showdown {
            game,
            seats,
            board,
            up,
            json,
        } => load_config().and_then(|cfg| {
            let args = ShowdownArgs {
                game: &game,
                seats: &seats,
                board: board.as_deref(),
                up: &up,
                json,
            };
            handle_showdown_command(args, &cfg, out)
        }),
        Commands::Drill {
            game,
            seats,
            seed,
            hide_answer,
        } => load_config().and_then(|cfg| {
            handle_drill_command(game.as_deref(), seats, seed, hide_answer, &cfg, out)
        }),
        Commands::Bench {
            game,
            iterations,
            seed,
        } => load_config().and_then(|cfg| {
            handle_bench_command(game.as_deref(), iterations, seed, &cfg, out)
        }),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn load_config() -> Result<config::Config, CliError> {
    Ok(config::load()?)
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "handreader: poker showdown reader")?;
    writeln!(err, "Usage: handreader <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: handreader --help")
}
