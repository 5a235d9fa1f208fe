//! Showdown command handler.
//!
//! Resolves a concrete showdown typed on the command line:
//!
//! ```text
//! handreader showdown --game holdem --seat 1=Ah,Ad --seat 2=Kc,Kd --board "2s 7h 9c Jd 3c"
//! ```
//!
//! Seats are given as `SEAT=CARDS`; stud up-cards use the same form with
//! `--up`. With `--json` the engine's result is printed as pretty JSON.

use std::collections::BTreeSet;
use std::io::Write;

use handreader_engine::cards::{parse_cards, Card};
use handreader_engine::game::Game;
use handreader_engine::showdown::{resolve, Seat, Table};

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_board, format_outcome};

/// Arguments of one `showdown` invocation.
#[derive(Debug, Clone, Copy)]
pub struct ShowdownArgs<'a> {
    pub game: &'a str,
    pub seats: &'a [String],
    pub board: Option<&'a str>,
    pub up: &'a [String],
    pub json: bool,
}

/// Handle the showdown command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for malformed `SEAT=CARDS` specs or a seat
/// given twice, and `CliError::Engine` for unknown games, bad card tokens and
/// every table the engine rejects.
pub fn handle_showdown_command(
    args: ShowdownArgs<'_>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game: Game = args.game.parse()?;
    let table = build_table(&args)?;
    let showdown = resolve(game, &table)?;

    if args.json {
        let json_str = serde_json::to_string_pretty(&showdown).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    writeln!(out, "Game: {} ({})", game.name(), game)?;
    if !table.board.is_empty() {
        writeln!(out, "Board: {}", format_board(&table.board, cfg.suits))?;
    }
    for line in format_outcome(&showdown, cfg.suits) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn build_table(args: &ShowdownArgs<'_>) -> Result<Table, CliError> {
    let mut table = Table::new();
    let mut seen = BTreeSet::new();
    for spec in args.seats {
        let (seat, cards) = parse_seat_spec(spec)?;
        if !seen.insert(seat) {
            return Err(format!("seat {} given more than once", seat).into());
        }
        table = table.with_seat(seat, cards);
    }
    let mut seen = BTreeSet::new();
    for spec in args.up {
        let (seat, cards) = parse_seat_spec(spec)?;
        if !seen.insert(seat) {
            return Err(format!("up cards for seat {} given more than once", seat).into());
        }
        table = table.with_up_cards(seat, cards);
    }
    if let Some(board) = args.board {
        table = table.with_board(parse_cards(board)?);
    }
    Ok(table)
}

/// Parses `SEAT=CARDS`, e.g. `3=Ah,Kd` or `3=Ah Kd`.
pub fn parse_seat_spec(spec: &str) -> Result<(Seat, Vec<Card>), CliError> {
    let (seat, cards) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected SEAT=CARDS, got '{}'", spec))?;
    let seat: Seat = seat
        .trim()
        .parse()
        .map_err(|_| format!("invalid seat number '{}'", seat.trim()))?;
    Ok((seat, parse_cards(cards)?))
}
