//! Drill command handler.
//!
//! Deals a random table for a game and prints every seat's cards followed by
//! the answer, so a player can practise reading the showdown. The seed is
//! always printed; rerunning with it reproduces the same table.

use std::io::Write;

use handreader_engine::deck::{deal_table, Deck};
use handreader_engine::game::Game;
use handreader_engine::showdown::resolve;
use tracing::debug;

use crate::config::{validate_seats, Config};
use crate::error::CliError;
use crate::formatters::{format_board, format_outcome};
use crate::ui;

/// Handle the drill command.
///
/// `game`, `seats` and `seed` fall back to the configuration when absent; a
/// missing seed is drawn at random.
pub fn handle_drill_command(
    game: Option<&str>,
    seats: Option<usize>,
    seed: Option<u64>,
    hide_answer: bool,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game: Game = match game {
        Some(id) => id.parse()?,
        None => cfg.game,
    };
    let seats = seats.unwrap_or(cfg.seats);
    validate_seats(seats)?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut deck = Deck::new_with_seed(seed);
    let table = deal_table(&mut deck, game, seats)?;
    debug!(game = %game, seats, seed, "drill table dealt");

    writeln!(
        out,
        "Drill: {} ({}), {} seats, seed {}",
        game.name(),
        game,
        seats,
        seed
    )?;
    if !table.board.is_empty() {
        writeln!(out, "Board: {}", format_board(&table.board, cfg.suits))?;
    }
    for seat in table.seats() {
        let hole = table.holdings.get(&seat).map(Vec::as_slice).unwrap_or(&[]);
        match table.up_cards.get(&seat) {
            Some(up) => writeln!(
                out,
                "Seat {}: {} up {}",
                seat,
                format_board(hole, cfg.suits),
                format_board(up, cfg.suits)
            )?,
            None => writeln!(out, "Seat {}: {}", seat, format_board(hole, cfg.suits))?,
        }
    }
    writeln!(out)?;

    if hide_answer {
        writeln!(
            out,
            "Answer hidden. Rerun with --seed {} to reveal it.",
            seed
        )?;
        return Ok(());
    }

    let showdown = resolve(game, &table)?;
    ui::section_header(out, "Answer")?;
    for line in format_outcome(&showdown, cfg.suits) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
