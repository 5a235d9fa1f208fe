//! Bench command handler.
//!
//! Deals `iterations` random tables for one game from a seeded deck and
//! times how long resolving them takes. Dealing is included in the timing.

use std::io::Write;

use handreader_engine::deck::{deal_table, Deck};
use handreader_engine::game::Game;
use handreader_engine::showdown::resolve;

use crate::config::{validate_seats, Config};
use crate::error::CliError;

/// Handle the bench command.
///
/// The seed defaults to the configured one, then to 1, so repeated runs time
/// identical work.
pub fn handle_bench_command(
    game: Option<&str>,
    iterations: u32,
    seed: Option<u64>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game: Game = match game {
        Some(id) => id.parse()?,
        None => cfg.game,
    };
    if iterations == 0 {
        return Err(CliError::InvalidInput("iterations must be at least 1".into()));
    }
    validate_seats(cfg.seats)?;

    let start = std::time::Instant::now();
    let mut deck = Deck::new_with_seed(seed.or(cfg.seed).unwrap_or(1));
    let mut split = 0u32;
    for _ in 0..iterations {
        let table = deal_table(&mut deck, game, cfg.seats)?;
        if resolve(game, &table)?.winners().len() > 1 {
            split += 1;
        }
    }
    let dur = start.elapsed();
    writeln!(
        out,
        "Benchmark: {} iters of {} ({} seats) in {:?}, {} split",
        iterations, game, cfg.seats, dur, split
    )?;
    Ok(())
}
