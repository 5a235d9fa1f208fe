//! Games command handler: the catalogue with holding shapes.

use std::io::Write;

use handreader_engine::game::{describe_range, Game};

use crate::error::CliError;

pub fn handle_games_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "{:<14} {:<24} {:<5} {:<5} {:<3} SCORING",
        "ID", "NAME", "HOLE", "BOARD", "UP"
    )?;
    for game in Game::ALL {
        let shape = game.shape();
        writeln!(
            out,
            "{:<14} {:<24} {:<5} {:<5} {:<3} {}",
            game.to_string(),
            game.name(),
            describe_range(&shape.hole),
            describe_range(&shape.board),
            if shape.up_cards { "yes" } else { "no" },
            game.scoring_summary()
        )?;
    }
    Ok(())
}
