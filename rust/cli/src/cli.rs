//! Command-line surface parsed by clap.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "handreader",
    version,
    about = "Read multi-variant poker showdowns: who wins, and with what"
)]
pub struct HandreaderCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a showdown from explicit holdings
    Showdown {
        /// Game id, see `handreader games`
        #[arg(long)]
        game: String,
        /// Seat holding as SEAT=CARDS, e.g. `1=Ah,Kd`; repeat per seat
        #[arg(long = "seat", value_name = "SEAT=CARDS", required = true)]
        seats: Vec<String>,
        /// Shared board cards
        #[arg(long)]
        board: Option<String>,
        /// Stud up-cards as SEAT=CARDS; repeat per seat
        #[arg(long = "up", value_name = "SEAT=CARDS")]
        up: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Deal a random table and show who wins
    Drill {
        #[arg(long)]
        game: Option<String>,
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print only the table, not the answer
        #[arg(long)]
        hide_answer: bool,
    },
    /// List supported games with their holding shapes
    Games,
    /// Time showdown resolution on random tables
    Bench {
        #[arg(long)]
        game: Option<String>,
        #[arg(long, default_value_t = 200)]
        iterations: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
