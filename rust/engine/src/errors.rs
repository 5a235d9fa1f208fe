use std::fmt;

use thiserror::Error;

use crate::cards::Card;
use crate::showdown::Seat;

/// Identifies which part of a table a size check failed on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HoldingPart {
    /// The seat mapping as a whole (no seats at all).
    Table,
    /// The shared board.
    Board,
    /// A seat's hole cards.
    Hole(Seat),
    /// A seat's separately tracked stud up-cards.
    UpCards(Seat),
    /// A seat's combined pool (hole + up-cards + board).
    Pool(Seat),
}

impl fmt::Display for HoldingPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoldingPart::Table => write!(f, "table"),
            HoldingPart::Board => write!(f, "board"),
            HoldingPart::Hole(seat) => write!(f, "seat {} hole cards", seat),
            HoldingPart::UpCards(seat) => write!(f, "seat {} up cards", seat),
            HoldingPart::Pool(seat) => write!(f, "seat {} card pool", seat),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid card token: '{token}'")]
    InvalidCardToken { token: String },
    #[error("Invalid holding size for {part}: expected {expected}, got {actual}")]
    InvalidHoldingSize {
        part: HoldingPart,
        expected: String,
        actual: usize,
    },
    #[error("Card {card} appears more than once on the table")]
    DuplicateCard { card: Card },
    #[error("Up cards given for seat {seat}, which holds no cards")]
    UnknownSeat { seat: Seat },
    #[error("Unknown game '{id}'")]
    UnknownGame { id: String },
    #[error("Deck exhausted: {needed} cards needed, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
}
