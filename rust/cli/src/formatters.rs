//! Card and showdown formatters for terminal display.
//!
//! Cards print either in the canonical letter form (`Ah`) that the
//! `showdown` command accepts back as input, or with suit symbols (`A♥`).
//! Symbols fall back to letters on terminals that cannot render them.
//!
//! ```rust
//! use handreader_engine::cards::parse_cards;
//! use handreader_cli::formatters::{format_board, SuitStyle};
//!
//! let flop = parse_cards("As Kh Qd").unwrap();
//! assert_eq!(format_board(&flop, SuitStyle::Letters), "[As Kh Qd]");
//! ```

use std::fmt;
use std::str::FromStr;

use handreader_engine::cards::{Card, Suit};
use handreader_engine::showdown::Showdown;
use serde::{Deserialize, Serialize};

/// How suits are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitStyle {
    #[default]
    Letters,
    Symbols,
}

impl SuitStyle {
    /// The style actually used on this terminal.
    pub fn effective(self) -> SuitStyle {
        match self {
            SuitStyle::Symbols if !supports_unicode() => SuitStyle::Letters,
            other => other,
        }
    }
}

impl fmt::Display for SuitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuitStyle::Letters => write!(f, "letters"),
            SuitStyle::Symbols => write!(f, "symbols"),
        }
    }
}

impl FromStr for SuitStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "letters" => Ok(SuitStyle::Letters),
            "symbols" => Ok(SuitStyle::Symbols),
            other => Err(format!(
                "unknown suit style '{}' (expected letters or symbols)",
                other
            )),
        }
    }
}

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit, style: SuitStyle) -> char {
    match style.effective() {
        SuitStyle::Letters => suit.letter(),
        SuitStyle::Symbols => suit.symbol(),
    }
}

pub fn format_card(card: &Card, style: SuitStyle) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit, style))
}

/// Space separated cards, no brackets.
pub fn format_cards(cards: &[Card], style: SuitStyle) -> String {
    cards
        .iter()
        .map(|c| format_card(c, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a board (list of cards) as a string in bracket notation.
///
/// Returns `"[]"` when the board is empty.
pub fn format_board(cards: &[Card], style: SuitStyle) -> String {
    format!("[{}]", format_cards(cards, style))
}

/// Human-readable lines for a resolved showdown.
pub fn format_outcome(showdown: &Showdown, style: SuitStyle) -> Vec<String> {
    match showdown {
        Showdown::Winners(result) => {
            let seats: Vec<String> = result.winners.iter().map(|s| s.to_string()).collect();
            let mut lines = vec![if seats.len() == 1 {
                format!("Winner: seat {}", seats[0])
            } else {
                format!("Split pot: seats {}", seats.join(", "))
            }];
            for hand in &result.hands {
                lines.push(format!(
                    "  Seat {}: {} {}",
                    hand.seat,
                    hand.description,
                    format_board(&hand.cards, style)
                ));
            }
            lines
        }
        Showdown::NoQualifyingHand { qualifier, .. } => {
            vec![format!("No winner: {}", qualifier.failure_message())]
        }
    }
}
