use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::hand::{CanonicalHand, Category};

/// Minimum hand a seat must hold to take part in a qualified showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// Five distinct ranks, all eight or lower with the ace low.
    EightOrBetterLow,
    /// A pair of nines or better.
    NinesOrBetterHigh,
}

impl Qualifier {
    /// Message shown when nobody at the table qualifies.
    pub fn failure_message(self) -> &'static str {
        match self {
            Qualifier::EightOrBetterLow => "No qualifying low",
            Qualifier::NinesOrBetterHigh => "No qualifying high",
        }
    }

    /// Whether a low candidate passes. Only a low gate accepts anything.
    pub fn accepts_low(self, cards: &[Card; 5]) -> bool {
        match self {
            Qualifier::EightOrBetterLow => eight_or_better(cards),
            Qualifier::NinesOrBetterHigh => false,
        }
    }

    /// Whether a high candidate passes. Only a high gate accepts anything.
    pub fn accepts_high(self, hand: &CanonicalHand) -> bool {
        match self {
            Qualifier::NinesOrBetterHigh => nines_or_better(hand),
            Qualifier::EightOrBetterLow => false,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::EightOrBetterLow => write!(f, "8-or-better low"),
            Qualifier::NinesOrBetterHigh => write!(f, "9s-or-better high"),
        }
    }
}

pub fn eight_or_better(cards: &[Card; 5]) -> bool {
    let mut seen = 0u16;
    for card in cards {
        let v = card.rank.low_value();
        if v > 8 || seen & (1 << v) != 0 {
            return false;
        }
        seen |= 1 << v;
    }
    true
}

pub fn nines_or_better(hand: &CanonicalHand) -> bool {
    match hand.category() {
        Category::HighCard => false,
        // the pair rank leads the kickers
        Category::OnePair => hand.strength.kickers[0] >= Rank::Nine.high_value(),
        _ => true,
    }
}
