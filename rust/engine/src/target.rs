use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Point total a Drawmaha hand is trying to reach.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    FortyNine,
    Zero,
}

impl Target {
    pub fn value(self) -> u32 {
        match self {
            Target::FortyNine => 49,
            Target::Zero => 0,
        }
    }

    pub fn score(self, cards: &[Card]) -> TargetScore {
        TargetScore::from_total(self, point_total(cards))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Face value for 2 through 10, zero for court cards, one for the ace.
pub fn point_value(rank: Rank) -> u32 {
    match rank {
        Rank::Jack | Rank::Queen | Rank::King => 0,
        Rank::Ace => 1,
        r => u32::from(r.high_value()),
    }
}

pub fn point_total(cards: &[Card]) -> u32 {
    cards.iter().map(|c| point_value(c.rank)).sum()
}

/// A scored hand; the smaller distance is better.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TargetScore {
    pub target: Target,
    pub total: u32,
    pub distance: u32,
}

impl TargetScore {
    pub fn from_total(target: Target, total: u32) -> Self {
        Self {
            target,
            total,
            distance: total.abs_diff(target.value()),
        }
    }

    pub fn describe(&self) -> String {
        match self.target {
            Target::FortyNine => format!(
                "Score: {} (distance to 49: {})",
                self.total, self.distance
            ),
            Target::Zero => format!("Score: {}", self.total),
        }
    }

    /// Orders by distance only: two totals equally far from the target tie.
    pub fn compare(&self, other: &TargetScore) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}
