use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EvalError;
use crate::lowball::LowRule;
use crate::qualifier::Qualifier;
use crate::target::Target;

/// How a five-card candidate is scored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Scoring {
    High,
    HighNinesOrBetter,
    Lowball(LowRule),
    LowEightOrBetter,
}

impl Scoring {
    pub fn qualifier(self) -> Option<Qualifier> {
        match self {
            Scoring::HighNinesOrBetter => Some(Qualifier::NinesOrBetterHigh),
            Scoring::LowEightOrBetter => Some(Qualifier::EightOrBetterLow),
            Scoring::High | Scoring::Lowball(_) => None,
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Scoring::High => "high",
            Scoring::HighNinesOrBetter => "high, 9s or better",
            Scoring::Lowball(LowRule::AceToFive) => "A-5 low",
            Scoring::Lowball(LowRule::DeuceToSeven) => "2-7 low",
            Scoring::LowEightOrBetter => "A-5 low, 8 or better",
        }
    }
}

/// Every supported game. Each variant fixes how holdings are combined
/// into candidates; the payload fixes how candidates are scored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Game {
    /// Best five of two hole cards plus the board.
    Holdem,
    /// Exactly two hole cards plus exactly three board cards.
    Omaha(Scoring),
    /// Five hole cards, optionally one shared card.
    Draw(Scoring),
    /// Hole cards plus exposed up-cards, best five.
    Stud(Scoring),
    /// Up to four cards of distinct rank and suit.
    Badugi(LowRule),
    /// Point total of five hole cards against a target.
    Drawmaha(Target),
}

/// Allowed card counts for one seat and the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HoldingShape {
    pub hole: RangeInclusive<usize>,
    pub board: RangeInclusive<usize>,
    /// Whether seats may carry separately tracked up-cards.
    pub up_cards: bool,
    /// Hole + up-cards + board.
    pub pool: RangeInclusive<usize>,
}

impl HoldingShape {
    fn new(
        hole: RangeInclusive<usize>,
        board: RangeInclusive<usize>,
        up_cards: bool,
        pool: RangeInclusive<usize>,
    ) -> Self {
        Self {
            hole,
            board,
            up_cards,
            pool,
        }
    }
}

/// Renders a range as `"5"` or `"3-5"`.
pub fn describe_range(range: &RangeInclusive<usize>) -> String {
    if range.start() == range.end() {
        range.start().to_string()
    } else {
        format!("{}-{}", range.start(), range.end())
    }
}

impl Game {
    pub const ALL: [Game; 16] = [
        Game::Holdem,
        Game::Omaha(Scoring::High),
        Game::Omaha(Scoring::LowEightOrBetter),
        Game::Draw(Scoring::High),
        Game::Draw(Scoring::Lowball(LowRule::AceToFive)),
        Game::Draw(Scoring::Lowball(LowRule::DeuceToSeven)),
        Game::Draw(Scoring::LowEightOrBetter),
        Game::Draw(Scoring::HighNinesOrBetter),
        Game::Stud(Scoring::High),
        Game::Stud(Scoring::Lowball(LowRule::AceToFive)),
        Game::Stud(Scoring::LowEightOrBetter),
        Game::Stud(Scoring::Lowball(LowRule::DeuceToSeven)),
        Game::Badugi(LowRule::AceToFive),
        Game::Badugi(LowRule::DeuceToSeven),
        Game::Drawmaha(Target::FortyNine),
        Game::Drawmaha(Target::Zero),
    ];

    /// Stable identifier used on the command line and in serialized output.
    /// Combinations outside [`Game::ALL`] have no id and return `None`.
    pub fn id(self) -> Option<&'static str> {
        use LowRule::*;
        use Scoring::*;
        let id = match self {
            Game::Holdem => "holdem",
            Game::Omaha(High) => "omaha-hi",
            Game::Omaha(LowEightOrBetter) => "omaha-lo8",
            Game::Draw(High) => "draw-hi",
            Game::Draw(Lowball(AceToFive)) => "draw-a5",
            Game::Draw(Lowball(DeuceToSeven)) => "draw-27",
            Game::Draw(LowEightOrBetter) => "draw-lo8",
            Game::Draw(HighNinesOrBetter) => "draw-hi9",
            Game::Stud(High) => "stud-hi",
            Game::Stud(Lowball(AceToFive)) => "razz",
            Game::Stud(LowEightOrBetter) => "stud-lo8",
            Game::Stud(Lowball(DeuceToSeven)) => "stud-27",
            Game::Badugi(AceToFive) => "badugi-a5",
            Game::Badugi(DeuceToSeven) => "badugi-27",
            Game::Drawmaha(Target::FortyNine) => "drawmaha-49",
            Game::Drawmaha(Target::Zero) => "drawmaha-zero",
            _ => return None,
        };
        Some(id)
    }

    pub fn name(self) -> &'static str {
        use LowRule::*;
        use Scoring::*;
        match self {
            Game::Holdem => "Texas Hold'em",
            Game::Omaha(LowEightOrBetter) => "Omaha Hi/Lo (low half)",
            Game::Omaha(High) => "Omaha",
            Game::Omaha(Lowball(AceToFive)) => "A-5 Omaha Low",
            Game::Omaha(Lowball(DeuceToSeven)) => "2-7 Omaha Low",
            Game::Omaha(HighNinesOrBetter) => "Omaha (9s-or-better high)",
            Game::Draw(High) => "Five Card Draw",
            Game::Draw(Lowball(AceToFive)) => "A-5 Lowball Draw",
            Game::Draw(Lowball(DeuceToSeven)) => "2-7 Lowball Draw",
            Game::Draw(LowEightOrBetter) => "Ari (low half)",
            Game::Draw(HighNinesOrBetter) => "Ari (high half)",
            Game::Stud(High) => "Seven Card Stud",
            Game::Stud(Lowball(AceToFive)) => "Razz",
            Game::Stud(LowEightOrBetter) => "Stud Hi/Lo (low half)",
            Game::Stud(Lowball(DeuceToSeven)) => "2-7 Stud",
            Game::Stud(HighNinesOrBetter) => "Seven Card Stud (9s-or-better high)",
            Game::Badugi(AceToFive) => "Badugi",
            Game::Badugi(DeuceToSeven) => "2-7 Badugi",
            Game::Drawmaha(Target::FortyNine) => "Drawmaha 49",
            Game::Drawmaha(Target::Zero) => "Drawmaha Zero",
        }
    }

    pub fn shape(self) -> HoldingShape {
        match self {
            Game::Holdem => HoldingShape::new(2..=2, 3..=5, false, 5..=7),
            Game::Omaha(_) => HoldingShape::new(4..=6, 3..=5, false, 7..=11),
            Game::Draw(_) => HoldingShape::new(5..=5, 0..=1, false, 5..=6),
            // at least the two down cards of a stud deal
            Game::Stud(_) => HoldingShape::new(2..=7, 0..=1, true, 5..=7),
            Game::Badugi(_) => HoldingShape::new(1..=7, 0..=0, true, 4..=7),
            Game::Drawmaha(_) => HoldingShape::new(5..=5, 0..=0, false, 5..=5),
        }
    }

    pub fn qualifier(self) -> Option<Qualifier> {
        match self {
            Game::Omaha(s) | Game::Draw(s) | Game::Stud(s) => s.qualifier(),
            Game::Holdem | Game::Badugi(_) | Game::Drawmaha(_) => None,
        }
    }

    /// One-line scoring summary for listings.
    pub fn scoring_summary(self) -> String {
        match self {
            Game::Holdem => "high, best five of seven".to_string(),
            Game::Omaha(s) => format!("{}, two hole + three board", s.summary()),
            Game::Draw(s) | Game::Stud(s) => format!("{}, best five", s.summary()),
            Game::Badugi(rule) => format!("badugi, {} ace", ace_side(rule)),
            Game::Drawmaha(t) => format!("closest to {}", t),
        }
    }
}

fn ace_side(rule: LowRule) -> &'static str {
    match rule {
        LowRule::AceToFive => "low",
        LowRule::DeuceToSeven => "high",
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id() {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for Game {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Game::ALL
            .iter()
            .copied()
            .find(|g| g.id() == Some(wanted.as_str()))
            .ok_or_else(|| EvalError::UnknownGame { id: s.to_string() })
    }
}

impl From<Game> for String {
    fn from(game: Game) -> Self {
        game.to_string()
    }
}

impl TryFrom<String> for Game {
    type Error = EvalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
