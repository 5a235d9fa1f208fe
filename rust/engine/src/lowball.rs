//! Lowball scoring under the two ace conventions.
//!
//! A-5 (ace low): straights and flushes do not count, so the ladder is
//! High Card < One Pair < Two Pair < Three of a Kind < Full House < Four of
//! a Kind. 2-7 (ace high): the full high-hand ladder applies, including
//! A-2-3-4-5 as a straight. In both, the *smaller* score wins.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{join_cards, Card, Rank};
use crate::hand::Category;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowRule {
    /// Ace counts 1, straights and flushes ignored.
    AceToFive,
    /// Ace counts 14, straights and flushes count against the hand.
    DeuceToSeven,
}

impl LowRule {
    pub fn value(self, rank: Rank) -> u8 {
        match self {
            LowRule::AceToFive => rank.low_value(),
            LowRule::DeuceToSeven => rank.high_value(),
        }
    }

    pub fn score(self, cards: &[Card; 5]) -> LowScore {
        match self {
            LowRule::AceToFive => score_a5(cards),
            LowRule::DeuceToSeven => score_27(cards),
        }
    }
}

impl fmt::Display for LowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowRule::AceToFive => write!(f, "A-5"),
            LowRule::DeuceToSeven => write!(f, "2-7"),
        }
    }
}

/// Score of one five-card low candidate. Smaller is better.
///
/// `tiebreak` decides ties within a category. `packed` folds the category
/// and up to five tiebreak slots into one integer; it is only a cheap
/// pre-filter and never decides a comparison on its own.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct LowScore {
    pub rule: LowRule,
    pub category: Category,
    pub tiebreak: Vec<u8>,
    pub packed: u32,
}

impl LowScore {
    fn new(rule: LowRule, category: Category, tiebreak: Vec<u8>) -> Self {
        let packed = pack(category, &tiebreak);
        Self {
            rule,
            category,
            tiebreak,
            packed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.category {
            Category::OnePair => "One Pair",
            c => c.name(),
        }
    }

    /// `true` when the pre-filter alone proves `self` is worse than `best`.
    pub fn clearly_worse_than(&self, best: &LowScore) -> bool {
        self.packed > best.packed
    }
}

impl PartialEq for LowScore {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule
            && self.category == other.category
            && self.tiebreak == other.tiebreak
    }
}

impl Ord for LowScore {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(
            self.rule, other.rule,
            "low scores from different rules are not comparable"
        );
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl PartialOrd for LowScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn pack(category: Category, tiebreak: &[u8]) -> u32 {
    let mut packed = (category as u32) << 20;
    for (i, &v) in tiebreak.iter().take(5).enumerate() {
        packed |= u32::from(v & 0xF) << (16 - 4 * i);
    }
    packed
}

/// `(count, value)` groups, count then value descending.
fn value_groups(values: &[u8; 5]) -> Vec<(u8, u8)> {
    let mut counts = [0u8; 15];
    for &v in values {
        counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (1..=14u8)
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn multiples_category(groups: &[(u8, u8)]) -> Category {
    match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    }
}

fn values_for(rule: LowRule, cards: &[Card; 5]) -> [u8; 5] {
    let mut values = [0u8; 5];
    for (slot, card) in values.iter_mut().zip(cards.iter()) {
        *slot = rule.value(card.rank);
    }
    values
}

/// Scores a hand under A-5 rules.
///
/// ```
/// use handreader_engine::cards::parse_cards;
/// use handreader_engine::hand::Category;
/// use handreader_engine::lowball::score_a5;
///
/// let cards: [_; 5] = parse_cards("Ah 2c 3d 4s 5h").unwrap().try_into().unwrap();
/// let score = score_a5(&cards);
/// assert_eq!(score.category, Category::HighCard);
/// assert_eq!(score.tiebreak, vec![5, 4, 3, 2, 1]);
/// ```
pub fn score_a5(cards: &[Card; 5]) -> LowScore {
    let groups = value_groups(&values_for(LowRule::AceToFive, cards));
    let category = multiples_category(&groups);
    let tiebreak = groups.iter().map(|&(_, v)| v).collect();
    LowScore::new(LowRule::AceToFive, category, tiebreak)
}

/// Scores a hand under 2-7 rules.
pub fn score_27(cards: &[Card; 5]) -> LowScore {
    let values = values_for(LowRule::DeuceToSeven, cards);
    let groups = value_groups(&values);
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut sorted = values;
    sorted.sort_unstable();
    let straight = groups.len() == 5 && (sorted[4] - sorted[0] == 4 || sorted == [2, 3, 4, 5, 14]);
    let top = sorted[4];

    let category = match (straight, flush) {
        (true, true) if sorted == [10, 11, 12, 13, 14] => Category::RoyalFlush,
        (true, true) => Category::StraightFlush,
        (true, false) => Category::Straight,
        (false, true) => Category::Flush,
        (false, false) => multiples_category(&groups),
    };
    let tiebreak = match category {
        Category::Straight | Category::StraightFlush | Category::RoyalFlush => vec![top],
        _ => groups.iter().map(|&(_, v)| v).collect(),
    };
    LowScore::new(LowRule::DeuceToSeven, category, tiebreak)
}

/// Cards ordered the way a low is read: highest value under `rule` first.
pub fn display_order(cards: &[Card], rule: LowRule) -> Vec<Card> {
    let mut ordered = cards.to_vec();
    ordered.sort_by(|a, b| {
        rule.value(b.rank)
            .cmp(&rule.value(a.rank))
            .then_with(|| b.suit.cmp(&a.suit))
    });
    ordered
}

/// `"{label}: {cards}"`, e.g. `"One Pair: 9s 9d 7h 4c 2d"`.
pub fn describe(score: &LowScore, cards: &[Card; 5]) -> String {
    format!(
        "{}: {}",
        score.label(),
        join_cards(&display_order(cards, score.rule))
    )
}
