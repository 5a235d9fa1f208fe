//! Badugi hand selection.
//!
//! A Badugi hand is the largest set of up to four cards with pairwise
//! distinct ranks and suits. More cards always beat fewer; equal counts are
//! read from the highest card down, lower winning.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{join_cards, Card};
use crate::combos::combinations;
use crate::lowball::LowRule;

/// A selected Badugi hand. Ordered so that the better hand is `Less`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct BadugiHand {
    pub rule: LowRule,
    /// Selected cards, lowest value first.
    pub cards: Vec<Card>,
    /// Rule values of the selected cards, highest first.
    pub ranks: Vec<u8>,
}

impl BadugiHand {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// `"Badugi: ..."` for four cards, otherwise `"{n}-card: ..."`.
    pub fn describe(&self) -> String {
        let kind = if self.count() == 4 {
            "Badugi".to_string()
        } else {
            format!("{}-card", self.count())
        };
        format!("{}: {}", kind, join_cards(&self.cards))
    }
}

impl PartialEq for BadugiHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for BadugiHand {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert_eq!(
            self.rule, other.rule,
            "badugi hands from different ace rules are not comparable"
        );
        other
            .count()
            .cmp(&self.count())
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

impl PartialOrd for BadugiHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One greedy pass: walk the cards from lowest value up, keeping a card only
/// when neither its rank nor its suit is already taken.
pub fn greedy_walk(cards: &[Card], rule: LowRule) -> BadugiHand {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (rule.value(c.rank), c.suit));

    let mut kept: Vec<Card> = Vec::with_capacity(4);
    for card in sorted {
        let clash = kept
            .iter()
            .any(|k| k.rank == card.rank || k.suit == card.suit);
        if !clash {
            kept.push(card);
        }
    }

    let mut ranks: Vec<u8> = kept.iter().map(|c| rule.value(c.rank)).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    BadugiHand {
        rule,
        cards: kept,
        ranks,
    }
}

/// Best Badugi hand obtainable from `cards`.
///
/// Every subset of one to four cards is walked and the best result kept,
/// so a card stranded by one greedy pass over the whole holding is still
/// found.
///
/// ```
/// use handreader_engine::badugi::best_badugi;
/// use handreader_engine::cards::parse_cards;
/// use handreader_engine::lowball::LowRule;
///
/// let cards = parse_cards("Ac Ad 2c").unwrap();
/// let best = best_badugi(&cards, LowRule::AceToFive);
/// assert_eq!(best.count(), 2);
/// assert_eq!(best.ranks, vec![2, 1]);
/// ```
pub fn best_badugi(cards: &[Card], rule: LowRule) -> BadugiHand {
    let mut best = greedy_walk(cards, rule);
    for size in 1..=cards.len().min(4) {
        for subset in combinations(cards, size) {
            let candidate = greedy_walk(&subset, rule);
            if candidate < best {
                best = candidate;
            }
        }
    }
    best
}
