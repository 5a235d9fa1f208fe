use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories, weakest first. Shared by the high oracle and the
/// lowball scorers; A-5 lowball simply never produces the straight and
/// flush rungs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// A classified five-card hand with its cards in display order
/// (grouped ranks first, then high to low; the wheel shows the ace last).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CanonicalHand {
    pub cards: [Card; 5],
    pub strength: HandStrength,
}

impl CanonicalHand {
    pub fn category(&self) -> Category {
        self.strength.category
    }

    /// Human-readable description, e.g. `"Two Pair, A's & 8's"`.
    pub fn describe(&self) -> String {
        let rank = |i: usize| self.cards[i].rank.symbol();
        let name = self.category().name();
        match self.category() {
            Category::HighCard => format!("{} High", rank(0)),
            Category::OnePair | Category::ThreeOfAKind | Category::FourOfAKind => {
                format!("{}, {}'s", name, rank(0))
            }
            Category::TwoPair => format!("{}, {}'s & {}'s", name, rank(0), rank(2)),
            Category::Straight => format!("{}, {} High", name, rank(0)),
            Category::Flush | Category::StraightFlush => {
                format!("{}, {} High", name, self.cards[0])
            }
            Category::FullHouse => format!("{}, {}'s over {}'s", name, rank(0), rank(3)),
            Category::RoyalFlush => name.to_string(),
        }
    }
}

/// Ranks standard high hands. Showdown resolution only talks to this trait,
/// so a different evaluator can be plugged in through `showdown::resolve_with`.
pub trait HighHandOracle {
    fn classify(&self, cards: &[Card; 5]) -> CanonicalHand;

    /// `Greater` means `a` is the stronger hand.
    fn compare(&self, a: &CanonicalHand, b: &CanonicalHand) -> Ordering;

    /// Indices of every hand tied for best.
    fn winners(&self, hands: &[CanonicalHand]) -> Vec<usize> {
        let mut best: Vec<usize> = Vec::new();
        for (i, hand) in hands.iter().enumerate() {
            match best.first() {
                None => best.push(i),
                Some(&b) => match self.compare(hand, &hands[b]) {
                    Ordering::Greater => {
                        best.clear();
                        best.push(i);
                    }
                    Ordering::Equal => best.push(i),
                    Ordering::Less => {}
                },
            }
        }
        best
    }
}

/// The bundled evaluator.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardOracle;

impl HighHandOracle for StandardOracle {
    fn classify(&self, cards: &[Card; 5]) -> CanonicalHand {
        let strength = evaluate_hand(cards);
        let wheel = matches!(
            strength.category,
            Category::Straight | Category::StraightFlush
        ) && strength.kickers[0] == 5;
        CanonicalHand {
            cards: display_order(cards, wheel),
            strength,
        }
    }

    fn compare(&self, a: &CanonicalHand, b: &CanonicalHand) -> Ordering {
        compare_hands(&a.strength, &b.strength)
    }
}

pub fn evaluate_hand(cards: &[Card; 5]) -> HandStrength {
    let counts = rank_counts(cards);
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let mask = cards
        .iter()
        .fold(0u16, |m, c| m | 1u16 << rank_val(c.rank));

    if let Some(high) = straight_high_from_mask(mask) {
        let category = match (flush, high) {
            (true, 14) => Category::RoyalFlush,
            (true, _) => Category::StraightFlush,
            (false, _) => Category::Straight,
        };
        return HandStrength {
            category,
            kickers: [high, 0, 0, 0, 0],
        };
    }

    let groups = classify_multiples(&counts);
    let mut kickers = [0u8; 5];
    for (slot, &(_, rank)) in kickers.iter_mut().zip(groups.iter()) {
        *slot = rank;
    }

    if flush {
        return HandStrength {
            category: Category::Flush,
            kickers,
        };
    }

    let category = match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
        (4, _) => Category::FourOfAKind,
        (3, 2) => Category::FullHouse,
        (3, _) => Category::ThreeOfAKind,
        (2, 2) => Category::TwoPair,
        (2, _) => Category::OnePair,
        _ => Category::HighCard,
    };
    HandStrength { category, kickers }
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

fn rank_val(r: Rank) -> u8 {
    r.high_value()
}

pub(crate) fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15]; // 2..14 used
    for c in cards {
        counts[rank_val(c.rank) as usize] += 1;
    }
    counts
}

/// `(count, rank)` groups ordered by count, then rank, both descending.
pub(crate) fn classify_multiples(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn straight_high_from_mask(mask: u16) -> Option<u8> {
    // Treat Ace as 14 and optionally as 1
    let mut m = mask;
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to 5
    for high in (5..=14).rev() {
        let window = 0b11111u16 << (high - 4);
        if (m & window) == window {
            return Some(high as u8);
        }
    }
    None
}

fn display_order(cards: &[Card; 5], wheel: bool) -> [Card; 5] {
    let counts = rank_counts(cards);
    let mut ordered = *cards;
    ordered.sort_unstable_by(|a, b| {
        let ka = (counts[rank_val(a.rank) as usize], a.rank, a.suit);
        let kb = (counts[rank_val(b.rank) as usize], b.rank, b.suit);
        kb.cmp(&ka)
    });
    if wheel {
        ordered.rotate_left(1);
    }
    ordered
}
