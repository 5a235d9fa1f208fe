//! Showdown resolution across every supported game.
//!
//! [`resolve`] validates the whole table before scoring anything, builds
//! each seat's candidate hands the way the game combines cards, keeps each
//! seat's best candidate and then compares seats, preserving exact ties.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::badugi::{best_badugi, BadugiHand};
use crate::cards::{join_cards, Card};
use crate::combos::combinations;
use crate::errors::{EvalError, HoldingPart};
use crate::game::{describe_range, Game, Scoring};
use crate::hand::{CanonicalHand, HighHandOracle, StandardOracle};
use crate::lowball::{self, LowRule, LowScore};
use crate::qualifier::Qualifier;
use crate::target::{Target, TargetScore};

pub type Seat = u32;

/// Cards on the table at showdown.
///
/// ```
/// use handreader_engine::cards::parse_cards;
/// use handreader_engine::showdown::Table;
///
/// let table = Table::new()
///     .with_seat(1, parse_cards("As Ks").unwrap())
///     .with_seat(2, parse_cards("7d 2c").unwrap())
///     .with_board(parse_cards("Qs Js Ts 3h 4d").unwrap());
/// assert_eq!(table.pool(1).len(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Hole cards by seat.
    pub holdings: BTreeMap<Seat, Vec<Card>>,
    /// Shared cards.
    #[serde(default)]
    pub board: Vec<Card>,
    /// Exposed stud cards by seat, tracked apart from the hole cards.
    #[serde(default)]
    pub up_cards: BTreeMap<Seat, Vec<Card>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seat(mut self, seat: Seat, cards: Vec<Card>) -> Self {
        self.holdings.insert(seat, cards);
        self
    }

    pub fn with_board(mut self, board: Vec<Card>) -> Self {
        self.board = board;
        self
    }

    pub fn with_up_cards(mut self, seat: Seat, cards: Vec<Card>) -> Self {
        self.up_cards.insert(seat, cards);
        self
    }

    pub fn seats(&self) -> impl Iterator<Item = Seat> + '_ {
        self.holdings.keys().copied()
    }

    /// Hole cards, then up-cards, then the board.
    pub fn pool(&self, seat: Seat) -> Vec<Card> {
        let mut pool = Vec::new();
        if let Some(hole) = self.holdings.get(&seat) {
            pool.extend_from_slice(hole);
        }
        if let Some(up) = self.up_cards.get(&seat) {
            pool.extend_from_slice(up);
        }
        pool.extend_from_slice(&self.board);
        pool
    }

    /// Hole cards plus up-cards, without the board.
    pub fn private_cards(&self, seat: Seat) -> Vec<Card> {
        let mut cards = self.holdings.get(&seat).cloned().unwrap_or_default();
        if let Some(up) = self.up_cards.get(&seat) {
            cards.extend_from_slice(up);
        }
        cards
    }

    fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.holdings
            .values()
            .chain(self.up_cards.values())
            .flatten()
            .chain(self.board.iter())
    }
}

/// One winning seat's hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningHand {
    pub seat: Seat,
    /// Category label, e.g. `"Full House"`, `"Badugi"` or `"Score"`.
    pub category: String,
    pub cards: Vec<Card>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownResult {
    pub game: Game,
    /// Winning seats, ascending.
    pub winners: Vec<Seat>,
    /// One entry per winner, in the same order.
    pub hands: Vec<WinningHand>,
    /// Description of the lowest winning seat's hand.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Showdown {
    Winners(ShowdownResult),
    /// Nobody met the game's qualifier.
    NoQualifyingHand { game: Game, qualifier: Qualifier },
}

impl Showdown {
    pub fn winners(&self) -> &[Seat] {
        match self {
            Showdown::Winners(result) => &result.winners,
            Showdown::NoQualifyingHand { .. } => &[],
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Showdown::Winners(result) => &result.description,
            Showdown::NoQualifyingHand { qualifier, .. } => qualifier.failure_message(),
        }
    }

    pub fn game(&self) -> Game {
        match self {
            Showdown::Winners(result) => result.game,
            Showdown::NoQualifyingHand { game, .. } => *game,
        }
    }
}

/// Resolves a showdown with the bundled high-hand evaluator.
///
/// ```
/// use handreader_engine::cards::parse_cards;
/// use handreader_engine::game::Game;
/// use handreader_engine::showdown::{resolve, Table};
///
/// let table = Table::new()
///     .with_seat(1, parse_cards("Ah Ad").unwrap())
///     .with_seat(2, parse_cards("Kc Kd").unwrap())
///     .with_board(parse_cards("2s 7h 9c Jd 3c").unwrap());
/// let showdown = resolve(Game::Holdem, &table).unwrap();
/// assert_eq!(showdown.winners(), &[1]);
/// assert_eq!(showdown.description(), "Pair, A's");
/// ```
pub fn resolve(game: Game, table: &Table) -> Result<Showdown, EvalError> {
    resolve_with(&StandardOracle, game, table)
}

/// Resolves a showdown, ranking high hands through `oracle`.
pub fn resolve_with(
    oracle: &dyn HighHandOracle,
    game: Game,
    table: &Table,
) -> Result<Showdown, EvalError> {
    validate(game, table)?;

    let showdown = match game {
        Game::Holdem => resolve_high(oracle, game, table, None),
        Game::Omaha(scoring) | Game::Draw(scoring) | Game::Stud(scoring) => match scoring {
            Scoring::High => resolve_high(oracle, game, table, None),
            Scoring::HighNinesOrBetter => {
                resolve_high(oracle, game, table, Some(Qualifier::NinesOrBetterHigh))
            }
            Scoring::Lowball(rule) => resolve_low(game, table, rule, None),
            Scoring::LowEightOrBetter => resolve_low(
                game,
                table,
                LowRule::AceToFive,
                Some(Qualifier::EightOrBetterLow),
            ),
        },
        Game::Badugi(rule) => resolve_badugi(game, table, rule),
        Game::Drawmaha(target) => resolve_target(game, table, target),
    };

    info!(
        game = %game,
        winners = ?showdown.winners(),
        description = showdown.description(),
        "showdown resolved"
    );
    Ok(showdown)
}

fn validate(game: Game, table: &Table) -> Result<(), EvalError> {
    if table.holdings.is_empty() {
        return Err(EvalError::InvalidHoldingSize {
            part: HoldingPart::Table,
            expected: "at least 1 seat".to_string(),
            actual: 0,
        });
    }

    let shape = game.shape();
    check_count(HoldingPart::Board, &shape.board, table.board.len())?;

    for (&seat, hole) in &table.holdings {
        check_count(HoldingPart::Hole(seat), &shape.hole, hole.len())?;
        if let Some(up) = table.up_cards.get(&seat) {
            if !shape.up_cards && !up.is_empty() {
                return Err(EvalError::InvalidHoldingSize {
                    part: HoldingPart::UpCards(seat),
                    expected: "0".to_string(),
                    actual: up.len(),
                });
            }
        }
        let pool = match game {
            Game::Badugi(_) | Game::Drawmaha(_) => table.private_cards(seat).len(),
            _ => table.pool(seat).len(),
        };
        check_count(HoldingPart::Pool(seat), &shape.pool, pool)?;
    }

    let mut seen = HashSet::new();
    for &card in table.all_cards() {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard { card });
        }
    }

    if let Some(&seat) = table
        .up_cards
        .keys()
        .find(|seat| !table.holdings.contains_key(seat))
    {
        return Err(EvalError::UnknownSeat { seat });
    }
    Ok(())
}

fn check_count(
    part: HoldingPart,
    range: &RangeInclusive<usize>,
    actual: usize,
) -> Result<(), EvalError> {
    if range.contains(&actual) {
        Ok(())
    } else {
        Err(EvalError::InvalidHoldingSize {
            part,
            expected: describe_range(range),
            actual,
        })
    }
}

/// Five-card candidates for one seat.
fn candidates(game: Game, table: &Table, seat: Seat) -> Vec<[Card; 5]> {
    match game {
        Game::Omaha(_) => {
            let hole = table.holdings.get(&seat).cloned().unwrap_or_default();
            let mut out = Vec::new();
            for pair in combinations(&hole, 2) {
                for three in combinations(&table.board, 3) {
                    out.push([pair[0], pair[1], three[0], three[1], three[2]]);
                }
            }
            out
        }
        _ => {
            let pool = table.pool(seat);
            combinations(&pool, 5)
                .filter_map(|c| <[Card; 5]>::try_from(c.as_slice()).ok())
                .collect()
        }
    }
}

fn resolve_high(
    oracle: &dyn HighHandOracle,
    game: Game,
    table: &Table,
    qualifier: Option<Qualifier>,
) -> Showdown {
    let mut seats = Vec::new();
    let mut hands: Vec<CanonicalHand> = Vec::new();
    for seat in table.seats() {
        let cands = candidates(game, table, seat);
        let count = cands.len();
        let mut best: Option<CanonicalHand> = None;
        for cards in &cands {
            let hand = oracle.classify(cards);
            let better = match &best {
                None => true,
                Some(b) => oracle.compare(&hand, b) == Ordering::Greater,
            };
            if better {
                best = Some(hand);
            }
        }
        let best = best.filter(|h| qualifier.is_none_or(|q| q.accepts_high(h)));
        debug!(
            seat,
            candidates = count,
            best = ?best.as_ref().map(|h| h.describe()),
            "seat evaluated"
        );
        if let Some(hand) = best {
            seats.push(seat);
            hands.push(hand);
        }
    }

    if hands.is_empty() {
        return no_qualifier(game, qualifier);
    }

    let entries = oracle
        .winners(&hands)
        .into_iter()
        .map(|i| WinningHand {
            seat: seats[i],
            category: hands[i].category().name().to_string(),
            cards: hands[i].cards.to_vec(),
            description: hands[i].describe(),
            total: None,
            distance: None,
        })
        .collect();
    winners(game, entries)
}

fn resolve_low(
    game: Game,
    table: &Table,
    rule: LowRule,
    qualifier: Option<Qualifier>,
) -> Showdown {
    let mut scored: Vec<(Seat, LowScore, [Card; 5])> = Vec::new();
    for seat in table.seats() {
        let cands = candidates(game, table, seat);
        let mut best: Option<(LowScore, [Card; 5])> = None;
        for cards in &cands {
            if qualifier.is_some_and(|q| !q.accepts_low(cards)) {
                continue;
            }
            let score = rule.score(cards);
            let better = match &best {
                None => true,
                Some((b, _)) => !score.clearly_worse_than(b) && score < *b,
            };
            if better {
                best = Some((score, *cards));
            }
        }
        debug!(
            seat,
            candidates = cands.len(),
            best = ?best.as_ref().map(|(s, _)| s.label()),
            "seat evaluated"
        );
        if let Some((score, cards)) = best {
            scored.push((seat, score, cards));
        }
    }

    if scored.is_empty() {
        return no_qualifier(game, qualifier);
    }

    let entries = strongest(scored, |a, b| b.1.cmp(&a.1))
        .into_iter()
        .map(|(seat, score, cards)| {
            let description = if qualifier.is_some() {
                qualified_low(&cards)
            } else {
                lowball::describe(&score, &cards)
            };
            WinningHand {
                seat,
                category: score.label().to_string(),
                cards: lowball::display_order(&cards, rule),
                description,
                total: None,
                distance: None,
            }
        })
        .collect();
    winners(game, entries)
}

/// `"7-Low: 7h 5c 4d 3s Ah"`.
fn qualified_low(cards: &[Card; 5]) -> String {
    let ordered = lowball::display_order(cards, LowRule::AceToFive);
    let top = ordered.first().map_or('?', |c| c.rank.symbol());
    format!("{}-Low: {}", top, join_cards(&ordered))
}

fn resolve_badugi(game: Game, table: &Table, rule: LowRule) -> Showdown {
    let mut scored: Vec<(Seat, BadugiHand)> = Vec::new();
    for seat in table.seats() {
        let hand = best_badugi(&table.private_cards(seat), rule);
        debug!(seat, cards = hand.count(), "seat evaluated");
        scored.push((seat, hand));
    }

    let entries = strongest(scored, |a, b| b.1.cmp(&a.1))
        .into_iter()
        .map(|(seat, hand)| WinningHand {
            seat,
            category: if hand.count() == 4 {
                "Badugi".to_string()
            } else {
                format!("{}-card", hand.count())
            },
            description: hand.describe(),
            cards: hand.cards,
            total: None,
            distance: None,
        })
        .collect();
    winners(game, entries)
}

fn resolve_target(game: Game, table: &Table, target: Target) -> Showdown {
    let mut scored: Vec<(Seat, TargetScore, Vec<Card>)> = Vec::new();
    for seat in table.seats() {
        let cards = table.private_cards(seat);
        let score = target.score(&cards);
        debug!(seat, total = score.total, distance = score.distance, "seat evaluated");
        scored.push((seat, score, cards));
    }

    let entries = strongest(scored, |a, b| b.1.compare(&a.1))
        .into_iter()
        .map(|(seat, score, cards)| WinningHand {
            seat,
            category: "Score".to_string(),
            cards,
            description: score.describe(),
            total: Some(score.total),
            distance: Some(score.distance),
        })
        .collect();
    winners(game, entries)
}

/// Every entry tied with the strongest one, in input order.
/// `stronger(a, b) == Greater` means `a` beats `b`.
fn strongest<T>(entries: Vec<T>, stronger: impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    let Some(best) = (0..entries.len()).reduce(|b, i| {
        if stronger(&entries[i], &entries[b]) == Ordering::Greater {
            i
        } else {
            b
        }
    }) else {
        return Vec::new();
    };
    let keep: Vec<bool> = entries
        .iter()
        .map(|e| stronger(e, &entries[best]) == Ordering::Equal)
        .collect();
    entries
        .into_iter()
        .zip(keep)
        .filter_map(|(e, k)| k.then_some(e))
        .collect()
}

fn winners(game: Game, mut hands: Vec<WinningHand>) -> Showdown {
    hands.sort_by_key(|h| h.seat);
    let description = hands
        .first()
        .map(|h| h.description.clone())
        .unwrap_or_default();
    Showdown::Winners(ShowdownResult {
        game,
        winners: hands.iter().map(|h| h.seat).collect(),
        hands,
        description,
    })
}

fn no_qualifier(game: Game, qualifier: Option<Qualifier>) -> Showdown {
    match qualifier {
        Some(qualifier) => Showdown::NoQualifyingHand { game, qualifier },
        None => winners(game, Vec::new()),
    }
}
