use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EvalError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Lowercase ASCII letter used in canonical card tokens.
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Unicode suit symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Discriminants are the ace-high values used by high-hand evaluation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Value with the ace counted high (2..=14).
    pub fn high_value(self) -> u8 {
        self as u8
    }

    /// Value with the ace counted low (1..=13).
    pub fn low_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => r as u8,
        }
    }

    /// Single character used in canonical tokens (`T` for ten).
    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a single playing card with a suit and rank.
///
/// Cards are created by parsing a token such as `"As"`, `"10h"`, `"td"` or
/// `"Q♠"` and serialize back to the canonical two-character form (`"Th"`).
///
/// ```
/// use handreader_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::parse("10h").unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card.to_string(), "Th");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

const RANK_TOKENS: [(&str, Rank); 14] = [
    ("2", Rank::Two),
    ("3", Rank::Three),
    ("4", Rank::Four),
    ("5", Rank::Five),
    ("6", Rank::Six),
    ("7", Rank::Seven),
    ("8", Rank::Eight),
    ("9", Rank::Nine),
    ("10", Rank::Ten),
    ("t", Rank::Ten),
    ("j", Rank::Jack),
    ("q", Rank::Queen),
    ("k", Rank::King),
    ("a", Rank::Ace),
];

const SUIT_TOKENS: [(char, Suit); 12] = [
    ('c', Suit::Clubs),
    ('d', Suit::Diamonds),
    ('h', Suit::Hearts),
    ('s', Suit::Spades),
    ('♣', Suit::Clubs),
    ('♦', Suit::Diamonds),
    ('♥', Suit::Hearts),
    ('♠', Suit::Spades),
    ('♧', Suit::Clubs),
    ('♢', Suit::Diamonds),
    ('♡', Suit::Hearts),
    ('♤', Suit::Spades),
];

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Parses a single card token: a rank (`2`-`9`, `10`, `T`, `J`, `Q`, `K`,
    /// `A`) followed by one suit letter or symbol. Case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidCardToken`] if the rank or suit is unknown.
    pub fn parse(token: &str) -> Result<Card, EvalError> {
        let invalid = || EvalError::InvalidCardToken {
            token: token.to_string(),
        };
        let mut chars = token.trim().chars();
        let suit = chars
            .next_back()
            .and_then(suit_from_char)
            .ok_or_else(invalid)?;
        let rank = rank_from_str(chars.as_str()).ok_or_else(invalid)?;
        Ok(Card { suit, rank })
    }
}

fn rank_from_str(s: &str) -> Option<Rank> {
    RANK_TOKENS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(s))
        .map(|&(_, rank)| rank)
}

fn suit_from_char(c: char) -> Option<Suit> {
    let c = c.to_ascii_lowercase();
    SUIT_TOKENS
        .iter()
        .find(|(token, _)| *token == c)
        .map(|&(_, suit)| suit)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = EvalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Card::parse(&value)
    }
}

/// Parses a whitespace- or comma-separated list of card tokens.
///
/// ```
/// use handreader_engine::cards::parse_cards;
///
/// let cards = parse_cards("As, Kd 10h").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(parse_cards("As Xd").is_err());
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, EvalError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(Card::parse)
        .collect()
}

/// Renders cards as space-separated canonical tokens.
pub fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
