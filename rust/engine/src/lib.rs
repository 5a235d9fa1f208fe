//! # handreader-engine: Multi-Variant Showdown Core
//!
//! Reads poker hands at showdown. Given each seat's cards (plus a shared
//! board or exposed stud up-cards where the game has them), determines the
//! winning seat(s), their hand descriptions and exact ties across standard
//! high hands, A-5 and 2-7 lowball, qualified lows and highs, Badugi and the
//! Drawmaha point games.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and token parsing
//! - [`combos`] - Fixed-size subset enumeration
//! - [`hand`] - High-hand classification and the [`hand::HighHandOracle`] seam
//! - [`lowball`] - A-5 and 2-7 low scoring
//! - [`qualifier`] - 8-or-better low and 9s-or-better high gates
//! - [`badugi`] - Badugi hand selection under both ace rules
//! - [`target`] - Drawmaha point totals
//! - [`game`] - The game catalogue and holding shapes
//! - [`showdown`] - Table validation and winner resolution
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`errors`] - Error types for parsing and resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use handreader_engine::cards::parse_cards;
//! use handreader_engine::game::Game;
//! use handreader_engine::showdown::{resolve, Showdown, Table};
//!
//! let table = Table::new()
//!     .with_seat(1, parse_cards("Ah 2c 3d 4s 5h").unwrap())
//!     .with_seat(2, parse_cards("7h 5c 4d 3s 2h").unwrap());
//!
//! // The wheel is the nuts in A-5 lowball...
//! let a5 = resolve("draw-a5".parse::<Game>().unwrap(), &table).unwrap();
//! assert_eq!(a5.winners(), &[1]);
//!
//! // ...and a straight in 2-7.
//! let deuce = resolve("draw-27".parse::<Game>().unwrap(), &table).unwrap();
//! assert_eq!(deuce.winners(), &[2]);
//! assert!(matches!(deuce, Showdown::Winners(_)));
//! ```
//!
//! ## Deterministic Dealing
//!
//! Training tables are reproducible using seeded RNG:
//!
//! ```rust
//! use handreader_engine::deck::{deal_table, Deck};
//! use handreader_engine::game::Game;
//!
//! let a = deal_table(&mut Deck::new_with_seed(42), Game::Holdem, 3).unwrap();
//! let b = deal_table(&mut Deck::new_with_seed(42), Game::Holdem, 3).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod badugi;
pub mod cards;
pub mod combos;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod lowball;
pub mod qualifier;
pub mod showdown;
pub mod target;
