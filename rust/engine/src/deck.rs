use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EvalError;
use crate::game::{Game, Scoring};
use crate::showdown::{Seat, Table};

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Deals `n` cards. Fails with `DeckExhausted`, dealing nothing, if fewer remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EvalError> {
        if n > self.remaining() {
            return Err(EvalError::DeckExhausted {
                needed: n,
                remaining: self.remaining(),
            });
        }
        Ok((0..n).filter_map(|_| self.deal_card()).collect())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Cards dealt per seat and to the board for a drill of `game`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DealPlan {
    pub hole: usize,
    pub up: usize,
    pub board: usize,
}

impl DealPlan {
    pub fn for_game(game: Game) -> Self {
        let (hole, up, board) = match game {
            Game::Holdem => (2, 0, 5),
            Game::Omaha(_) => (4, 0, 5),
            Game::Draw(Scoring::HighNinesOrBetter) => (5, 0, 1),
            Game::Draw(_) => (5, 0, 0),
            Game::Stud(_) => (3, 4, 0),
            Game::Badugi(_) => (4, 0, 0),
            Game::Drawmaha(_) => (5, 0, 0),
        };
        Self { hole, up, board }
    }

    pub fn cards_needed(&self, seats: usize) -> usize {
        seats * (self.hole + self.up) + self.board
    }
}

/// Shuffles `deck` and deals a complete showdown table for `game` with
/// seats numbered from 1.
///
/// # Errors
///
/// Returns [`EvalError::DeckExhausted`] when the game cannot be dealt to
/// that many seats from one deck.
pub fn deal_table(deck: &mut Deck, game: Game, seats: usize) -> Result<Table, EvalError> {
    let plan = DealPlan::for_game(game);
    let needed = plan.cards_needed(seats);
    deck.shuffle();
    if needed > deck.remaining() {
        return Err(EvalError::DeckExhausted {
            needed,
            remaining: deck.remaining(),
        });
    }

    let mut table = Table::new();
    for seat in 1..=seats as Seat {
        table = table.with_seat(seat, deck.deal(plan.hole)?);
        if plan.up > 0 {
            table = table.with_up_cards(seat, deck.deal(plan.up)?);
        }
    }
    table = table.with_board(deck.deal(plan.board)?);
    Ok(table)
}
