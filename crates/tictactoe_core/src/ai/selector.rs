//! Picks the computer's actual move from the minimax scores.

use super::minimax::minimax;
use crate::rules::available_moves;
use crate::{Board, Position, Symbol};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// How many of the tied best cells an opening move chooses from.
pub const OPENING_CANDIDATES: usize = 3;

/// Chooses the computer's move on `board`.
///
/// On an empty board any cell is picked at random without searching.
/// Otherwise every empty cell is scored with [`minimax`] and the best one is
/// returned, earliest in row-major order on ties. When `opening` is set (the
/// computer has not moved yet this turn) a tie is broken at random among the
/// first [`OPENING_CANDIDATES`] best cells instead.
///
/// Returns `None` only when the board has no empty cell. The board is left
/// unchanged.
#[instrument(skip(board, rng), fields(occupied = board.occupied_count()))]
pub fn best_move<R: Rng + ?Sized>(
    board: &mut Board,
    computer: Symbol,
    opponent: Symbol,
    opening: bool,
    rng: &mut R,
) -> Option<Position> {
    let moves = available_moves(board);

    if moves.len() == Position::ALL.len() {
        let choice = moves.choose(rng).copied();
        debug!(?choice, "Empty board, picking a random cell");
        return choice;
    }

    let mut best_score = i32::MIN;
    let mut best_moves: Vec<Position> = Vec::new();

    for pos in moves {
        board.place(pos, computer);
        let score = minimax(board, 0, false, computer, opponent);
        board.clear(pos);

        debug!(%pos, score, "Scored candidate");
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(pos);
        } else if score == best_score {
            best_moves.push(pos);
        }
    }

    let choice = if opening && best_moves.len() > 1 {
        let candidates = &best_moves[..best_moves.len().min(OPENING_CANDIDATES)];
        candidates.choose(rng).copied()
    } else {
        best_moves.first().copied()
    };

    debug!(?choice, best_score, ties = best_moves.len(), "Selected move");
    choice
}

/// The computer player, holding its own random source.
#[derive(Debug, Clone)]
pub struct ComputerOpponent {
    rng: StdRng,
}

impl ComputerOpponent {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates an opponent whose random choices are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a move for `computer` against `opponent`.
    pub fn choose(
        &mut self,
        board: &mut Board,
        computer: Symbol,
        opponent: Symbol,
        opening: bool,
    ) -> Option<Position> {
        best_move(board, computer, opponent, opening, &mut self.rng)
    }
}

impl Default for ComputerOpponent {
    fn default() -> Self {
        Self::new()
    }
}
