//! Full-depth minimax over the 3x3 game tree.
//!
//! Scores are always from the computer's point of view. A win found at
//! depth `d` is worth `WIN_SCORE - d` and a loss `d - WIN_SCORE`, so the
//! search prefers quick wins and slow losses. No pruning: the tree is small
//! enough to walk completely.

use crate::rules::{available_moves, check_winner, is_full};
use crate::{Board, Symbol};

/// Score of an immediate win for the computer.
pub const WIN_SCORE: i32 = 10;

/// Score of an immediate loss for the computer.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Scores `board` assuming both sides play perfectly from here.
///
/// `maximizing` is true when the computer is to move. Every hypothetical
/// placement is undone before the next one is tried, so `board` is left
/// unchanged on return.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    computer: Symbol,
    opponent: Symbol,
) -> i32 {
    if check_winner(board, computer) {
        return WIN_SCORE - depth;
    }
    if check_winner(board, opponent) {
        return depth + LOSS_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    let mover = if maximizing { computer } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in available_moves(board) {
        board.place(pos, mover);
        let score = minimax(board, depth + 1, !maximizing, computer, opponent);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
