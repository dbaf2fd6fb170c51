//! Draw detection logic for tic-tac-toe.

use super::{available_moves, check_winner};
use crate::{Board, Cell, Symbol};
use tracing::{instrument, trace};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks whether no single remaining move can complete a line.
///
/// Every empty cell is tried once for each symbol and undone afterwards, so
/// the board is left as it was found. A board with no empty cells counts as
/// a forced draw.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn is_forced_draw(board: &mut Board, first: Symbol, second: Symbol) -> bool {
    for pos in available_moves(board) {
        for symbol in [first, second] {
            board.place(pos, symbol);
            let wins = check_winner(board, symbol);
            board.clear(pos);
            if wins {
                trace!(%pos, %symbol, "Line still completable");
                return false;
            }
        }
    }
    true
}
