//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position, Symbol};

/// The eight lines that win the game.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line completely held by `symbol`, if any.
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<[Position; 3]> {
    let mark = Cell::Occupied(symbol);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks whether `symbol` has three in a row.
pub fn check_winner(board: &Board, symbol: Symbol) -> bool {
    winning_line(board, symbol).is_some()
}

/// Returns the symbol holding a complete line, if any.
pub fn winner(board: &Board) -> Option<Symbol> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|symbol| check_winner(board, *symbol))
}
