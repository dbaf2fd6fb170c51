//! Move enumeration.

use crate::{Board, Position};

/// Lists every empty cell in row-major order.
///
/// The order is stable, which keeps the computer's tie-breaks reproducible.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_valid_moves_empty_board() {
        let board = Board::new();
        assert_eq!(available_moves(&board), Position::ALL.to_vec());
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Symbol::X);
        board.place(Position::Center, Symbol::O);

        let moves = available_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::TopLeft));
        assert!(!moves.contains(&Position::Center));
        assert_eq!(moves.first(), Some(&Position::TopCenter));
        assert_eq!(moves.last(), Some(&Position::BottomRight));
    }
}
