//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_more::Display;

/// One of the two marks a player can put on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Symbol {
    /// The X mark.
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a symbol.
    Occupied(Symbol),
}

/// 3x3 tic-tac-toe board.
///
/// A board lives for exactly one turn. Start every turn from [`Board::new`]
/// rather than clearing an old board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Puts `symbol` on an empty cell.
    ///
    /// The cell must be empty. Callers check with [`Board::is_empty`] or
    /// [`crate::available_moves`] first; only debug builds verify it here.
    pub fn place(&mut self, pos: Position, symbol: Symbol) {
        debug_assert!(self.is_empty(pos), "{pos} is already occupied");
        self.cells[pos.to_index()] = Cell::Occupied(symbol);
    }

    /// Empties a cell again. Used to undo hypothetical placements.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Number of cells holding a symbol.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as plain text, empty cells showing their number.
    pub fn render_plain(&self) -> String {
        let rows: Vec<String> = (0..3)
            .map(|row| {
                (0..3)
                    .filter_map(|col| Position::from_row_col(row, col))
                    .map(|pos| match self.get(pos) {
                        Cell::Empty => pos.number().to_string(),
                        Cell::Occupied(symbol) => symbol.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();
        rows.join("\n---------\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_plain())
    }
}
