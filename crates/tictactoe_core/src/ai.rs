//! Computer opponent: exhaustive minimax search and move selection.

mod minimax;
mod selector;

pub use minimax::{LOSS_SCORE, WIN_SCORE, minimax};
pub use selector::{ComputerOpponent, OPENING_CANDIDATES, best_move};
