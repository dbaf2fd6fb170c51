//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the search and the turn state machine can share them.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_forced_draw, is_full};
pub use moves::available_moves;
pub use win::{check_winner, winner, winning_line};
