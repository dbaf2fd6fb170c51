//! Tic-tac-toe game logic with an unbeatable computer opponent.
//!
//! # Architecture
//!
//! - **Board**: a 3x3 grid of [`Cell`]s addressed by [`Position`]
//! - **Rules**: win, full-board and forced-draw detection plus move enumeration
//! - **AI**: exhaustive [`minimax`] search and the [`best_move`] selector
//! - **Turn**: one board played out to a [`TurnOutcome`]
//! - **Session**: scores, symbols and starter across a [`MatchSession`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{ComputerOpponent, Position, Symbol, Turn, TurnOutcome};
//!
//! let mut turn = Turn::new(Symbol::X);
//! turn.play(Position::TopLeft).unwrap();
//!
//! let mut computer = ComputerOpponent::seeded(42);
//! let reply = turn.suggest_move(&mut computer).unwrap();
//! assert_eq!(reply, Position::Center);
//! assert!(matches!(turn.play(reply).unwrap(), TurnOutcome::Continue { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod error;
mod position;
pub mod rules;
mod session;
mod turn;
mod types;

pub use ai::{ComputerOpponent, LOSS_SCORE, OPENING_CANDIDATES, WIN_SCORE, best_move, minimax};
pub use error::{MoveError, MoveErrorKind};
pub use position::Position;
pub use rules::{available_moves, check_winner, is_forced_draw, is_full, winner, winning_line};
pub use session::MatchSession;
pub use turn::{EARLY_DRAW_THRESHOLD, Turn, TurnOutcome};
pub use types::{Board, Cell, Symbol};
