//! Errors raised when a move cannot be applied to a turn.

use crate::Position;
use derive_more::{Display, Error};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveErrorKind {
    /// The target cell already holds a symbol.
    #[display("{_0} is already occupied")]
    Occupied(Position),
    /// The turn has already been won or drawn.
    #[display("the turn is already over")]
    TurnOver,
}

/// Move error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Move error: {} at {}:{}", kind, file, line)]
pub struct MoveError {
    /// What went wrong.
    pub kind: MoveErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MoveError {
    /// Creates a new move error with caller location tracking.
    #[track_caller]
    pub fn new(kind: MoveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
