//! One turn: a single board played out to a win or a draw.

use crate::ai::ComputerOpponent;
use crate::error::{MoveError, MoveErrorKind};
use crate::rules::{is_forced_draw, is_full, winning_line};
use crate::{Board, Position, Symbol};
use tracing::{debug, info, instrument};

/// Moves that must be on the board before an early draw is looked for.
///
/// Tied to the 3x3 board: fewer moves can never leave a dead position.
pub const EARLY_DRAW_THRESHOLD: usize = 5;

/// What happened after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nobody has won yet; `next` moves now.
    Continue {
        /// Symbol to move next.
        next: Symbol,
    },
    /// `winner` completed `line`.
    Won {
        /// The winning symbol.
        winner: Symbol,
        /// The three cells of the completed line.
        line: [Position; 3],
    },
    /// Cells remain but no single move can complete a line.
    ForcedDraw,
    /// The board filled up without a winner.
    Tie,
}

impl TurnOutcome {
    /// Whether the turn is over.
    pub fn is_finished(&self) -> bool {
        !matches!(self, TurnOutcome::Continue { .. })
    }
}

/// State of one turn in progress.
#[derive(Debug, Clone)]
pub struct Turn {
    board: Board,
    to_move: Symbol,
    moves: usize,
    moved: [bool; 2],
    outcome: Option<TurnOutcome>,
}

impl Turn {
    /// Starts a turn on a fresh board with `starter` to move.
    #[instrument]
    pub fn new(starter: Symbol) -> Self {
        Self {
            board: Board::new(),
            to_move: starter,
            moves: 0,
            moved: [false, false],
            outcome: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol whose move it is.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Number of moves made so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// How the turn ended, once it has.
    pub fn outcome(&self) -> Option<TurnOutcome> {
        self.outcome
    }

    /// Whether `symbol` has not placed anything yet this turn.
    pub fn is_opening_move_for(&self, symbol: Symbol) -> bool {
        !self.moved[symbol as usize]
    }

    /// Asks `computer` for the best move of the side to move.
    ///
    /// Returns `None` once the turn is over.
    pub fn suggest_move(&mut self, computer: &mut ComputerOpponent) -> Option<Position> {
        if self.outcome.is_some() {
            return None;
        }
        let me = self.to_move;
        let opening = self.is_opening_move_for(me);
        computer.choose(&mut self.board, me, me.opponent(), opening)
    }

    /// Plays the side to move at `pos` and reports the result.
    #[instrument(skip(self), fields(mover = %self.to_move, moves = self.moves))]
    pub fn play(&mut self, pos: Position) -> Result<TurnOutcome, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::new(MoveErrorKind::TurnOver));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::new(MoveErrorKind::Occupied(pos)));
        }

        let mover = self.to_move;
        self.board.place(pos, mover);
        self.moved[mover as usize] = true;
        self.moves += 1;

        let outcome = if let Some(line) = winning_line(&self.board, mover) {
            TurnOutcome::Won {
                winner: mover,
                line,
            }
        } else if is_full(&self.board) {
            TurnOutcome::Tie
        } else if self.moves >= EARLY_DRAW_THRESHOLD
            && is_forced_draw(&mut self.board, mover, mover.opponent())
        {
            TurnOutcome::ForcedDraw
        } else {
            self.to_move = mover.opponent();
            TurnOutcome::Continue { next: self.to_move }
        };

        if outcome.is_finished() {
            info!(?outcome, moves = self.moves, "Turn finished");
            self.outcome = Some(outcome);
        } else {
            debug!(%pos, "Move applied");
        }
        Ok(outcome)
    }
}
