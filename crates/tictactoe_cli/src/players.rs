//! Player trait and implementations.

use crate::console::Console;
use crate::prompt::read_cell;
use anyhow::{Result, anyhow};
use std::time::Duration;
use tictactoe_core::{ComputerOpponent, Position, Turn};
use tracing::{debug, instrument};

/// Name the computer plays under.
pub const COMPUTER_NAME: &str = "Computer";

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the side to move in `turn`.
    ///
    /// The returned position is always empty on `turn`'s board.
    fn get_move(&mut self, turn: &mut Turn, console: &mut dyn Console) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Human player typing cell numbers.
#[derive(Debug, Clone, derive_new::new)]
pub struct HumanPlayer {
    name: String,
}

impl Player for HumanPlayer {
    fn get_move(&mut self, turn: &mut Turn, console: &mut dyn Console) -> Result<Position> {
        read_cell(console, &self.name, turn.board())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The minimax computer.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    opponent: ComputerOpponent,
    think_delay: Duration,
    opening_think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates the computer player with the pauses it takes before moving.
    pub fn new(
        opponent: ComputerOpponent,
        think_delay: Duration,
        opening_think_delay: Duration,
    ) -> Self {
        Self {
            opponent,
            think_delay,
            opening_think_delay,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(moves = turn.moves()))]
    fn get_move(&mut self, turn: &mut Turn, console: &mut dyn Console) -> Result<Position> {
        console.say("Computer is thinking...")?;
        let delay = if turn.moves() == 0 {
            self.opening_think_delay
        } else {
            self.think_delay
        };
        console.pause(delay);

        let pos = turn
            .suggest_move(&mut self.opponent)
            .ok_or_else(|| anyhow!("No moves left for the computer"))?;
        debug!(%pos, "Computer chose cell");
        Ok(pos)
    }

    fn name(&self) -> &str {
        COMPUTER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TerminalConsole;
    use std::io::Cursor;
    use tictactoe_core::Symbol;

    #[test]
    fn test_computer_blocks() {
        let mut turn = Turn::new(Symbol::O);
        // O O .
        // . X .
        for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
            turn.play(pos).unwrap();
        }
        let mut console = TerminalConsole::new(Cursor::new(""), Vec::new(), false);
        let mut computer =
            ComputerPlayer::new(ComputerOpponent::seeded(1), Duration::ZERO, Duration::ZERO);

        assert_eq!(computer.get_move(&mut turn, &mut console).unwrap(), Position::TopRight);
        assert_eq!(computer.name(), COMPUTER_NAME);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Computer is thinking...\n");
    }

    #[test]
    fn test_human_reads_from_console() {
        let mut turn = Turn::new(Symbol::X);
        let mut console = TerminalConsole::new(Cursor::new("7\n"), Vec::new(), false);
        let mut human = HumanPlayer::new("Ada".to_string());
        assert_eq!(human.get_move(&mut turn, &mut console).unwrap(), Position::BottomLeft);
        assert_eq!(human.name(), "Ada");
    }
}
