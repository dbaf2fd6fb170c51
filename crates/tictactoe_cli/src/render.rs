//! Scoreboard and board rendering.

use crossterm::style::Stylize;
use tictactoe_core::{Board, Cell, MatchSession, Position, Symbol};

/// Renders frames, with or without ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Full game frame: scoreboard, optional result banner, board.
    ///
    /// Cells in `highlight` are drawn in green.
    pub fn frame(
        &self,
        session: &MatchSession,
        board: &Board,
        banner: Option<&str>,
        highlight: &[Position],
    ) -> String {
        let mut frame = String::new();
        frame.push('\n');
        frame.push_str(&self.scoreboard(session));
        frame.push_str("\n\n");
        if let Some(banner) = banner {
            frame.push_str(&format!("🎉 {} 🎉\n\n", banner));
        }
        frame.push_str(&self.board(board, highlight));
        frame
    }

    /// End-of-match frame: scoreboard and banner only.
    pub fn summary(&self, session: &MatchSession, banner: &str) -> String {
        format!("\n{}\n\n🏆 {} 🏆\n", self.scoreboard(session), banner)
    }

    /// Scoreboard line, first seat in yellow and second in blue.
    pub fn scoreboard(&self, session: &MatchSession) -> String {
        let [first, second] = session.players();
        let [first_score, second_score] = session.scores();
        let first = format!("{} : {}", first, first_score);
        let second = format!("{} : {}", second, second_score);
        format!(
            "🏆 Scoreboard: {} | {} 🏆",
            self.paint_yellow(&first),
            self.paint_blue(&second)
        )
    }

    /// Board rows separated by rules, empty cells showing their number.
    pub fn board(&self, board: &Board, highlight: &[Position]) -> String {
        let mut out = String::new();
        for row in Position::ALL.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|pos| self.cell(*pos, board.get(*pos), highlight.contains(pos)))
                .collect();
            out.push_str(&cells.join(" | "));
            out.push('\n');
            out.push_str(&"-".repeat(9));
            out.push('\n');
        }
        out
    }

    /// Main menu, with an error line after an invalid choice.
    pub fn menu(&self, error: bool) -> String {
        let mut menu = String::from(
            "🎮 Welcome to Tic-Tac-Toe! 🎮\n\
             1. Single Player (vs Computer)\n\
             2. Two Players\n\
             3. Exit",
        );
        if error {
            menu.push_str("\nERROR: Please select a correct option.");
        }
        menu
    }

    fn cell(&self, pos: Position, cell: Cell, highlighted: bool) -> String {
        match cell {
            Cell::Empty => pos.number().to_string(),
            Cell::Occupied(symbol) if highlighted => self.paint_green(&symbol.to_string()),
            Cell::Occupied(Symbol::X) => self.paint_yellow("X"),
            Cell::Occupied(Symbol::O) => self.paint_blue("O"),
        }
    }

    fn paint_yellow(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_blue(&self, text: &str) -> String {
        if self.color {
            text.blue().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_green(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}
