//! Command-line interface for the tictactoe binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Terminal tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the menu and start a match in this mode, then exit
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Turn wins needed to take the match (asked interactively if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub turns: Option<u32>,

    /// Seed for the computer's random choices and the symbol draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Game modes offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// One human against the computer
    Single,
    /// Two humans sharing the keyboard
    Multi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_mode_and_turns() {
        let cli = Cli::try_parse_from(["tictactoe", "--mode", "single", "--turns", "3"]).unwrap();
        assert_eq!(cli.mode, Some(Mode::Single));
        assert_eq!(cli.turns, Some(3));
        assert!(!cli.no_color);
    }

    #[test]
    fn test_rejects_zero_turns() {
        assert!(Cli::try_parse_from(["tictactoe", "--turns", "0"]).is_err());
    }

    #[test]
    fn test_defaults_to_menu() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.mode, None);
        assert_eq!(cli.seed, None);
    }
}
