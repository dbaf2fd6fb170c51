//! Terminal front end for tic-tac-toe.
//!
//! # Architecture
//!
//! - **Console**: the only place that touches stdin/stdout
//! - **Prompts**: menu, name, match-length and cell input with validation
//! - **Render**: scoreboard and colored board frames
//! - **Players**: humans at the keyboard and the minimax computer
//! - **Orchestrator**: drives turns and matches over a [`MatchSession`](tictactoe_core::MatchSession)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod orchestrator;
mod players;
mod prompt;
mod render;

pub use app::{App, MenuChoice};
pub use cli::{Cli, Mode};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::{Console, TerminalConsole};
pub use orchestrator::MatchRunner;
pub use players::{COMPUTER_NAME, ComputerPlayer, HumanPlayer, Player};
pub use prompt::{read_cell, read_menu_choice, read_name, read_turns};
pub use render::Renderer;
