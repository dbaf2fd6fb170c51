//! Tic-tac-toe in the terminal.
//!
//! Play a friend on the same keyboard or a computer that never loses.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_cli::{App, Cli, GameConfig, TerminalConsole};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    initialize_tracing(config.log_file())?;
    info!(?cli, "Starting tictactoe");

    let stdin = std::io::stdin();
    let mut console = TerminalConsole::new(stdin.lock(), std::io::stdout(), *config.clear_screen());

    let mut app = App::new(&cli, config);
    app.run(cli.mode, &mut console)
}

/// Sends tracing output to a file so it never mixes with the game screen.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
