//! Main menu and match setup.

use crate::cli::{Cli, Mode};
use crate::config::GameConfig;
use crate::console::Console;
use crate::orchestrator::MatchRunner;
use crate::players::{COMPUTER_NAME, ComputerPlayer, HumanPlayer, Player};
use crate::prompt::{read_menu_choice, read_name, read_turns};
use crate::render::Renderer;
use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use tictactoe_core::{ComputerOpponent, MatchSession};
use tracing::{info, instrument};

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play a match against the computer.
    SinglePlayer,
    /// Play a match between two humans.
    TwoPlayers,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Parses the option number typed at the menu.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::SinglePlayer),
            "2" => Some(Self::TwoPlayers),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive program: menu, setup and matches.
pub struct App {
    config: GameConfig,
    renderer: Renderer,
    turns: Option<u32>,
    rng: StdRng,
}

impl App {
    /// Creates the app from parsed flags and loaded config.
    pub fn new(cli: &Cli, config: GameConfig) -> Self {
        let config = if cli.no_color {
            config.with_color(false)
        } else {
            config
        };
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            renderer: Renderer::new(*config.color()),
            config,
            turns: cli.turns,
            rng,
        }
    }

    /// Runs `mode` once if given, otherwise loops on the main menu.
    #[instrument(skip(self, console))]
    pub fn run(&mut self, mode: Option<Mode>, console: &mut dyn Console) -> Result<()> {
        if let Some(mode) = mode {
            self.play_match(mode, console)?;
            return Ok(());
        }

        let mut error = false;
        loop {
            console.show(&self.renderer.menu(error))?;
            match read_menu_choice(console)? {
                Some(MenuChoice::SinglePlayer) => {
                    error = false;
                    self.play_match(Mode::Single, console)?;
                }
                Some(MenuChoice::TwoPlayers) => {
                    error = false;
                    self.play_match(Mode::Multi, console)?;
                }
                Some(MenuChoice::Exit) => {
                    info!("Exiting");
                    return Ok(());
                }
                None => error = true,
            }
        }
    }

    /// Sets up and plays one match, returning the champion's name.
    #[instrument(skip(self, console))]
    pub fn play_match(&mut self, mode: Mode, console: &mut dyn Console) -> Result<String> {
        let (first, second): (Box<dyn Player>, Box<dyn Player>) = match mode {
            Mode::Single => {
                let name = read_name(console, "Enter your name: ", &[COMPUTER_NAME])?;
                (Box::new(HumanPlayer::new(name)), Box::new(self.computer()))
            }
            Mode::Multi => {
                let one = read_name(console, "Enter name for Player 1: ", &[])?;
                let two = read_name(console, "Enter name for Player 2: ", &[one.as_str()])?;
                (Box::new(HumanPlayer::new(one)), Box::new(HumanPlayer::new(two)))
            }
        };

        let turns = match self.turns {
            Some(turns) => turns,
            None => read_turns(console)?,
        };

        let session = MatchSession::new(first.name(), second.name(), turns, &mut self.rng);
        info!(?mode, turns, "Match set up");
        let mut runner = MatchRunner::new(
            session,
            [first, second],
            self.renderer,
            self.config.clone(),
        )?;
        runner.run(console)
    }

    fn computer(&mut self) -> ComputerPlayer {
        let opponent = ComputerOpponent::seeded(self.rng.random());
        ComputerPlayer::new(
            opponent,
            self.config.think_delay(false),
            self.config.think_delay(true),
        )
    }
}
