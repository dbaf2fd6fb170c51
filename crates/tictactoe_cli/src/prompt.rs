//! Validated input prompts.
//!
//! Every prompt loops until it gets an acceptable answer, printing the
//! reason on each rejection. Errors only come from the console itself.

use crate::app::MenuChoice;
use crate::console::Console;
use anyhow::Result;
use tictactoe_core::{Board, Position};
use tracing::{debug, instrument};

/// Reads a main menu selection. Returns `None` for an unknown option.
pub fn read_menu_choice(console: &mut dyn Console) -> Result<Option<MenuChoice>> {
    let answer = console.ask("Select an option (1/2/3): ")?;
    Ok(MenuChoice::from_input(answer.trim()))
}

/// Reads a non-empty player name different from every name in `taken`.
#[instrument(skip(console))]
pub fn read_name(console: &mut dyn Console, prompt: &str, taken: &[&str]) -> Result<String> {
    loop {
        let name = console.ask(prompt)?.trim().to_string();
        if name.is_empty() {
            console.say("Please enter a name.")?;
        } else if taken.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
            console.say("That name is already taken. Choose another.")?;
        } else {
            return Ok(name);
        }
    }
}

/// Reads the number of turn wins that ends the match.
pub fn read_turns(console: &mut dyn Console) -> Result<u32> {
    loop {
        let answer = console.ask("Enter number of turns: ")?;
        match answer.trim().parse::<u32>() {
            Ok(turns) if turns > 0 => return Ok(turns),
            Ok(_) => console.say("ERROR: The number of turns must be at least 1.")?,
            Err(_) => {
                console.say("ERROR: The number of turns in the game must be an integer.")?
            }
        }
    }
}

/// Asks `name` for a cell number until it names an empty cell of `board`.
#[instrument(skip(console, board))]
pub fn read_cell(console: &mut dyn Console, name: &str, board: &Board) -> Result<Position> {
    let prompt = format!("{}, it's your turn. Choose a number (1-9): ", name);
    loop {
        let answer = console.ask(&prompt)?;
        let Some(pos) = parse_cell(answer.trim()) else {
            console.say("Invalid input! Please enter a number between 1 and 9.")?;
            continue;
        };
        if !board.is_empty(pos) {
            console.say("This cell is already occupied. Try another.")?;
            continue;
        }
        debug!(%pos, "Cell chosen");
        return Ok(pos);
    }
}

fn parse_cell(answer: &str) -> Option<Position> {
    answer.parse::<u8>().ok().and_then(Position::from_number)
}
