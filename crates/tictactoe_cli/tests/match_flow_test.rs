//! Scripted end-to-end sessions through the menu and match loop.

use std::io::Cursor;
use tictactoe_cli::{App, Cli, GameConfig, Mode, TerminalConsole};

fn quiet_config() -> GameConfig {
    GameConfig::default()
        .without_delays()
        .with_color(false)
        .with_clear_screen(false)
}

fn cli(seed: u64, turns: Option<u32>) -> Cli {
    Cli {
        seed: Some(seed),
        turns,
        no_color: true,
        ..Cli::default()
    }
}

fn console(input: &str) -> TerminalConsole<Cursor<String>, Vec<u8>> {
    TerminalConsole::new(Cursor::new(input.to_string()), Vec::new(), false)
}

#[test]
fn test_menu_rejects_unknown_option_then_exits() {
    let mut app = App::new(&cli(1, None), quiet_config());
    let mut io = console("9\n3\n");

    app.run(None, &mut io).unwrap();

    let out = String::from_utf8(io.into_output()).unwrap();
    assert_eq!(out.matches("Welcome to Tic-Tac-Toe!").count(), 2);
    assert_eq!(out.matches("ERROR: Please select a correct option.").count(), 1);
}

#[test]
fn test_two_player_match_first_to_one() {
    for seed in 0..4 {
        let mut app = App::new(&cli(seed, None), quiet_config());
        // Names, match length, then the starter takes the top row.
        let mut io = console("Ada\nGrace\n1\n1\n4\n2\n5\n3\n");

        let champion = app.play_match(Mode::Multi, &mut io).unwrap();
        assert!(champion == "Ada" || champion == "Grace");

        let out = String::from_utf8(io.into_output()).unwrap();
        assert!(out.contains(&format!("{} wins this turn!", champion)));
        assert!(out.contains(&format!("{} wins the match!", champion)));
        assert!(out.contains(&format!("{} : 1", champion)));
    }
}

#[test]
fn test_two_player_names_must_differ() {
    let mut app = App::new(&cli(3, Some(1)), quiet_config());
    let mut io = console("Ada\nada\nGrace\n1\n4\n2\n5\n3\n");

    app.play_match(Mode::Multi, &mut io).unwrap();

    let out = String::from_utf8(io.into_output()).unwrap();
    assert!(out.contains("That name is already taken."));
}

#[test]
fn test_draws_repeat_until_someone_wins() {
    let mut app = App::new(&cli(5, Some(1)), quiet_config());
    // Turn 1 is a dead position after five moves, turn 2 a top-row win.
    let mut io = console("Ada\nGrace\n1\n2\n3\n5\n8\n1\n4\n2\n5\n3\n");

    app.play_match(Mode::Multi, &mut io).unwrap();

    let out = String::from_utf8(io.into_output()).unwrap();
    assert!(out.contains("It's a draw! No one can win this turn."));
    assert_eq!(out.matches("wins this turn!").count(), 1);
}

#[test]
fn test_computer_never_loses_a_single_player_match() {
    // The human always takes the lowest free cell.
    let cells: String = (0..40).map(|_| "1\n2\n3\n4\n5\n6\n7\n8\n9\n").collect();
    for seed in 0..3 {
        let mut app = App::new(&cli(seed, Some(1)), quiet_config());
        let mut io = console(&format!("Ada\n{}", cells));

        let result = app.play_match(Mode::Single, &mut io);
        let out = String::from_utf8(io.into_output()).unwrap();

        assert!(!out.contains("Ada wins this turn!"), "seed {seed}");
        if let Ok(champion) = result {
            assert_eq!(champion, "Computer");
            assert!(out.contains("Computer is thinking..."));
        }
    }
}
