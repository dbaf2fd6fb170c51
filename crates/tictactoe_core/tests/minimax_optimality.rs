//! Optimality checks for the computer opponent.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{
    Board, ComputerOpponent, MatchSession, Position, Symbol, TurnOutcome, available_moves,
    best_move, check_winner, is_forced_draw,
};

fn create_board(moves: &[((usize, usize), Symbol)]) -> Board {
    let mut board = Board::new();
    for &((row, col), symbol) in moves {
        let pos = Position::from_row_col(row, col).expect("Bad coordinate in test setup");
        board.place(pos, symbol);
    }
    board
}

fn assert_best_move(board: &mut Board, computer: Symbol, expected: (usize, usize), msg: &str) {
    let mut rng = StdRng::seed_from_u64(0);
    let choice = best_move(board, computer, computer.opponent(), false, &mut rng);
    let coords = choice.map(|p| (p.row(), p.col()));
    assert_eq!(coords, Some(expected), "{}", msg);
}

#[test]
fn test_win_in_1() {
    let mut board = create_board(&[
        ((0, 0), Symbol::X),
        ((0, 1), Symbol::X),
        ((1, 0), Symbol::O),
        ((1, 1), Symbol::O),
    ]);
    assert_best_move(&mut board, Symbol::X, (0, 2), "Minimax failed to find immediate win");
}

#[test]
fn test_block_in_1() {
    let mut board = create_board(&[
        ((0, 0), Symbol::O),
        ((0, 1), Symbol::O),
        ((1, 1), Symbol::X),
    ]);
    assert_best_move(&mut board, Symbol::X, (0, 2), "Minimax failed to block immediate loss");
}

#[test]
fn test_prefers_win_over_block() {
    // O O .
    // X X .
    // O . .
    let mut board = create_board(&[
        ((0, 0), Symbol::O),
        ((0, 1), Symbol::O),
        ((1, 0), Symbol::X),
        ((1, 1), Symbol::X),
        ((2, 0), Symbol::O),
    ]);
    assert_best_move(&mut board, Symbol::X, (1, 2), "Minimax should win rather than block");
}

#[test]
fn test_symbol_agnostic() {
    let mut board = create_board(&[
        ((2, 0), Symbol::O),
        ((2, 1), Symbol::O),
        ((0, 0), Symbol::X),
        ((0, 2), Symbol::X),
    ]);
    assert_best_move(&mut board, Symbol::O, (2, 2), "O should complete the bottom row");
}

#[test]
fn test_available_moves_count_matches_occupancy() {
    let board = create_board(&[((0, 0), Symbol::X), ((1, 2), Symbol::O), ((2, 2), Symbol::X)]);
    let moves = available_moves(&board);
    assert_eq!(moves.len(), 9 - board.occupied_count());
    assert!(moves.iter().all(|p| board.is_empty(*p)));
}

#[test]
fn test_forced_draw_examples() {
    // X O X
    // . O .
    // . X .
    let mut dead = create_board(&[
        ((0, 0), Symbol::X),
        ((0, 1), Symbol::O),
        ((0, 2), Symbol::X),
        ((1, 1), Symbol::O),
        ((2, 1), Symbol::X),
    ]);
    assert!(is_forced_draw(&mut dead, Symbol::X, Symbol::O));

    let mut open = create_board(&[
        ((0, 0), Symbol::X),
        ((0, 1), Symbol::X),
        ((1, 0), Symbol::O),
        ((1, 1), Symbol::O),
        ((2, 2), Symbol::X),
    ]);
    assert!(!is_forced_draw(&mut open, Symbol::X, Symbol::O));
}

#[test]
fn test_optimal_self_play_draws() {
    for seed in 0..8 {
        let mut computer = ComputerOpponent::seeded(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = MatchSession::new("Computer A", "Computer B", 1, &mut rng);
        let mut turn = session.start_turn();

        let outcome = loop {
            let pos = turn.suggest_move(&mut computer).expect("turn still running");
            let outcome = turn.play(pos).expect("suggested move is legal");
            if outcome.is_finished() {
                break outcome;
            }
        };

        assert!(
            matches!(outcome, TurnOutcome::ForcedDraw | TurnOutcome::Tie),
            "seed {seed} ended in {outcome:?}"
        );
        assert!(!check_winner(turn.board(), Symbol::X));
        assert!(!check_winner(turn.board(), Symbol::O));
        assert_eq!(session.record(outcome), None);
        assert!(!session.is_over());
    }
}

#[test]
fn test_computer_never_loses_to_first_available_player() {
    for seed in 0..4 {
        let mut computer = ComputerOpponent::seeded(seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let session = MatchSession::new("Human", "Computer", 1, &mut rng);
        let computer_symbol = session.symbols()[session
            .players()
            .iter()
            .position(|p| p == "Computer")
            .expect("computer seated")];
        let mut turn = session.start_turn();

        let outcome = loop {
            let pos = if turn.to_move() == computer_symbol {
                turn.suggest_move(&mut computer).expect("turn still running")
            } else {
                available_moves(turn.board())[0]
            };
            let outcome = turn.play(pos).expect("legal move");
            if outcome.is_finished() {
                break outcome;
            }
        };

        if let TurnOutcome::Won { winner, .. } = outcome {
            assert_eq!(winner, computer_symbol, "seed {seed}: computer lost");
        }
    }
}
