//! Match bookkeeping that outlives a single turn.

use crate::turn::{Turn, TurnOutcome};
use crate::Symbol;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{info, instrument};

/// A match between two named players, first to `target` turn wins.
///
/// Seat order is shuffled once when the match is created and the symbols are
/// assigned at random; both stay fixed for every turn of the match.
#[derive(Debug, Clone, Getters)]
pub struct MatchSession {
    /// Player names in seat order.
    players: [String; 2],
    /// Symbol of each seat.
    symbols: [Symbol; 2],
    /// Turn wins of each seat.
    scores: [u32; 2],
    /// Turn wins needed to take the match.
    target: u32,
    /// Seat that starts the next turn.
    starter: usize,
}

impl MatchSession {
    /// Creates a match, shuffling seats and assigning symbols with `rng`.
    ///
    /// The first seat after shuffling starts the first turn.
    #[instrument(skip_all)]
    pub fn new<R: Rng + ?Sized>(
        first: impl AsRef<str>,
        second: impl AsRef<str>,
        target: u32,
        rng: &mut R,
    ) -> Self {
        let mut players = [first.as_ref().to_string(), second.as_ref().to_string()];
        players.shuffle(rng);

        let symbol = if rng.random_bool(0.5) {
            Symbol::X
        } else {
            Symbol::O
        };
        let session = Self::with_seats(players, symbol, target);
        info!(players = ?session.players, symbols = ?session.symbols, target_wins = target, "Match created");
        session
    }

    /// Creates a match with a fixed seat order; `first_symbol` goes to seat 0.
    pub fn with_seats(players: [String; 2], first_symbol: Symbol, target: u32) -> Self {
        Self {
            players,
            symbols: [first_symbol, first_symbol.opponent()],
            scores: [0, 0],
            target,
            starter: 0,
        }
    }

    /// Seat playing `symbol`.
    pub fn seat_of(&self, symbol: Symbol) -> usize {
        if self.symbols[0] == symbol { 0 } else { 1 }
    }

    /// Name of the player using `symbol`.
    pub fn name_of(&self, symbol: Symbol) -> &str {
        &self.players[self.seat_of(symbol)]
    }

    /// Score of the named player, if they are in this match.
    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.players
            .iter()
            .position(|p| p == name)
            .map(|seat| self.scores[seat])
    }

    /// Starts a turn on a fresh board, the current starter to move.
    pub fn start_turn(&self) -> Turn {
        Turn::new(self.symbols[self.starter])
    }

    /// Records a finished turn and returns the winner's name, if any.
    ///
    /// The winner starts the next turn; after a draw the starter repeats.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: TurnOutcome) -> Option<&str> {
        match outcome {
            TurnOutcome::Won { winner, .. } => {
                let seat = self.seat_of(winner);
                self.scores[seat] += 1;
                self.starter = seat;
                info!(winner = %self.players[seat], scores = ?self.scores, "Turn won");
                Some(self.players[seat].as_str())
            }
            TurnOutcome::ForcedDraw | TurnOutcome::Tie => {
                info!(scores = ?self.scores, "Turn drawn");
                None
            }
            TurnOutcome::Continue { .. } => None,
        }
    }

    /// Name of the player who reached the target, once someone has.
    pub fn champion(&self) -> Option<&str> {
        self.scores
            .iter()
            .position(|s| *s >= self.target)
            .map(|seat| self.players[seat].as_str())
    }

    /// Whether the match is over.
    pub fn is_over(&self) -> bool {
        self.champion().is_some()
    }
}
