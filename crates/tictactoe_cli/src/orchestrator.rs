//! Game orchestration between players.

use crate::config::GameConfig;
use crate::console::Console;
use crate::players::Player;
use crate::render::Renderer;
use anyhow::{Result, anyhow};
use tictactoe_core::{MatchSession, Position, Turn, TurnOutcome};
use tracing::{debug, info, instrument};

/// Plays turns of a match until someone reaches the target.
pub struct MatchRunner {
    session: MatchSession,
    players: [Box<dyn Player>; 2],
    renderer: Renderer,
    config: GameConfig,
}

impl MatchRunner {
    /// Creates a runner.
    ///
    /// `players` may come in any order; each is seated by name to match
    /// `session`.
    pub fn new(
        session: MatchSession,
        players: [Box<dyn Player>; 2],
        renderer: Renderer,
        config: GameConfig,
    ) -> Result<Self> {
        let [a, b] = players;
        let players = if a.name() == session.players()[0] {
            [a, b]
        } else {
            [b, a]
        };
        if players[0].name() != session.players()[0] || players[1].name() != session.players()[1]
        {
            return Err(anyhow!("Players do not match the session's seats"));
        }
        Ok(Self {
            session,
            players,
            renderer,
            config,
        })
    }

    /// Returns the match session.
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// Plays turns until a champion emerges and returns their name.
    #[instrument(skip_all, fields(target_wins = *self.session.target()))]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<String> {
        info!("Starting match");
        while !self.session.is_over() {
            self.play_turn(console)?;
        }

        let champion = self
            .session
            .champion()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Match ended without a champion"))?;
        info!(champion = %champion, "Match finished");

        let banner = format!("{} wins the match!", champion);
        console.show(&self.renderer.summary(&self.session, &banner))?;
        console.pause(self.config.result_pause());
        Ok(champion)
    }

    /// Plays one turn to its end and records the result in the session.
    #[instrument(skip_all)]
    pub fn play_turn(&mut self, console: &mut dyn Console) -> Result<TurnOutcome> {
        let mut turn = self.session.start_turn();
        self.show(console, &turn, None, &[])?;

        loop {
            let seat = self.session.seat_of(turn.to_move());
            let player = &mut self.players[seat];
            debug!(player = %player.name(), "Waiting for move");
            let pos = player.get_move(&mut turn, console)?;

            let outcome = turn.play(pos)?;
            let (banner, highlight) = match outcome {
                TurnOutcome::Continue { .. } => {
                    self.show(console, &turn, None, &[])?;
                    continue;
                }
                TurnOutcome::Won { winner, line } => {
                    let banner = format!("{} wins this turn!", self.session.name_of(winner));
                    (banner, line.to_vec())
                }
                TurnOutcome::ForcedDraw => {
                    ("It's a draw! No one can win this turn.".to_string(), Vec::new())
                }
                TurnOutcome::Tie => ("It's a tie! No one wins this turn.".to_string(), Vec::new()),
            };

            self.session.record(outcome);
            self.show(console, &turn, Some(&banner), &highlight)?;
            console.pause(self.config.result_pause());
            return Ok(outcome);
        }
    }

    fn show(
        &self,
        console: &mut dyn Console,
        turn: &Turn,
        banner: Option<&str>,
        highlight: &[Position],
    ) -> Result<()> {
        console.show(&self.renderer.frame(&self.session, turn.board(), banner, highlight))
    }
}
