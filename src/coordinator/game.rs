//! Tic-tac-toe coordinator
//!
//! The coordinator owns the game flow. It starts both players, then cycles:
//!
//! 1. wait until the turn token comes back to the coordinator;
//! 2. print the header of the player whose turn is *beginning*, and the board;
//! 3. check the board; on a win or draw print the result and stop;
//! 4. otherwise hand the token to that player and flip to the other one.
//!
//! X always opens, so the first labeled board is the empty one under
//! "Player X's Turn:". Once the game is decided the token is terminated,
//! which releases both players, and the coordinator joins them.

use super::report_join_failure;
use crate::config::GameConfig;
use crate::game::{check_outcome, Board, Move, Outcome, PlayerId, Turn, TurnToken};
use crate::output::text;
use crate::util::console::Console;
use crate::worker::Player;
use crate::Result;
use anyhow::Context;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Result of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: Outcome,
    /// Every mark placed, in order
    pub moves: Vec<Move>,
    /// Board as seen at each coordinator observation, in order
    pub observations: Vec<Board>,
}

impl GameReport {
    pub fn final_board(&self) -> Board {
        self.observations.last().copied().unwrap_or_default()
    }
}

/// Runs the game ensemble
#[derive(Debug)]
pub struct GameCoordinator {
    console: Console,
}

impl GameCoordinator {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Play a game between players built from `config`
    pub fn play(&self, config: &GameConfig) -> Result<GameReport> {
        let x = Player::from_config(PlayerId::One, config);
        let o = Player::from_config(PlayerId::Two, config);
        self.run(x, o)
    }

    /// Play a game between `x` (player 1) and `o` (player 2)
    pub fn run(&self, x: Player, o: Player) -> Result<GameReport> {
        anyhow::ensure!(
            x.id() == PlayerId::One && o.id() == PlayerId::Two,
            "players must be player 1 (X) and player 2 (O)"
        );

        let token = Arc::new(TurnToken::new());
        let mut players = Vec::with_capacity(2);
        for player in [x, o] {
            match spawn_player(player, &token) {
                Ok(handle) => players.push(handle),
                Err(err) => {
                    // Release any player already waiting before bailing out
                    token.terminate();
                    join_players(players);
                    return Err(err);
                }
            }
        }

        let result = self.coordinate(&token);

        token.terminate();
        join_players(players);

        let outcome = result?;
        let report = GameReport {
            outcome: outcome.0,
            moves: token.moves(),
            observations: outcome.1,
        };
        tracing::debug!(outcome = %report.outcome, moves = report.moves.len(), "game finished");
        Ok(report)
    }

    /// Turn loop; returns once the game is decided
    fn coordinate(&self, token: &TurnToken) -> Result<(Outcome, Vec<Board>)> {
        let mut observations = Vec::new();
        let mut next = PlayerId::One;

        self.console.line(text::INITIAL_BOARD);
        self.console.line(text::board(&token.board()));

        loop {
            let guard = token
                .acquire(Turn::Coordinator)
                .context("turn token terminated while the coordinator was waiting")?;

            let board = *guard.board();
            observations.push(board);

            self.console.line(text::turn_header(next.mark()));
            self.console.line(text::board(&board));

            let outcome = check_outcome(&board);
            if let Some(announcement) = text::outcome(outcome) {
                self.console.line(announcement);
                return Ok((outcome, observations));
            }

            guard.hand_off(Turn::Player(next));
            next = next.other();
        }
    }
}

fn spawn_player(player: Player, token: &Arc<TurnToken>) -> Result<JoinHandle<usize>> {
    let token = Arc::clone(token);
    let name = format!("player-{}", player.id().mark());
    thread::Builder::new()
        .name(name)
        .spawn(move || player.run(&token))
        .context("Failed to spawn player thread")
}

fn join_players(players: Vec<JoinHandle<usize>>) {
    for handle in players {
        let name = handle.thread().name().unwrap_or("player").to_string();
        match handle.join() {
            Ok(placed) => tracing::debug!(player = %name, placed, "player joined"),
            Err(_) => report_join_failure(name),
        }
    }
}
