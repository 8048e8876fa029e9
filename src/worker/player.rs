//! Tic-tac-toe player worker
//!
//! A player loops on the turn token: wait for its own turn, place one mark,
//! hand the token back to the coordinator. It exits as soon as the token is
//! terminated, without touching the board again.
//!
//! A player that panics mid-turn terminates the token while unwinding, so
//! the coordinator is released instead of waiting on a turn that never ends.

use crate::config::GameConfig;
use crate::game::strategy::{build_chooser, MoveChooser, ScriptedChooser};
use crate::game::{PlayerId, Turn, TurnToken};
use std::thread;

/// One of the two players
pub struct Player {
    id: PlayerId,
    chooser: Box<dyn MoveChooser>,
}

impl Player {
    pub fn new(id: PlayerId, chooser: Box<dyn MoveChooser>) -> Self {
        Self { id, chooser }
    }

    /// Player configured from `config`: its strategy, its seed, and any
    /// scripted opening moves
    pub fn from_config(id: PlayerId, config: &GameConfig) -> Self {
        let chooser = build_chooser(config.strategy, config.player_seed(id));
        let script = config.script(id);
        let chooser = if script.is_empty() {
            chooser
        } else {
            Box::new(ScriptedChooser::new(script.iter().copied(), chooser))
        };
        Self::new(id, chooser)
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Play until the game is terminated
    ///
    /// Returns the number of marks placed.
    pub fn run(mut self, token: &TurnToken) -> usize {
        let _unwind = TerminateOnUnwind { token, player: self.id };
        let mut placed = 0;

        while let Some(mut guard) = token.acquire(Turn::Player(self.id)) {
            match self.chooser.choose(guard.board()) {
                Some(cell) => match guard.place(self.id, cell) {
                    Ok(()) => {
                        placed += 1;
                        tracing::debug!(player = %self.id, cell, "mark placed");
                    }
                    Err(err) => {
                        tracing::error!(player = %self.id, error = %err, "chooser returned an unusable cell");
                    }
                },
                None => {
                    tracing::warn!(player = %self.id, "turn granted on a full board");
                }
            }

            guard.hand_off(Turn::Coordinator);
        }

        tracing::debug!(player = %self.id, placed, "player exiting");
        placed
    }
}

/// Terminates the token if the player thread unwinds
struct TerminateOnUnwind<'a> {
    token: &'a TurnToken,
    player: PlayerId,
}

impl Drop for TerminateOnUnwind<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            tracing::error!(player = %self.player, "player panicked; terminating the game");
            self.token.terminate();
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
