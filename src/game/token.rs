//! Turn token: the hand-off primitive between the coordinator and players
//!
//! The token names the single agent allowed to act. A player may mutate the
//! board only while the token names it; the coordinator may inspect and
//! dispatch only while the token names the coordinator.
//!
//! # Blocking hand-off
//!
//! The token and the state it protects live behind one mutex, and a condition
//! variable wakes waiters whenever the token changes hands. [`TurnToken::acquire`]
//! blocks until the token names the caller and returns a [`TurnGuard`]; the
//! guard is the only way to reach the board, and [`TurnGuard::hand_off`]
//! passes the token on. Because the holder publishes the token with a mutex
//! release and the next holder observes it with an acquire, every board write
//! made before a hand-off is visible after it.
//!
//! # Termination
//!
//! [`TurnToken::terminate`] raises a cancellation flag and moves the token to
//! [`Turn::Terminated`] in one step. Waiters re-check both on every wake-up,
//! so no waiter can miss the signal.

use super::board::{Board, BoardError, Mark};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Player identity; player 1 plays X and moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn mark(self) -> Mark {
        match self {
            PlayerId::One => Mark::X,
            PlayerId::Two => Mark::O,
        }
    }

    /// Numeric id (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} ({})", self.number(), self.mark())
    }
}

/// Current holder of the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Coordinator,
    Player(PlayerId),
    /// Game over; every waiter must exit
    Terminated,
}

/// One mark placed by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: PlayerId,
    pub cell: usize,
}

#[derive(Debug)]
struct TableState {
    turn: Turn,
    board: Board,
    moves: Vec<Move>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            turn: Turn::Coordinator,
            board: Board::new(),
            moves: Vec::new(),
        }
    }
}

/// Shared turn token guarding the board
#[derive(Debug, Default)]
pub struct TurnToken {
    state: Mutex<TableState>,
    changed: Condvar,
    cancelled: AtomicBool,
}

impl TurnToken {
    /// Token held by the coordinator over an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the token names `holder`
    ///
    /// Returns `None` once the game has been terminated, whether that happened
    /// before the call, during the wait, or between wake-up and return.
    pub fn acquire(&self, holder: Turn) -> Option<TurnGuard<'_>> {
        let mut state = self.lock();
        loop {
            if self.is_cancelled() || state.turn == Turn::Terminated {
                return None;
            }
            if state.turn == holder {
                return Some(TurnGuard { token: self, state });
            }
            // A poisoned wait still hands back the lock; re-check either way
            state = self
                .changed
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// End the game and wake every waiter
    pub fn terminate(&self) {
        self.cancelled.store(true, Ordering::Release);
        let mut state = self.lock();
        state.turn = Turn::Terminated;
        drop(state);
        self.changed.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Current holder (a racy observation, for diagnostics and tests)
    pub fn current(&self) -> Turn {
        self.lock().turn
    }

    /// Copy of the board
    pub fn board(&self) -> Board {
        self.lock().board
    }

    /// Every move made so far, in order
    pub fn moves(&self) -> Vec<Move> {
        self.lock().moves.clone()
    }

    fn lock(&self) -> MutexGuard<'_, TableState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive access granted to the token holder
///
/// Dropping the guard without [`hand_off`](TurnGuard::hand_off) keeps the
/// token with the current holder.
pub struct TurnGuard<'a> {
    token: &'a TurnToken,
    state: MutexGuard<'a, TableState>,
}

impl TurnGuard<'_> {
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Place `player`'s mark and record the move
    pub fn place(&mut self, player: PlayerId, cell: usize) -> Result<(), BoardError> {
        self.state.board.place(cell, player.mark())?;
        self.state.moves.push(Move { player, cell });
        Ok(())
    }

    pub fn turn(&self) -> Turn {
        self.state.turn
    }

    /// Give the token to `next` and wake the waiters
    pub fn hand_off(self, next: Turn) {
        let TurnGuard { token, mut state } = self;
        state.turn = next;
        drop(state);
        token.changed.notify_all();
    }
}

impl fmt::Debug for TurnGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnGuard")
            .field("turn", &self.state.turn)
            .finish_non_exhaustive()
    }
}
