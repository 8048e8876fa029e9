//! Move selection strategies
//!
//! Each player owns one [`MoveChooser`]. The chooser only picks a cell; the
//! player writes it while holding the turn token.
//!
//! # Strategies
//!
//! - **Rejection**: draw a cell in `0..9` uniformly until it is empty
//! - **Enumerate**: list the empty cells and pick one uniformly
//! - **Scripted**: replay a fixed list of cells, then defer to another chooser
//!
//! Rejection and enumeration pick from the same distribution; they differ
//! only in how many random numbers they consume. Both use xoshiro256++ and
//! can be seeded for reproducible games.
//!
//! # Example
//!
//! ```
//! use ensemble::game::board::Board;
//! use ensemble::game::strategy::{MoveChooser, RejectionSampler};
//!
//! let mut chooser = RejectionSampler::with_seed(7);
//! let cell = chooser.choose(&Board::new()).unwrap();
//! assert!(cell < 9);
//! ```

use super::board::{Board, CELLS};
use crate::config::MoveStrategy;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::VecDeque;

/// Picks the cell a player marks next
///
/// Implementations must return an empty cell of `board`, or `None` only when
/// the board is full. `Send` so the chooser can move into the player thread.
pub trait MoveChooser: Send {
    fn choose(&mut self, board: &Board) -> Option<usize>;
}

/// Uniform draws over `0..9`, retried until an empty cell comes up
///
/// Terminates with probability 1 whenever at least one cell is empty.
pub struct RejectionSampler {
    rng: Xoshiro256PlusPlus,
}

impl RejectionSampler {
    /// Seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RejectionSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RejectionSampler {
    fn choose(&mut self, board: &Board) -> Option<usize> {
        if board.is_full() {
            return None;
        }
        loop {
            let cell = self.rng.gen_range(0..CELLS);
            if board.is_empty_cell(cell) {
                return Some(cell);
            }
        }
    }
}

/// Uniform choice among the currently empty cells
pub struct EmptyCellPicker {
    rng: Xoshiro256PlusPlus,
}

impl EmptyCellPicker {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for EmptyCellPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for EmptyCellPicker {
    fn choose(&mut self, board: &Board) -> Option<usize> {
        board.empty_cells().choose(&mut self.rng).copied()
    }
}

/// Replays scripted cells in order
///
/// A scripted cell that is already taken is skipped. Once the script is
/// exhausted the fallback chooser decides.
pub struct ScriptedChooser {
    script: VecDeque<usize>,
    fallback: Box<dyn MoveChooser>,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = usize>, fallback: Box<dyn MoveChooser>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    /// Scripted cells not yet played
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveChooser for ScriptedChooser {
    fn choose(&mut self, board: &Board) -> Option<usize> {
        while let Some(cell) = self.script.pop_front() {
            if board.is_empty_cell(cell) {
                return Some(cell);
            }
            tracing::debug!(cell, "scripted cell unavailable, skipping");
        }
        self.fallback.choose(board)
    }
}

/// Build the chooser for `strategy`, seeded when `seed` is given
pub fn build_chooser(strategy: MoveStrategy, seed: Option<u64>) -> Box<dyn MoveChooser> {
    match (strategy, seed) {
        (MoveStrategy::Rejection, Some(seed)) => Box::new(RejectionSampler::with_seed(seed)),
        (MoveStrategy::Rejection, None) => Box::new(RejectionSampler::new()),
        (MoveStrategy::Enumerate, Some(seed)) => Box::new(EmptyCellPicker::with_seed(seed)),
        (MoveStrategy::Enumerate, None) => Box::new(EmptyCellPicker::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Mark;

    fn board_with(cells: &[usize]) -> Board {
        let mut board = Board::new();
        for (i, &cell) in cells.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(cell, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_rejection_picks_empty_cells() {
        let mut chooser = RejectionSampler::with_seed(42);
        let board = board_with(&[0, 1, 2, 3, 5, 6, 7, 8]);
        for _ in 0..50 {
            assert_eq!(chooser.choose(&board), Some(4));
        }
    }

    #[test]
    fn test_enumerate_picks_empty_cells() {
        let mut chooser = EmptyCellPicker::with_seed(42);
        let board = board_with(&[0, 4, 8]);
        for _ in 0..100 {
            let cell = chooser.choose(&board).unwrap();
            assert!(board.is_empty_cell(cell));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let board = board_with(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(RejectionSampler::with_seed(1).choose(&board), None);
        assert_eq!(EmptyCellPicker::with_seed(1).choose(&board), None);
    }

    #[test]
    fn test_seeded_choosers_repeat() {
        let board = Board::new();
        let mut a = RejectionSampler::with_seed(12345);
        let mut b = RejectionSampler::with_seed(12345);
        for _ in 0..10 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }

    #[test]
    fn test_enumerate_covers_all_cells() {
        let mut chooser = EmptyCellPicker::with_seed(9);
        let board = Board::new();
        let mut seen = [false; CELLS];
        for _ in 0..1000 {
            seen[chooser.choose(&board).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_then_fallback() {
        let mut chooser =
            ScriptedChooser::new([0, 1], Box::new(EmptyCellPicker::with_seed(3)));
        let mut board = Board::new();

        assert_eq!(chooser.choose(&board), Some(0));
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::O).unwrap();

        // Cell 1 got taken, so the script is exhausted and the fallback picks
        let cell = chooser.choose(&board).unwrap();
        assert!(board.is_empty_cell(cell));
        assert_eq!(chooser.remaining(), 0);
    }

    #[test]
    fn test_build_chooser() {
        let board = board_with(&[0, 1, 2, 3, 4, 5, 6, 7]);
        for strategy in [MoveStrategy::Rejection, MoveStrategy::Enumerate] {
            let mut chooser = build_chooser(strategy, Some(5));
            assert_eq!(chooser.choose(&board), Some(8));
            let mut chooser = build_chooser(strategy, None);
            assert_eq!(chooser.choose(&board), Some(8));
        }
    }
}
