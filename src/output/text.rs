//! Human-readable text output
//!
//! Every line either program prints on stdout is built here, so the exact
//! console format lives in one place. Note the trailing space after each
//! prime and each board cell: the format is kept byte-for-byte.

use crate::error::EnsembleError;
use crate::game::{Board, Mark, Outcome};
use crate::partition::Subrange;

/// Printed once every prime worker has been joined
pub const ALL_WORKERS_FINISHED: &str = "Main Thread: All workers finished. Primes found:";

/// Header before the first board
pub const INITIAL_BOARD: &str = "Initial Board:";

/// Usage line for `program`
pub fn usage(program: &str) -> String {
    format!("Usage: {} <min> <max> <thread_count>", program)
}

/// Lines printed for an argument error
///
/// `JoinInterrupted` is not an argument error and produces no stdout text;
/// it is reported through the log instead.
pub fn argument_error_lines(err: &EnsembleError, program: &str) -> Vec<String> {
    match err {
        EnsembleError::Usage => vec![usage(program)],
        EnsembleError::Parse { .. } => {
            vec!["Error: All arguments must be valid integers.".to_string()]
        }
        EnsembleError::InvalidRange { .. } | EnsembleError::InvalidWorkerCount { .. } => vec![
            "Error: Invalid arguments.".to_string(),
            "Thread count must be >= 1 and max must be >= min.".to_string(),
        ],
        EnsembleError::JoinInterrupted { .. } => Vec::new(),
    }
}

/// Worker start announcement
pub fn worker_announcement(id: usize, range: Subrange) -> String {
    format!("Thread {} searching range [{}, {}]", id, range.start, range.end)
}

/// Primes on one line, each followed by a space
pub fn prime_list(primes: &[i64]) -> String {
    primes.iter().map(|p| format!("{} ", p)).collect()
}

/// Final count line
pub fn prime_count(count: usize) -> String {
    format!("Main Thread: {} prime numbers found.", count)
}

/// Header naming the player whose turn is beginning
pub fn turn_header(mark: Mark) -> String {
    format!("Player {}'s Turn:", mark)
}

/// Board grid (see [`Board`]'s `Display`)
pub fn board(board: &Board) -> String {
    board.to_string()
}

/// Result announcement, or `None` while the game is undecided
pub fn outcome(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::XWins => Some("WINNER: Player X wins! :D"),
        Outcome::OWins => Some("WINNER: Player O wins! :D"),
        Outcome::Draw => Some("DRAW: It's a tie!"),
        Outcome::Undecided => None,
    }
}
