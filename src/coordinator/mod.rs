//! Coordinator module
//!
//! Orchestrates workers and reports results.
//!
//! - [`prime::PrimeCoordinator`]: partitions a range, spawns one prime worker
//!   per subrange, joins them all, then sorts and prints the primes
//! - [`game::GameCoordinator`]: runs two player threads and alternates the
//!   turn token between them until the game ends

pub mod game;
pub mod prime;

pub use game::{GameCoordinator, GameReport};
pub use prime::{PrimeCoordinator, PrimeReport};

use crate::error::EnsembleError;

/// Log a worker that could not be joined cleanly
///
/// Never fatal: the coordinator keeps joining the remaining workers.
pub(crate) fn report_join_failure(worker: String) {
    let err = EnsembleError::JoinInterrupted { worker };
    tracing::error!(error = %err, "worker terminated abnormally; continuing with the remaining workers");
}
