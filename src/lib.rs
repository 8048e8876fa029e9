//! Ensemble - small coordinator/worker thread programs
//!
//! Two command-line programs built on the same pattern: a coordinator
//! thread hands work to a fixed set of worker threads, waits for them, and
//! reports.
//!
//! # Architecture
//!
//! - **Prime finder**: the range `[min, max]` is split into contiguous
//!   subranges, one worker tests each for primality, and the coordinator
//!   sorts and prints the combined result after joining every worker
//! - **Tic-tac-toe**: two player threads and the coordinator pass a single
//!   turn token around; only the holder may touch the board
//! - **Config**: CLI flags over an optional TOML file, validated up front
//! - **Logging**: `tracing` diagnostics on stderr, program output on stdout

pub mod config;
pub mod coordinator;
pub mod error;
pub mod game;
pub mod output;
pub mod partition;
pub mod prime;
pub mod util;
pub mod worker;

// Re-export commonly used types
pub use config::{GameConfig, PrimeConfig};
pub use coordinator::{GameCoordinator, GameReport, PrimeCoordinator, PrimeReport};
pub use error::EnsembleError;

/// Result type used throughout the crate
pub type Result<T> = anyhow::Result<T>;
