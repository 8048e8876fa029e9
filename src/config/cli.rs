//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Result delivery mode for prime workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SinkMode {
    /// One shared, mutex-guarded sink (default)
    Shared,
    /// Per-worker buffers merged after join
    PerWorker,
}

/// Player move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoveStrategy {
    /// Random cells until an empty one is drawn (default)
    Rejection,
    /// Uniform choice among empty cells
    Enumerate,
}

/// Parallel prime number finder
///
/// Positionals are taken as raw strings: missing and malformed values are
/// reported by the validator with the program's own messages and exit codes.
/// They accept leading hyphens, so `-abc` is a malformed integer rather than
/// an unknown flag; negative numbers parse the same way.
#[derive(Parser, Debug)]
#[command(name = "prime-finder")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct PrimeCli {
    /// Lower bound of the search range (inclusive)
    #[arg(value_name = "MIN", allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Upper bound of the search range (inclusive)
    #[arg(value_name = "MAX", allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Number of worker threads (clamped to the range size)
    #[arg(value_name = "THREAD_COUNT", allow_hyphen_values = true)]
    pub thread_count: Option<String>,

    /// Extra positional arguments are accepted and ignored
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// How workers deliver primes to the coordinator
    #[arg(long, value_enum)]
    pub sink: Option<SinkMode>,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "ENSEMBLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl PrimeCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Three-thread tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tic-tac-toe")]
#[command(version, about, long_about = None)]
pub struct GameCli {
    /// Move selection strategy for both players
    #[arg(long, value_enum)]
    pub strategy: Option<MoveStrategy>,

    /// RNG seed (player X uses SEED, player O uses SEED + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cells X plays first, e.g. "0,1,2" (cells 0-8, row-major)
    #[arg(long, value_name = "CELLS")]
    pub x_moves: Option<String>,

    /// Cells O plays first, e.g. "3,4"
    #[arg(long, value_name = "CELLS")]
    pub o_moves: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "ENSEMBLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl GameCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
