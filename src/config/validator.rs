//! Configuration validation

use super::*;
use crate::config::cli::PrimeCli;
use crate::config::cli_convert::parse_integer;
use crate::error::EnsembleError;
use crate::game::board::CELLS;
use crate::partition::effective_workers;
use anyhow::Result;

/// Validate and normalize the prime finder arguments
///
/// Checks run in the order the program reports them: missing positionals,
/// then non-integers, then the semantic checks. The worker count is clamped
/// to the range size so every worker gets at least one value.
///
/// # Errors
///
/// - [`EnsembleError::Usage`] when fewer than three positionals were given
/// - [`EnsembleError::Parse`] for a non-integer positional
/// - [`EnsembleError::InvalidWorkerCount`] when `thread_count < 1`
/// - [`EnsembleError::InvalidRange`] when `max < min`
pub fn validate_prime_args(
    cli: &PrimeCli,
    settings: &PrimeSettings,
) -> Result<PrimeConfig, EnsembleError> {
    let (Some(min), Some(max), Some(thread_count)) = (&cli.min, &cli.max, &cli.thread_count)
    else {
        return Err(EnsembleError::Usage);
    };

    let min = parse_integer(min)?;
    let max = parse_integer(max)?;
    let thread_count = parse_integer(thread_count)?;

    validate_prime_bounds(min, max, thread_count, settings)
}

/// Semantic checks and normalization on already-parsed values
pub fn validate_prime_bounds(
    min: i64,
    max: i64,
    thread_count: i64,
    settings: &PrimeSettings,
) -> Result<PrimeConfig, EnsembleError> {
    if thread_count < 1 {
        return Err(EnsembleError::InvalidWorkerCount { count: thread_count });
    }
    if max < min {
        return Err(EnsembleError::InvalidRange { lo: min, hi: max });
    }

    let requested = usize::try_from(thread_count).unwrap_or(usize::MAX);
    let threads = effective_workers(min, max, requested);
    if threads < requested {
        tracing::debug!(requested, threads, "worker count clamped to range size");
    }

    Ok(PrimeConfig {
        min,
        max,
        threads,
        sink: settings.sink,
    })
}

/// Validate a game configuration
///
/// Scripted cells must be on the board and not repeat within one player's
/// script. A cell scripted for both players is allowed: whoever gets there
/// second skips it.
pub fn validate_game_config(config: &GameConfig) -> Result<()> {
    for (name, script) in [("x_moves", &config.x_moves), ("o_moves", &config.o_moves)] {
        validate_script(name, script)?;
    }

    let shared: Vec<usize> = config
        .x_moves
        .iter()
        .copied()
        .filter(|cell| config.o_moves.contains(cell))
        .collect();
    if !shared.is_empty() {
        tracing::warn!(?shared, "cells scripted for both players; the later move is skipped");
    }

    Ok(())
}

fn validate_script(name: &str, script: &[usize]) -> Result<()> {
    if script.len() > CELLS {
        anyhow::bail!("{} lists {} cells, the board only has {}", name, script.len(), CELLS);
    }

    for (i, &cell) in script.iter().enumerate() {
        if cell >= CELLS {
            anyhow::bail!("{} cell {} is outside the board (0-{})", name, cell, CELLS - 1);
        }
        if script[..i].contains(&cell) {
            anyhow::bail!("{} lists cell {} more than once", name, cell);
        }
    }

    Ok(())
}
