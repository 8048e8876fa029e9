//! TOML configuration file parsing
//!
//! A config file only supplies defaults; flags given on the command line
//! always win. Example:
//!
//! ```toml
//! [prime]
//! sink = "per-worker"
//!
//! [game]
//! strategy = "enumerate"
//! seed = 42
//! x_moves = [0, 1, 2]
//! o_moves = [3, 4]
//! ```

use super::*;
use crate::config::cli::{GameCli, PrimeCli};
use crate::config::cli_convert::{convert_move_strategy, convert_sink_mode, parse_cell_list};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<FileConfig> {
    let config: FileConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Load the file named by `--config`, or defaults when none was given
pub fn load_optional(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => parse_toml_file(path),
        None => Ok(FileConfig::default()),
    }
}

/// Merge prime CLI flags over file settings (CLI takes precedence)
pub fn merge_prime_cli(cli: &PrimeCli, mut settings: PrimeSettings) -> PrimeSettings {
    if let Some(mode) = cli.sink {
        settings.sink = convert_sink_mode(mode);
    }
    settings
}

/// Merge game CLI flags over file settings (CLI takes precedence)
pub fn merge_game_cli(cli: &GameCli, mut config: GameConfig) -> Result<GameConfig> {
    if let Some(strategy) = cli.strategy {
        config.strategy = convert_move_strategy(strategy);
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(ref cells) = cli.x_moves {
        config.x_moves = parse_cell_list(cells).context("Invalid --x-moves")?;
    }
    if let Some(ref cells) = cli.o_moves {
        config.o_moves = parse_cell_list(cells).context("Invalid --o-moves")?;
    }

    Ok(config)
}
