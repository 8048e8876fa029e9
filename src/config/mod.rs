//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! Both programs resolve their settings the same way: an optional TOML file
//! supplies defaults, CLI flags override it, and the validator turns the
//! result into a checked [`PrimeConfig`] or [`GameConfig`].

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::game::PlayerId;
use serde::{Deserialize, Serialize};

/// How prime workers deliver their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SinkMode {
    /// Every worker appends into one mutex-guarded sink
    #[default]
    Shared,
    /// Workers fill private buffers merged by the coordinator after join
    PerWorker,
}

/// How a player picks its next cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveStrategy {
    /// Draw random cells until an empty one comes up
    #[default]
    Rejection,
    /// Pick uniformly among the empty cells
    Enumerate,
}

/// Validated prime search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeConfig {
    /// Lower bound (inclusive)
    pub min: i64,
    /// Upper bound (inclusive), `>= min`
    pub max: i64,
    /// Worker count, already clamped to the range size
    pub threads: usize,
    #[serde(default)]
    pub sink: SinkMode,
}

/// Prime settings that may come from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrimeSettings {
    #[serde(default)]
    pub sink: SinkMode,
}

/// Tic-tac-toe configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default)]
    pub strategy: MoveStrategy,
    /// Base seed; player 1 uses `seed`, player 2 `seed + 1`
    pub seed: Option<u64>,
    /// Cells X plays first, in order
    #[serde(default)]
    pub x_moves: Vec<usize>,
    /// Cells O plays first, in order
    #[serde(default)]
    pub o_moves: Vec<usize>,
}

impl GameConfig {
    /// RNG seed for `player`
    pub fn player_seed(&self, player: PlayerId) -> Option<u64> {
        self.seed.map(|seed| match player {
            PlayerId::One => seed,
            PlayerId::Two => seed.wrapping_add(1),
        })
    }

    /// Scripted opening cells for `player`
    pub fn script(&self, player: PlayerId) -> &[usize] {
        match player {
            PlayerId::One => &self.x_moves,
            PlayerId::Two => &self.o_moves,
        }
    }
}

/// Contents of a `--config` TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub prime: PrimeSettings,
    #[serde(default)]
    pub game: GameConfig,
}
