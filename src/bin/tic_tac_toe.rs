//! tic-tac-toe CLI entry point

use anyhow::{Context, Result};
use ensemble::config::{cli::GameCli, toml, validator};
use ensemble::coordinator::GameCoordinator;
use ensemble::util::{console::Console, logging};

fn main() -> Result<()> {
    let cli = GameCli::parse_args();
    logging::init(cli.debug);

    let file = toml::load_optional(cli.config.as_deref())?;
    let config = toml::merge_game_cli(&cli, file.game)?;
    validator::validate_game_config(&config).context("Game configuration validation failed")?;
    tracing::debug!(?config, "starting game");

    let report = GameCoordinator::new(Console::stdout()).play(&config)?;
    tracing::debug!(outcome = %report.outcome, moves = report.moves.len(), "done");

    Ok(())
}
