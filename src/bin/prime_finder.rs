//! prime-finder CLI entry point

use anyhow::Result;
use ensemble::config::{cli::PrimeCli, toml, validator};
use ensemble::coordinator::PrimeCoordinator;
use ensemble::output::text;
use ensemble::util::{console::Console, logging};
use std::process::ExitCode;

const PROGRAM: &str = "prime-finder";

fn main() -> ExitCode {
    let cli = PrimeCli::parse_args();
    logging::init(cli.debug);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &PrimeCli) -> Result<ExitCode> {
    let file = toml::load_optional(cli.config.as_deref())?;
    let settings = toml::merge_prime_cli(cli, file.prime);

    // Argument errors have fixed console text and exit codes
    let config = match validator::validate_prime_args(cli, &settings) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(error = %err, "rejected arguments");
            for line in text::argument_error_lines(&err, PROGRAM) {
                println!("{}", line);
            }
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    let report = PrimeCoordinator::new(config, Console::stdout()).run()?;
    if !report.failed_workers.is_empty() {
        tracing::warn!(failed = ?report.failed_workers, "some workers did not finish; results are partial");
    }

    Ok(ExitCode::SUCCESS)
}
