//! # apiforge CLI
//!
//! Generates Express + Sequelize API projects.
//!
//! `main` parses flags, installs logging, loads [`AppConfig`], then hands
//! off to a command.  Failures come back as [`CliError`] and are rendered
//! once, in [`handle_error`].
//!
//! # Exit codes
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! |  0   | Success, including a failed dependency install     |
//! |  1   | Invalid input, existing target, write or I/O error |
//! |  2   | Usage error reported by clap                       |

use std::io::IsTerminal as _;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("apiforge: {e}");
        return ExitCode::from(error::EXIT_FAILURE);
    }

    debug!(args = ?cli.global, "starting");

    let verbose = cli.global.verbose > 0;
    let config_path = AppConfig::resolve_path(cli.global.config.as_deref());
    // `init` creates the file, so it must not require one.
    let required =
        cli.global.config.is_some() && !matches!(cli.command, Some(Commands::Init(_)));

    let config = match AppConfig::load(&config_path, required) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: Some(e.into()),
                },
                verbose,
            );
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, &config_path, output) {
        Ok(()) => {
            info!("apiforge completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// No subcommand means "create a project".
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, config_path: &Path, output: OutputManager) -> CliResult<()> {
    match cli.command {
        None => commands::create::execute(cli.create, &cli.global, config, output),
        Some(Commands::Completions(cmd)) => commands::completions::execute(cmd),
        Some(Commands::Init(cmd)) => commands::init::execute(cmd, config_path, output),
        Some(Commands::Config(cmd)) => {
            commands::config::execute(cmd, &config, config_path, output)
        }
    }
}

/// Translate a `CliError` into a user message and exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_and_author_come_from_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(apiforge_core::VERSION));
        assert!(cmd.get_author().is_some());
    }
}
