//! # Commitlint CLI
//!
//! Command-line interface for checking that commit messages follow the
//! Conventional Commits format.
//!
//! # Examples
//!
//! ```bash
//! # Check a commit message directly
//! commitlint "feat(parser): add nested scopes"
//!
//! # Check the message file passed to a commit-msg hook
//! commitlint --file .git/COMMIT_EDITMSG
//!
//! # Check a single commit or a range of commits
//! commitlint --hash 3f2a1bc
//! commitlint --from-hash 3f2a1bc --to-hash HEAD
//! ```

#![deny(missing_docs)]

use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::process::{ExitCode, Termination};
use tracing::{error, info};

/// Command implementations for the CLI.
mod commands;

/// Configuration management for the CLI.
mod config;

/// User-facing console output.
mod console;

/// Error types specific to the CLI.
mod errors;

use commands::lint::LintArgs;
use console::{Console, OutputMode};
use errors::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "COMMITLINT_LOG";

/// Command-line interface structure for commitlint.
#[derive(Parser, Debug)]
#[command(name = "commitlint", author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(false)
        .args(["commit_message", "file", "hash", "from_hash"])
))]
struct Cli {
    /// What to lint and how
    #[command(flatten)]
    lint: LintArgs,

    /// Print nothing; only the exit code reports the outcome
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Initializes logging to stderr.
///
/// `COMMITLINT_LOG` sets the filter; `--verbose` raises it to debug and `--quiet` turns it off.
fn init_logging(mode: OutputMode) {
    let filter = match mode {
        OutputMode::Quiet => EnvFilter::new("off"),
        OutputMode::Verbose => EnvFilter::new("debug"),
        OutputMode::Normal => {
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Runs the lint command against the current directory.
fn run(cli: &Cli, console: &mut Console<std::io::Stdout, std::io::Stderr>) -> Result<(), CliError> {
    let working_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;

    commands::lint::execute(&cli.lint, &working_dir, console)
}

/// Main entry point for the commitlint CLI.
///
/// Exit codes: 0 when every message passes, 1 when a message fails, and a
/// distinct code per infrastructure failure (see [`CliError`]).
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mode = OutputMode::from_flags(cli.quiet, cli.verbose);

    init_logging(mode);
    info!("Starting commitlint");

    let mut console = Console::stdio(mode);
    match run(&cli, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, CliError::ValidationFailed(_)) {
                error!("Error linting commit messages: {}", e);
                console.error(&e.to_string());
            }

            e.report()
        }
    }
}
