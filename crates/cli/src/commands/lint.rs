use clap::Args;
use commitlint_core::checks::comments::remove_comments;
use commitlint_core::config::LintConfig;
use commitlint_core::messages::{CORRECT_OUTPUT_FORMAT, VALIDATION_FAILED, VALIDATION_SUCCESSFUL};
use commitlint_core::validation_result::ValidationResult;
use commitlint_core::CommitLinter;
use commitlint_developer_platforms::git::{read_commit_message_file, GitRepository};
use commitlint_developer_platforms::CommitSource;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::{resolve_lint_config, ConfigOverrides};
use crate::console::Console;
use crate::errors::CliError;

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;

/// Arguments for linting commit messages
#[derive(Args, Debug)]
pub struct LintArgs {
    /// The commit message to be checked
    pub commit_message: Option<String>,

    /// Path to a file containing the commit message
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Hash of the commit to check
    #[arg(long)]
    pub hash: Option<String>,

    /// First commit of a range to check
    #[arg(long)]
    pub from_hash: Option<String>,

    /// Last commit of the range started by --from-hash
    #[arg(long, default_value = "HEAD")]
    pub to_hash: String,

    /// Skip the detailed error message check
    #[arg(long)]
    pub skip_detail: bool,

    /// Do not print the commit message when it fails
    #[arg(long)]
    pub hide_input: bool,

    /// Maximum number of characters allowed in the header
    #[arg(long, value_name = "N", value_parser = parse_max_header_length)]
    pub max_header_length: Option<usize>,

    /// Disable the header length check
    #[arg(long, conflicts_with = "max_header_length")]
    pub disable_max_header_length: bool,

    /// Remove comment lines and verbose diffs before linting
    #[arg(long)]
    pub strip_comments: bool,

    /// Alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report failures but exit successfully
    #[arg(long)]
    pub fail_soft: bool,
}

impl LintArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            skip_detail: self.skip_detail,
            max_header_length: self.max_header_length,
            disable_max_header_length: self.disable_max_header_length,
            // Message files come from git hooks and always carry editor comments
            strip_comments: self.strip_comments || self.file.is_some(),
        }
    }
}

fn parse_max_header_length(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(length) => Ok(length),
        Err(e) => Err(e.to_string()),
    }
}

/// Where the messages to lint come from.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Single(String),
    Range(Vec<String>),
}

fn collect_input<C: Write, E: Write>(
    args: &LintArgs,
    working_dir: &Path,
    console: &mut Console<C, E>,
) -> Result<Input, CliError> {
    if let Some(file) = &args.file {
        let path = working_dir.join(file);
        console.verbose(&format!("reading commit message from file {}", path.display()));
        let message = read_commit_message_file(&path)?;
        return Ok(Input::Single(message.trim().to_string()));
    }

    if let Some(hash) = &args.hash {
        console.verbose("checking commit from hash");
        let repository = GitRepository::discover(working_dir)?;
        return Ok(Input::Single(repository.commit_message(hash)?));
    }

    if let Some(from_hash) = &args.from_hash {
        console.verbose("checking commit from hash range");
        let repository = GitRepository::discover(working_dir)?;
        return Ok(Input::Range(
            repository.commit_messages(from_hash, &args.to_hash)?,
        ));
    }

    match &args.commit_message {
        Some(message) => {
            console.verbose("checking commit message");
            Ok(Input::Single(message.trim().to_string()))
        }
        None => Err(CliError::InvalidArguments(
            "one of <COMMIT_MESSAGE>, --file, --hash or --from-hash is required".to_string(),
        )),
    }
}

fn show_errors<C: Write, E: Write>(
    console: &mut Console<C, E>,
    commit_message: &str,
    result: &ValidationResult,
    config: &LintConfig,
    hide_input: bool,
) {
    if !hide_input {
        console.error(&format!("⧗ Input:\n{}\n", remove_comments(commit_message)));
    }

    if config.skip_detail {
        console.error(VALIDATION_FAILED);
        return;
    }

    console.error(&format!("✖ Found {} error(s).", result.errors.len()));
    for message in result.messages() {
        console.error(&format!("- {}", message));
    }
}

/// Lints the requested commit messages and prints the outcome.
///
/// # Errors
///
/// Returns [`CliError::ValidationFailed`] when a message fails and `--fail-soft` is not
/// set, or another [`CliError`] when the configuration or the commits cannot be read.
#[instrument(skip(args, console))]
pub fn execute<C: Write, E: Write>(
    args: &LintArgs,
    working_dir: &Path,
    console: &mut Console<C, E>,
) -> Result<(), CliError> {
    console.verbose("starting commitlint");

    let config = resolve_lint_config(args.config.as_deref(), working_dir, &args.overrides())?;
    let linter = CommitLinter::with_config(config);

    let commit_messages = match collect_input(args, working_dir, console)? {
        Input::Single(message) => vec![message],
        Input::Range(messages) => messages,
    };
    debug!(commit_count = commit_messages.len(), "Collected commit messages");

    let mut failed = 0;
    for commit_message in &commit_messages {
        let result = linter.lint(commit_message);
        if result.is_valid() {
            console.verbose("lint success");
            continue;
        }

        failed += 1;
        show_errors(
            console,
            commit_message,
            &result,
            linter.config(),
            args.hide_input,
        );
        if commit_messages.len() > 1 {
            console.error("");
        }
    }

    if failed == 0 {
        console.success(VALIDATION_SUCCESSFUL);
        return Ok(());
    }

    console.error(CORRECT_OUTPUT_FORMAT);
    info!(failed, "Commit validation failed");

    if args.fail_soft {
        return Ok(());
    }

    Err(CliError::ValidationFailed(failed))
}
