//! One run of the action: collect the commits of the triggering event, lint
//! them and report through workflow commands, the step summary and the step
//! outputs.

use commitlint_core::checks::header::commit_header;
use commitlint_core::messages::VALIDATION_SUCCESSFUL;
use commitlint_core::validation_result::ValidationResult;
use commitlint_core::CommitLinter;
use commitlint_developer_platforms::github::{page_count, EventKind, GitHubEvent};
use commitlint_developer_platforms::PullRequestCommitProvider;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

use crate::errors::ActionError;
use crate::inputs::{
    get_boolean_input, get_input, write_output, write_step_summary, ActionEnvironment, InputError,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

pub const INPUT_TOKEN: &str = "token";
pub const INPUT_FAIL_ON_ERROR: &str = "fail_on_error";
pub const INPUT_VERBOSE: &str = "verbose";

pub const OUTPUT_STATUS: &str = "status";
pub const OUTPUT_EXIT_CODE: &str = "exit_code";

/// The boolean inputs that shape a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionInputs {
    pub fail_on_error: bool,
    pub verbose: bool,
}

impl ActionInputs {
    pub fn from_env(env: &ActionEnvironment) -> Result<Self, InputError> {
        Ok(Self {
            fail_on_error: get_boolean_input(env, INPUT_FAIL_ON_ERROR)?,
            verbose: get_boolean_input(env, INPUT_VERBOSE)?,
        })
    }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The event carries no commits to check
    Skipped(String),

    /// Commits were linted
    Checked { total: usize, failed: usize },
}

/// Escapes the message part of a workflow command.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The failure report for one commit, as the CLI prints it with `--hide-input`.
fn failure_report(result: &ValidationResult) -> String {
    let mut report = format!("✖ Found {} error(s).\n", result.errors.len());
    for message in result.messages() {
        report.push_str(&format!("- {}\n", message));
    }
    report
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), ActionError> {
    writeln!(out, "{}", line).map_err(|source| ActionError::Io {
        path: "<stdout>".to_string(),
        source,
    })
}

/// Collects the commit messages of the triggering event.
///
/// Returns `None` for events that carry no commits to check. For pull requests
/// the commit count is checked against the API limit before `connect` builds a
/// provider from the `token` input.
#[instrument(skip(event, env, connect), fields(event_name = event.event_name.as_str()))]
pub async fn collect_commit_messages<F>(
    event: &GitHubEvent,
    env: &ActionEnvironment,
    connect: F,
) -> Result<Option<Vec<String>>, ActionError>
where
    F: FnOnce(&str) -> Result<Box<dyn PullRequestCommitProvider>, ActionError>,
{
    let kind = event.kind();
    if kind == EventKind::Push {
        return Ok(Some(event.push_commit_messages()?));
    }

    if !kind.is_pull_request() {
        return Ok(None);
    }

    let payload = event.pull_request()?;
    let total_commits = payload.pull_request.commits;
    page_count(total_commits)?;

    let token = get_input(env, INPUT_TOKEN)?;
    let provider = connect(&token)?;
    let (owner, name) = event.repository_parts()?;

    debug!(
        pr_number = payload.number,
        total_commits, "Fetching pull request commits"
    );
    let messages = provider
        .list_commit_messages(owner, name, payload.number, total_commits)
        .await?;

    Ok(Some(messages))
}

/// Lints `messages`, annotating each failure, and records the summary and outputs.
///
/// Returns the number of failed commits.
pub fn check_commit_messages<W: Write>(
    messages: &[String],
    linter: &CommitLinter,
    env: &ActionEnvironment,
    out: &mut W,
) -> Result<usize, ActionError> {
    let mut failed = 0;

    for message in messages {
        let message = message.trim();
        let header = commit_header(message);
        emit(out, &format!("\n⧗ {}", header))?;

        let result = linter.lint(message);
        if result.is_valid() {
            emit(out, VALIDATION_SUCCESSFUL)?;
            continue;
        }

        failed += 1;
        emit(
            out,
            &format!(
                "::error title={}::{}",
                header,
                escape_data(&failure_report(&result))
            ),
        )?;
    }

    if failed == 0 {
        write_step_summary(env, "commitlint: All commits passed!")?;
        write_output(env, OUTPUT_STATUS, "success")?;
        write_output(env, OUTPUT_EXIT_CODE, 0)?;
    } else {
        write_step_summary(env, &format!("commitlint: {} commit(s) failed!", failed))?;
        write_output(env, OUTPUT_STATUS, "failure")?;
        write_output(env, OUTPUT_EXIT_CODE, 1)?;
    }

    Ok(failed)
}

/// Runs the action for `event`.
///
/// # Errors
///
/// Returns [`ActionError::CommitsFailed`] when a commit fails and `fail_on_error`
/// is set, or another [`ActionError`] when the event, the inputs or the outputs
/// cannot be handled.
pub async fn run_action<W, F>(
    event: &GitHubEvent,
    env: &ActionEnvironment,
    inputs: ActionInputs,
    connect: F,
    out: &mut W,
) -> Result<ActionOutcome, ActionError>
where
    W: Write,
    F: FnOnce(&str) -> Result<Box<dyn PullRequestCommitProvider>, ActionError>,
{
    let messages = match collect_commit_messages(event, env, connect).await? {
        Some(messages) => messages,
        None => {
            let notice = format!("No commits to check for event {}, skipping", event.kind());
            emit(out, &format!("::notice::{}", notice))?;
            return Ok(ActionOutcome::Skipped(notice));
        }
    };
    info!(commit_count = messages.len(), "Checking commits");

    let linter = CommitLinter::new();
    let failed = check_commit_messages(&messages, &linter, env, out)?;

    if failed > 0 {
        warn!(failed, "Commits did not pass");
        if inputs.fail_on_error {
            return Err(ActionError::CommitsFailed(failed));
        }
    }

    Ok(ActionOutcome::Checked {
        total: messages.len(),
        failed,
    })
}
