//! # Commitlint GitHub Action
//!
//! Lints the commits of the event that triggered a workflow run. Push events
//! are checked from the event payload; pull request events list their commits
//! through the GitHub API using the `token` input.
//!
//! Each failing commit is reported as an `::error::` annotation titled with its
//! header. The step summary and the `status` and `exit_code` outputs record the
//! overall result. The step fails only when the `fail_on_error` input is true.

#![deny(missing_docs)]

use commitlint_developer_platforms::github::{
    create_token_client, GitHubEvent, GitHubProvider,
};
use commitlint_developer_platforms::PullRequestCommitProvider;
use std::process::{ExitCode, Termination};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Error types for the action.
mod errors;

/// Action inputs, step outputs and the step summary.
mod inputs;

/// Event dispatch and reporting.
mod run;

use errors::ActionError;
use inputs::ActionEnvironment;
use run::{run_action, ActionInputs, ActionOutcome};

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "COMMITLINT_LOG";

/// Initializes logging to stderr; the `verbose` input raises the level to debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Builds a GitHub API provider authenticated with `token`.
fn connect(token: &str) -> Result<Box<dyn PullRequestCommitProvider>, ActionError> {
    let client = create_token_client(token)?;
    Ok(Box::new(GitHubProvider::new(client)))
}

/// Loads the event and runs the action against stdout.
async fn run(env: &ActionEnvironment, inputs: ActionInputs) -> Result<ActionOutcome, ActionError> {
    let event = GitHubEvent::from_lookup(|key| env.var(key))?;
    let mut stdout = std::io::stdout();

    run_action(&event, env, inputs, connect, &mut stdout).await
}

/// Main entry point for the commitlint action.
#[tokio::main]
async fn main() -> ExitCode {
    let env = ActionEnvironment::from_process();

    let inputs = match ActionInputs::from_env(&env) {
        Ok(inputs) => inputs,
        Err(e) => {
            let e = ActionError::from(e);
            println!("{}", e.to_workflow_command());
            return e.report();
        }
    };

    init_logging(inputs.verbose);
    info!(?inputs, "Starting commitlint action");

    match run(&env, inputs).await {
        Ok(outcome) => {
            info!(?outcome, "Commitlint action finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Commitlint action failed: {}", e);
            if !matches!(e, ActionError::CommitsFailed(_)) {
                println!("{}", e.to_workflow_command());
            }
            e.report()
        }
    }
}
