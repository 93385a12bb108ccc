use commitlint_developer_platforms::errors::Error as PlatformError;
use std::process::{ExitCode, Termination};
use thiserror::Error;

use crate::inputs::InputError;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that end a run of the action
#[derive(Error, Debug)]
pub enum ActionError {
    /// An input was missing or malformed
    #[error(transparent)]
    Input(#[from] InputError),

    /// Reading the event or talking to GitHub failed
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A variable GitHub Actions sets for every step was missing
    #[error("Environment variable {0} is not set")]
    MissingEnvironment(String),

    /// Writing the step outputs or the log failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Commits failed and `fail_on_error` is set
    #[error("{0} commit(s) failed")]
    CommitsFailed(usize),
}

impl ActionError {
    /// The message as a workflow `::error::` command.
    pub fn to_workflow_command(&self) -> String {
        format!("::error::{}", crate::run::escape_data(&self.to_string()))
    }
}

impl Termination for ActionError {
    fn report(self) -> ExitCode {
        match self {
            ActionError::CommitsFailed(_) => ExitCode::from(1),
            ActionError::Input(_) => ExitCode::from(2),
            ActionError::MissingEnvironment(_) => ExitCode::from(3),
            ActionError::Platform(_) => ExitCode::from(4),
            ActionError::Io { .. } => ExitCode::from(5),
        }
    }
}
