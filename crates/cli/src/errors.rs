use commitlint_core::errors::ConfigLoadError;
use commitlint_developer_platforms::errors::Error as PlatformError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading commits from git failed
    #[error("Git error: {0}")]
    GitError(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    IoError(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// One or more commit messages did not pass
    #[error("Validation failed: {0} commit message(s) did not pass")]
    ValidationFailed(usize),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{:#}", err))
    }
}

impl From<ConfigLoadError> for CliError {
    fn from(err: ConfigLoadError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

impl From<PlatformError> for CliError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::CommitNotFound(_)
            | PlatformError::InvalidCommitRange(_, _)
            | PlatformError::RepositoryNotFound(_) => CliError::GitError(err.to_string()),
            PlatformError::Io { .. } => CliError::IoError(err.to_string()),
            _ => CliError::Other(err.to_string()),
        }
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        match self {
            CliError::ValidationFailed(_) => std::process::ExitCode::from(1),
            CliError::ConfigError(_) => std::process::ExitCode::from(2),
            CliError::GitError(_) => std::process::ExitCode::from(3),
            CliError::IoError(_) => std::process::ExitCode::from(4),
            CliError::InvalidArguments(_) => std::process::ExitCode::from(5),
            CliError::Other(_) => std::process::ExitCode::FAILURE,
        }
    }
}
