#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for commit source operations.
///
/// This enum represents the failures that can occur while collecting commit
/// messages from a local git repository or from the GitHub API. Lint failures
/// are never reported through this type; they are ordinary validation results.
///
/// # Examples
///
/// ```rust
/// use commitlint_developer_platforms::errors::Error;
///
/// let error = Error::CommitNotFound("abc123".to_string());
/// assert_eq!(error.to_string(), "Failed to retrieve commit message for hash abc123");
///
/// let error = Error::TooManyCommits(300, 250);
/// assert!(error.to_string().contains("more than 250 commits"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic API request failure.
    ///
    /// The GitHub API answered with an error or could not be reached. The string
    /// parameter contains the details reported by the client.
    #[error("GitHub API request failed: {0}")]
    ApiError(String),

    /// Authentication could not be set up for the GitHub client.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// The revision does not resolve to a commit in the repository.
    #[error("Failed to retrieve commit message for hash {0}")]
    CommitNotFound(String),

    /// The commit range could not be walked.
    ///
    /// Parameters: start of the range, end of the range
    #[error("Failed to retrieve commit messages for the range {0} to {1}")]
    InvalidCommitRange(String, String),

    /// The event payload did not have the expected shape.
    #[error("Invalid event payload: {0}")]
    InvalidPayload(String),

    /// The repository slug is not of the form `owner/name`.
    #[error("Invalid repository name: {0}")]
    InvalidRepository(String),

    /// A required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    MissingEnvironment(String),

    /// No git repository could be opened at the given location.
    #[error("Failed to open git repository at {0}")]
    RepositoryNotFound(String),

    /// The pull request has more commits than the API can list.
    ///
    /// Parameters: number of commits in the pull request, maximum supported
    #[error(
        "GitHub API doesn't support PRs with more than {1} commits, this PR has {0}. \
         See https://docs.github.com/en/rest/pulls/pulls?apiVersion=2022-11-28#list-commits-on-a-pull-request"
    )]
    TooManyCommits(u64, u64),

    /// Reading a local file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
