//! # Commitlint Developer Platforms
//!
//! Sources of commit messages for the commitlint binaries: a local git
//! repository and the GitHub Actions environment together with the GitHub API.

use async_trait::async_trait;

pub mod errors;

pub mod git;

pub mod github;

pub mod models;
use errors::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Reads commit messages out of a version control history.
///
/// # Example Implementation
///
/// ```rust
/// use commitlint_developer_platforms::{CommitSource, errors::Error};
/// use std::collections::HashMap;
///
/// struct InMemorySource {
///     messages: HashMap<String, String>,
/// }
///
/// impl CommitSource for InMemorySource {
///     fn commit_message(&self, revision: &str) -> Result<String, Error> {
///         self.messages
///             .get(revision)
///             .cloned()
///             .ok_or_else(|| Error::CommitNotFound(revision.to_string()))
///     }
///
///     fn commit_messages(&self, from: &str, _to: &str) -> Result<Vec<String>, Error> {
///         Ok(vec![self.commit_message(from)?])
///     }
/// }
///
/// let source = InMemorySource { messages: HashMap::new() };
/// assert!(source.commit_message("HEAD").is_err());
/// ```
pub trait CommitSource {
    /// Returns the message of the commit the revision resolves to.
    ///
    /// Leading and trailing whitespace is removed from the message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommitNotFound`] if the revision does not resolve to a commit.
    fn commit_message(&self, revision: &str) -> Result<String, Error>;

    /// Returns the messages of a commit range, oldest first.
    ///
    /// The range starts with the `from` commit itself and continues with every
    /// commit reachable from `to` but not from `from`. Empty messages are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommitNotFound`] if `from` does not resolve, or
    /// [`Error::InvalidCommitRange`] if the range cannot be walked.
    fn commit_messages(&self, from: &str, to: &str) -> Result<Vec<String>, Error>;
}

/// Lists the commits of a pull request hosted on a developer platform.
///
/// # Example Implementation
///
/// ```rust
/// use async_trait::async_trait;
/// use commitlint_developer_platforms::{PullRequestCommitProvider, errors::Error};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl PullRequestCommitProvider for FixedProvider {
///     async fn list_commit_messages(
///         &self,
///         _repo_owner: &str,
///         _repo_name: &str,
///         _pr_number: u64,
///         _total_commits: u64,
///     ) -> Result<Vec<String>, Error> {
///         Ok(vec!["feat: add parser".to_string()])
///     }
/// }
/// ```
#[async_trait]
pub trait PullRequestCommitProvider: Send + Sync {
    /// Lists the commit messages of a pull request, oldest first.
    ///
    /// # Arguments
    ///
    /// * `repo_owner` - The owner of the repository
    /// * `repo_name` - The name of the repository
    /// * `pr_number` - The pull request number
    /// * `total_commits` - The number of commits the event reports for the pull request
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyCommits`] if the pull request has more commits than
    /// the platform can list, or [`Error::ApiError`] if a request fails.
    async fn list_commit_messages(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
        total_commits: u64,
    ) -> Result<Vec<String>, Error>;
}
