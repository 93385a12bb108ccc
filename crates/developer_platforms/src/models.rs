//! # Models
//!
//! This module contains the data models read from GitHub event payloads and
//! API responses.
//!
//! Only the fields commitlint needs are modelled; everything else in the JSON
//! is ignored during deserialization.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A commit listed in a `push` event payload.
///
/// # Examples
///
/// ```
/// use commitlint_developer_platforms::models::PushCommit;
///
/// let commit: PushCommit = serde_json::from_str(
///     r#"{"id": "abc123", "message": "feat: add parser"}"#,
/// ).unwrap();
/// assert_eq!(commit.message, "feat: add parser");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushCommit {
    /// The commit SHA
    #[serde(default)]
    pub id: Option<String>,

    /// The full commit message
    pub message: String,
}

/// The parts of a `push` event payload that list commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushPayload {
    /// Commits pushed, oldest first
    pub commits: Vec<PushCommit>,
}

/// Pull request details carried by a `pull_request` event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// Number of commits in the pull request
    pub commits: u64,
}

/// The parts of a `pull_request` or `pull_request_target` event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestPayload {
    /// The pull request number
    pub number: u64,

    /// The pull request details
    pub pull_request: PullRequestDetails,
}

/// A commit returned by the list-commits-on-a-pull-request endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestCommit {
    /// The commit SHA
    pub sha: String,

    /// The git data of the commit
    pub commit: CommitDetails,
}

/// Git data of a commit returned by the GitHub API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    /// The full commit message
    pub message: String,
}
