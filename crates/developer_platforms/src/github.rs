use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use tracing::{debug, error, info, instrument};

use crate::{
    errors::Error,
    models::{PullRequestCommit, PullRequestPayload, PushPayload},
    PullRequestCommitProvider,
};

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;

/// Environment variable holding the name of the triggering event
pub const GITHUB_EVENT_NAME: &str = "GITHUB_EVENT_NAME";

/// Environment variable holding the path of the event payload file
pub const GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";

/// Environment variable holding the `owner/name` slug of the repository
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Most commits the list-commits-on-a-pull-request endpoint returns
pub const MAX_PR_COMMITS: u64 = 250;

/// Page size used when listing pull request commits
pub const COMMITS_PER_PAGE: u64 = 50;

/// The kind of GitHub event that triggered a workflow run.
///
/// # Examples
///
/// ```
/// use commitlint_developer_platforms::github::EventKind;
///
/// assert_eq!(EventKind::from_name("push"), EventKind::Push);
/// assert!(EventKind::from_name("pull_request_target").is_pull_request());
/// assert_eq!(EventKind::from_name("release"), EventKind::Other("release".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push,
    PullRequest,
    PullRequestTarget,
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "push" => EventKind::Push,
            "pull_request" => EventKind::PullRequest,
            "pull_request_target" => EventKind::PullRequestTarget,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn is_pull_request(&self) -> bool {
        matches!(self, EventKind::PullRequest | EventKind::PullRequestTarget)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Push => write!(f, "push"),
            EventKind::PullRequest => write!(f, "pull_request"),
            EventKind::PullRequestTarget => write!(f, "pull_request_target"),
            EventKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A GitHub Actions event: its name, the repository it belongs to and its JSON payload.
#[derive(Debug, Clone)]
pub struct GitHubEvent {
    /// The name of the event, e.g. `push`
    pub event_name: String,

    /// The `owner/name` slug of the repository
    pub repository: String,

    /// The event payload
    pub payload: serde_json::Value,
}

impl GitHubEvent {
    pub fn new(
        event_name: impl Into<String>,
        repository: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            repository: repository.into(),
            payload,
        }
    }

    /// Loads the event from the variables GitHub Actions sets for every step.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the event using `lookup` to read environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingEnvironment`] if a variable is not set, [`Error::Io`] if the
    /// payload file cannot be read, or [`Error::InvalidPayload`] if it is not JSON.
    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require =
            |key: &str| lookup(key).ok_or_else(|| Error::MissingEnvironment(key.to_string()));

        let event_name = require(GITHUB_EVENT_NAME)?;
        let repository = require(GITHUB_REPOSITORY)?;
        let event_path = require(GITHUB_EVENT_PATH)?;

        let content = fs::read_to_string(&event_path).map_err(|source| Error::Io {
            path: event_path.clone(),
            source,
        })?;
        let payload = serde_json::from_str(&content)
            .map_err(|e| Error::InvalidPayload(format!("{}: {}", event_path, e)))?;

        info!(
            event_name = event_name.as_str(),
            repository = repository.as_str(),
            "Loaded GitHub event"
        );

        Ok(Self::new(event_name, repository, payload))
    }

    pub fn kind(&self) -> EventKind {
        EventKind::from_name(&self.event_name)
    }

    /// Splits the repository slug into owner and name.
    pub fn repository_parts(&self) -> Result<(&str, &str), Error> {
        match self.repository.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok((owner, name)),
            _ => Err(Error::InvalidRepository(self.repository.clone())),
        }
    }

    /// The messages of the commits in a `push` payload, in payload order.
    pub fn push_commit_messages(&self) -> Result<Vec<String>, Error> {
        let push = PushPayload::deserialize(&self.payload)
            .map_err(|e| Error::InvalidPayload(e.to_string()))?;

        Ok(push.commits.into_iter().map(|c| c.message).collect())
    }

    /// The pull request number and commit count of a pull request payload.
    pub fn pull_request(&self) -> Result<PullRequestPayload, Error> {
        PullRequestPayload::deserialize(&self.payload)
            .map_err(|e| Error::InvalidPayload(e.to_string()))
    }
}

/// Number of pages needed to list `total_commits` pull request commits.
///
/// # Errors
///
/// Returns [`Error::TooManyCommits`] above [`MAX_PR_COMMITS`], since the API would
/// silently truncate the list.
pub fn page_count(total_commits: u64) -> Result<u64, Error> {
    if total_commits > MAX_PR_COMMITS {
        return Err(Error::TooManyCommits(total_commits, MAX_PR_COMMITS));
    }

    Ok(total_commits.div_ceil(COMMITS_PER_PAGE))
}

#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(e.to_string()))
}

/// Creates a token client that talks to `base_uri` instead of `api.github.com`.
#[instrument(skip(token))]
pub fn create_token_client_with_base_uri(token: &str, base_uri: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|e| Error::ApiError(format!("Invalid base URI {}: {}", base_uri, e)))?
        .personal_token(token.to_string())
        .build()
        .map_err(|e| Error::AuthError(e.to_string()))
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => error!(
            error_message = source.message.as_str(),
            backtrace = backtrace.to_string(),
            "{}. Received an error from GitHub",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}

#[derive(Debug, Serialize)]
struct PageParameters {
    per_page: u64,
    page: u64,
}

/// Lists pull request commits through the GitHub REST API.
#[derive(Debug)]
pub struct GitHubProvider {
    client: Octocrab,
}

impl GitHubProvider {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PullRequestCommitProvider for GitHubProvider {
    #[instrument(skip(self))]
    async fn list_commit_messages(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
        total_commits: u64,
    ) -> Result<Vec<String>, Error> {
        let pages = page_count(total_commits)?;
        let route = format!("/repos/{}/{}/pulls/{}/commits", repo_owner, repo_name, pr_number);

        let mut messages = Vec::with_capacity(total_commits as usize);
        for page in 1..=pages {
            let parameters = PageParameters {
                per_page: COMMITS_PER_PAGE,
                page,
            };

            let commits: Vec<PullRequestCommit> = self
                .client
                .get(&route, Some(&parameters))
                .await
                .map_err(|e| {
                    log_octocrab_error("Failed to list pull request commits", &e);
                    Error::ApiError(e.to_string())
                })?;

            debug!(
                page,
                commit_count = commits.len(),
                "Fetched pull request commits"
            );
            messages.extend(commits.into_iter().map(|c| c.commit.message));
        }

        Ok(messages)
    }
}
