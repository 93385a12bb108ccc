//! # Git
//!
//! Reads commit messages from a local repository with `git2`, and commit
//! message files written by git hooks.

use git2::{Oid, Repository, Sort};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument, warn};

use crate::{errors::Error, CommitSource};

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;

/// A local git repository opened with `git2`.
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Opens the repository containing `path`, searching parent directories.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to discover git repository");
            Error::RepositoryNotFound(path.display().to_string())
        })?;

        Ok(Self { repo })
    }

    /// Wraps an already opened repository.
    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    fn resolve_commit(&self, revision: &str) -> Option<Oid> {
        self.repo
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .ok()
    }

    fn message_of(&self, oid: Oid) -> Result<String, git2::Error> {
        let commit = self.repo.find_commit(oid)?;
        Ok(String::from_utf8_lossy(commit.message_bytes())
            .trim()
            .to_string())
    }

    fn walk_range(&self, from: Oid, to: Oid) -> Result<Vec<String>, git2::Error> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        revwalk.push(to)?;
        revwalk.hide(from)?;

        let mut messages = Vec::new();
        for oid in revwalk {
            let message = self.message_of(oid?)?;
            if !message.is_empty() {
                messages.push(message);
            }
        }

        Ok(messages)
    }
}

impl CommitSource for GitRepository {
    #[instrument(skip(self))]
    fn commit_message(&self, revision: &str) -> Result<String, Error> {
        let not_found = || Error::CommitNotFound(revision.to_string());

        let oid = self.resolve_commit(revision).ok_or_else(not_found)?;
        let message = self.message_of(oid).map_err(|_| not_found())?;

        debug!(%oid, "Read commit message");
        Ok(message)
    }

    #[instrument(skip(self))]
    fn commit_messages(&self, from: &str, to: &str) -> Result<Vec<String>, Error> {
        let invalid_range = || Error::InvalidCommitRange(from.to_string(), to.to_string());

        // The walk excludes `from`, so its message is read separately.
        let from_message = self.commit_message(from)?;

        let from_oid = self.resolve_commit(from).ok_or_else(invalid_range)?;
        let to_oid = self.resolve_commit(to).ok_or_else(invalid_range)?;

        let range_messages = self.walk_range(from_oid, to_oid).map_err(|e| {
            warn!(error = %e, "Failed to walk commit range");
            invalid_range()
        })?;

        let mut messages = Vec::with_capacity(range_messages.len() + 1);
        messages.push(from_message);
        messages.extend(range_messages);

        debug!(commit_count = messages.len(), "Read commit range");
        Ok(messages)
    }
}

/// Reads a commit message file, such as the `COMMIT_EDITMSG` passed to a `commit-msg` hook.
pub fn read_commit_message_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}
