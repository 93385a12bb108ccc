//! # Commitlint Core
//!
//! Core validation engine for linting commit messages against the
//! [Conventional Commits](https://www.conventionalcommits.org/en/v1.0.0/) format.
//!
//! The engine:
//! - removes editor comments and verbose diffs (when asked to)
//! - skips messages written by tools, such as merges, reverts and dependency bumps
//! - validates the header length
//! - splits the message into type, scope, description and body and validates each
//!   field, or runs a single strict pattern when detailed checks are skipped
//!
//! Malformed input never produces an error value: every outcome is a
//! [`ValidationResult`] listing the broken rules in a fixed order.
//!
//! ## Example Usage
//!
//! ```
//! use commitlint_core::{lint_commit_message, config::LintConfig};
//!
//! let result = lint_commit_message("feat(): add new feature", &LintConfig::default());
//! assert!(!result.is_valid());
//! assert_eq!(result.messages(), vec!["Scope cannot be empty.".to_string()]);
//!
//! // Fast-fail mode only reports that the format is wrong
//! let config = LintConfig {
//!     skip_detail: true,
//!     ..LintConfig::default()
//! };
//! let result = lint_commit_message("invalid commit message", &config);
//! assert_eq!(
//!     result.messages(),
//!     vec!["Commit message does not follow conventional commits format.".to_string()]
//! );
//! ```

use tracing::{debug, instrument, trace};

pub mod checks;
use checks::{
    comments::remove_comments,
    fields::check_fields,
    header::check_header_length,
    ignore::is_ignored,
    pattern::{check_simple_format, CommitFields},
};

pub mod config;
use config::LintConfig;

pub mod errors;
pub mod messages;

pub mod validation_result;
use validation_result::ValidationResult;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Lints commit messages with a fixed configuration.
///
/// `CommitLinter` holds an immutable [`LintConfig`] and applies it to every message
/// it is given. It is cheap to clone and safe to share between threads.
///
/// # Examples
///
/// ```
/// use commitlint_core::{CommitLinter, config::LintConfig};
///
/// let linter = CommitLinter::with_config(LintConfig {
///     max_header_length: 50,
///     ..LintConfig::default()
/// });
///
/// let result = linter.lint("fix(auth): correct login issue");
/// assert!(result.is_valid());
///
/// let result = linter.lint_all(["feat: add parser", "Merge branch hotfix-123", "oops"]);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommitLinter {
    config: LintConfig,
}

impl CommitLinter {
    /// Creates a linter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a linter with the given configuration.
    pub fn with_config(config: LintConfig) -> Self {
        Self { config }
    }

    /// The configuration applied to every message.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lints a single commit message.
    ///
    /// The steps run in a fixed order:
    /// 1. comments and verbose diffs are removed, if `strip_comments` is set
    /// 2. messages recognized as tool-generated pass immediately
    /// 3. either the fast-fail checks or the detailed checks run
    #[instrument(skip(self, commit_message), fields(skip_detail = self.config.skip_detail))]
    pub fn lint(&self, commit_message: &str) -> ValidationResult {
        trace!(commit_message, "Linting commit message");

        let stripped;
        let commit_message = if self.config.strip_comments {
            debug!("Removing comments from the commit message");
            stripped = remove_comments(commit_message);
            stripped.as_str()
        } else {
            commit_message
        };

        if is_ignored(commit_message) {
            debug!("Commit message matches an ignore pattern, skipping lint");
            return ValidationResult::valid();
        }

        let result = if self.config.skip_detail {
            debug!("Running simple validators");
            self.lint_simple(commit_message)
        } else {
            debug!("Running detailed validators");
            self.lint_detailed(commit_message)
        };

        debug!(
            error_count = result.errors.len(),
            valid = result.is_valid(),
            "Finished linting commit message"
        );
        result
    }

    /// Lints several commit messages, in order, into one combined result.
    ///
    /// The combined errors are the errors of each failing message, in input order.
    /// The combined result is valid only if every message is valid.
    pub fn lint_all<I, S>(&self, commit_messages: I) -> ValidationResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut combined = ValidationResult::valid();
        for result in self.lint_each(commit_messages) {
            combined.merge(result);
        }

        combined
    }

    /// Lints several commit messages, in order, returning one result per message.
    pub fn lint_each<I, S>(&self, commit_messages: I) -> Vec<ValidationResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        commit_messages
            .into_iter()
            .enumerate()
            .map(|(index, commit_message)| {
                debug!(commit_index = index, "Linting commit message from batch");
                self.lint(commit_message.as_ref())
            })
            .collect()
    }

    /// Header length followed by the strict pattern; stops at the first failure.
    fn lint_simple(&self, commit_message: &str) -> ValidationResult {
        if let Some(violation) = self.check_header(commit_message) {
            debug!(%violation, "Header length check failed, skipping further checks");
            return ValidationResult::from_violations(vec![violation]);
        }

        match check_simple_format(commit_message) {
            Some(violation) => ValidationResult::from_violations(vec![violation]),
            None => ValidationResult::valid(),
        }
    }

    /// Header length followed by every field check; collects all failures.
    fn lint_detailed(&self, commit_message: &str) -> ValidationResult {
        let mut violations = Vec::new();
        if let Some(violation) = self.check_header(commit_message) {
            violations.push(violation);
        }

        match CommitFields::extract(commit_message) {
            Ok(fields) => violations.extend(check_fields(&fields)),
            Err(violation) => {
                debug!("Commit message has no colon separator, skipping field checks");
                violations.push(violation);
            }
        }

        ValidationResult::from_violations(violations)
    }

    fn check_header(&self, commit_message: &str) -> Option<validation_result::Violation> {
        if self.config.disable_max_header_length {
            return None;
        }

        check_header_length(commit_message, self.config.max_header_length)
    }
}

/// Lints a single commit message with the given configuration.
///
/// Shorthand for `CommitLinter::with_config(config.clone()).lint(commit_message)`.
pub fn lint_commit_message(commit_message: &str, config: &LintConfig) -> ValidationResult {
    CommitLinter::with_config(config.clone()).lint(commit_message)
}

/// Lints several commit messages with the given configuration into one combined result.
///
/// # Examples
///
/// ```
/// use commitlint_core::{lint_commit_messages, config::LintConfig};
///
/// let result = lint_commit_messages(
///     &["feat: add parser", "fix:typo", "docs(): update README"],
///     &LintConfig::default(),
/// );
/// assert_eq!(
///     result.messages(),
///     vec![
///         "Description must have a leading space.".to_string(),
///         "Scope cannot be empty.".to_string(),
///     ]
/// );
/// ```
pub fn lint_commit_messages<I, S>(commit_messages: I, config: &LintConfig) -> ValidationResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CommitLinter::with_config(config.clone()).lint_all(commit_messages)
}
