//! # Ignored Commits
//!
//! Some commits are written by tools rather than people: merge and revert
//! messages generated by git, auto-merges from CI systems and dependency
//! bumps from bots. They cannot follow the convention, so they are exempt
//! from linting.

use crate::{checks::header::commit_header, config::IGNORE_COMMIT_REGEX};

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;

/// Checks whether a commit message is exempt from linting.
///
/// Only the first line is inspected. A message is exempt when it starts with
/// one of the recognized tool-generated phrases:
/// - `Merge pull request ...`, `Merge X into Y`, `Merge branch X`, `Merge tag X`
/// - `Revert ...`
/// - `Merged X into Y`, `Merged PR N: ...`
/// - `Merge remote-tracking branch ...`
/// - `Automatic merge ...`, `Auto-merged X into Y`
/// - `Bump X from A to B`
/// - `Initial commit`
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::ignore::is_ignored;
///
/// assert!(is_ignored("Merge pull request #123 from owner/branch"));
/// assert!(is_ignored("Bump serde from 1.0.1 to 1.0.2"));
/// assert!(!is_ignored("feat: add login"));
/// ```
pub fn is_ignored(commit_message: &str) -> bool {
    IGNORE_COMMIT_REGEX.is_match(commit_header(commit_message))
}
