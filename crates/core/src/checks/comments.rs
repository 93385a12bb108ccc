//! # Comment Removal
//!
//! Messages written in an editor by `git commit` carry comment lines starting
//! with `#`, and `git commit --verbose` appends the staged diff below a scissors
//! line. Neither is part of the commit message, so both are removed before any
//! check runs.

use crate::config::VERBOSE_COMMIT_SEPARATOR;

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;

/// Removes the verbose-commit diff from a commit message.
///
/// Everything from the scissors line onwards is discarded and trailing
/// whitespace is trimmed.
///
/// ```bash
/// ...
/// # ------------------------ >8 ------------------------
/// # Do not modify or remove the line above.
/// # Everything below it will be ignored.
/// diff --git a/... b/...
/// ```
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::comments::remove_diff_from_commit_message;
///
/// let message = "Fix a bug\n# ------------------------ >8 ------------------------\nDiff message";
/// assert_eq!(remove_diff_from_commit_message(message), "Fix a bug");
/// ```
pub fn remove_diff_from_commit_message(commit_message: &str) -> &str {
    let without_diff = match commit_message.find(VERBOSE_COMMIT_SEPARATOR) {
        Some(index) => &commit_message[..index],
        None => commit_message,
    };

    without_diff.trim_end()
}

/// Removes comment lines and the verbose-commit diff from a commit message.
///
/// The diff is removed first: it may contain lines starting with `#` that
/// belong to the patch, and the scissors line is itself a comment. Trailing
/// whitespace left behind by removed lines is trimmed, which makes the
/// operation idempotent.
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::comments::remove_comments;
///
/// let message = "feat(scope): add new feature\n# Please enter the commit message\n";
/// assert_eq!(remove_comments(message), "feat(scope): add new feature");
/// ```
pub fn remove_comments(commit_message: &str) -> String {
    let without_diff = remove_diff_from_commit_message(commit_message);

    let lines: Vec<&str> = without_diff
        .split('\n')
        .filter(|line| !line.starts_with('#'))
        .collect();

    lines.join("\n").trim_end().to_string()
}
