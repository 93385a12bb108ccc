//! # Header Length Validation
//!
//! The header is the first line of a commit message. Many tools truncate long
//! headers, so their length is capped.

use crate::validation_result::Violation;

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;

/// Returns the first line of a commit message, or an empty string for an empty message.
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::header::commit_header;
///
/// assert_eq!(commit_header("feat: add login\n\nbody"), "feat: add login");
/// assert_eq!(commit_header(""), "");
/// ```
pub fn commit_header(commit_message: &str) -> &str {
    commit_message.lines().next().unwrap_or("")
}

/// Checks that the header does not exceed `max_header_length` characters.
///
/// Length is counted in characters, not bytes, so non-ASCII descriptions are
/// not penalized.
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::header::check_header_length;
/// use commitlint_core::validation_result::Violation;
///
/// assert_eq!(check_header_length("feat: short", 72), None);
/// assert_eq!(
///     check_header_length("feat: this header is too long", 10),
///     Some(Violation::HeaderTooLong(10))
/// );
/// ```
pub fn check_header_length(commit_message: &str, max_header_length: usize) -> Option<Violation> {
    let header_length = commit_header(commit_message).chars().count();
    if header_length > max_header_length {
        return Some(Violation::HeaderTooLong(max_header_length));
    }

    None
}
