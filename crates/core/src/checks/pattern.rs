//! # Conventional Commit Pattern Matching
//!
//! This module splits a commit message into its conventional commit fields.
//!
//! Two matchers exist:
//! - a strict matcher that only accepts well-formed messages and reports a single
//!   format error otherwise, used for fast-fail linting
//! - a lenient matcher that captures every field even when it is malformed, so that
//!   each field can be validated and reported on its own

use regex::Captures;

use crate::config::{DETAILED_COMMIT_REGEX, SIMPLE_COMMIT_REGEX};
use crate::validation_result::Violation;

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

/// The fields captured from a commit message by the lenient matcher.
///
/// Every field is independently optional. The values are raw captures: a type may
/// carry trailing whitespace and a scope may be empty, because that is exactly what
/// the field checks look for.
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::pattern::CommitFields;
///
/// let fields = CommitFields::extract("feat (api): add endpoint").unwrap();
/// assert_eq!(fields.commit_type, Some("feat "));
/// assert_eq!(fields.scope, Some("api"));
/// assert_eq!(fields.description, Some("add endpoint"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitFields<'a> {
    /// The commit type, including any whitespace that follows it
    pub commit_type: Option<&'a str>,

    /// The text between the scope parentheses
    pub scope: Option<&'a str>,

    /// Whitespace between the closing parenthesis of the scope and the colon
    pub space_after_scope: Option<&'a str>,

    /// The colon and at most one whitespace character after it
    pub colon: &'a str,

    /// The rest of the header after the colon
    pub description: Option<&'a str>,

    /// Up to two newlines between the header and the body
    pub body_separator: &'a str,

    /// Everything after the separator
    pub body: Option<&'a str>,
}

impl<'a> CommitFields<'a> {
    /// Splits a commit message into its fields using the lenient matcher.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::IncorrectFormat`] when the message has no colon
    /// separator. Without it there is no field boundary to validate against.
    pub fn extract(commit_message: &'a str) -> Result<Self, Violation> {
        let captures = DETAILED_COMMIT_REGEX
            .captures(commit_message)
            .ok_or(Violation::IncorrectFormat)?;

        let colon = match captures.name("colon") {
            Some(colon) => colon.as_str(),
            None => return Err(Violation::IncorrectFormat),
        };

        Ok(Self {
            commit_type: capture(&captures, "type"),
            scope: capture(&captures, "scope"),
            space_after_scope: capture(&captures, "space_after_scope"),
            colon,
            description: capture(&captures, "description"),
            body_separator: capture(&captures, "body_separator").unwrap_or(""),
            body: capture(&captures, "body"),
        })
    }
}

fn capture<'a>(captures: &Captures<'a>, name: &str) -> Option<&'a str> {
    captures.name(name).map(|m| m.as_str())
}

/// Checks the whole message against the strict conventional commit pattern.
///
/// Field-level problems are not distinguished: any deviation yields
/// [`Violation::IncorrectFormat`].
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::pattern::check_simple_format;
/// use commitlint_core::validation_result::Violation;
///
/// assert_eq!(check_simple_format("fix(auth): correct login issue"), None);
/// assert_eq!(
///     check_simple_format("fix(auth): correct login issue."),
///     Some(Violation::IncorrectFormat)
/// );
/// ```
pub fn check_simple_format(commit_message: &str) -> Option<Violation> {
    if SIMPLE_COMMIT_REGEX.is_match(commit_message) {
        return None;
    }

    Some(Violation::IncorrectFormat)
}
