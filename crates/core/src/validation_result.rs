//! # Validation Result Types
//!
//! This module provides the result type returned by every lint operation and the
//! closed catalog of violations that can appear in it.
//!
//! The primary type is [`ValidationResult`]: an ordered list of [`Violation`]s.
//! A result is successful exactly when that list is empty.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rule broken by a commit message.
///
/// The `Display` output of each variant is the exact user-facing message. Tools
/// downstream grep for these strings, so they must not change.
///
/// # Examples
///
/// ```
/// use commitlint_core::validation_result::Violation;
///
/// assert_eq!(Violation::ScopeEmpty.to_string(), "Scope cannot be empty.");
/// assert_eq!(
///     Violation::InvalidType("feature".to_string()).to_string(),
///     "Invalid commit type 'feature'."
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// The header is longer than the configured maximum
    #[error("Header length cannot exceed {0} characters.")]
    HeaderTooLong(usize),

    /// The message does not have the overall `type(scope): description` shape
    #[error("Commit message does not follow conventional commits format.")]
    IncorrectFormat,

    #[error("Type is missing.")]
    TypeMissing,

    #[error("Invalid commit type '{0}'.")]
    InvalidType(String),

    #[error("Type should not have trailing space.")]
    SpaceAfterType,

    #[error("Scope cannot be empty.")]
    ScopeEmpty,

    #[error("Scope cannot contain spaces.")]
    ScopeWhitespace,

    #[error("Scope should not have trailing space.")]
    SpaceAfterScope,

    #[error("Description is missing.")]
    DescriptionMissing,

    #[error("Description must have a leading space.")]
    DescriptionNoLeadingSpace,

    #[error("Description must not start with multiple spaces.")]
    DescriptionMultipleSpaceStart,

    #[error("Description should not contain line breaks.")]
    DescriptionLineBreak,

    #[error("Description should not end with a period.")]
    DescriptionFullStop,
}

/// Outcome of linting one or more commit messages.
///
/// Success is derived from the error list, so a result can never claim success
/// while carrying errors.
///
/// # Examples
///
/// ```
/// use commitlint_core::validation_result::{ValidationResult, Violation};
///
/// let result = ValidationResult::valid();
/// assert!(result.is_valid());
///
/// let result = ValidationResult::from_violations(vec![Violation::TypeMissing]);
/// assert!(!result.is_valid());
/// assert_eq!(result.messages(), vec!["Type is missing.".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Violations in the order the checks ran
    pub errors: Vec<Violation>,
}

impl ValidationResult {
    /// Creates a result with no violations.
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates a result holding the given violations, in order.
    pub fn from_violations(errors: Vec<Violation>) -> Self {
        Self { errors }
    }

    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The user-facing message of every violation, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Appends the violations of another result after the ones already held.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

#[cfg(test)]
#[path = "validation_result_tests.rs"]
mod tests;
