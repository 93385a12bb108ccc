//! # Field Validation
//!
//! This module validates the individual fields captured by the lenient matcher.
//!
//! The set of checks is closed. Each [`FieldCheck`] variant owns one concern and
//! reports at most one [`Violation`]; [`FIELD_CHECKS`] fixes the order in which they
//! run, which is also the order of the reported errors.

use crate::checks::pattern::CommitFields;
use crate::config::COMMIT_TYPES;
use crate::validation_result::Violation;

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;

/// A single field-level rule.
///
/// # Examples
///
/// ```
/// use commitlint_core::checks::fields::FieldCheck;
/// use commitlint_core::checks::pattern::CommitFields;
/// use commitlint_core::validation_result::Violation;
///
/// let fields = CommitFields::extract("feat(): add").unwrap();
/// assert_eq!(FieldCheck::Scope.check(&fields), Some(Violation::ScopeEmpty));
/// assert_eq!(FieldCheck::CommitType.check(&fields), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// The type is present and one of the known commit types
    CommitType,

    /// The type is directly followed by the scope or colon
    CommitTypeNoSpaceAfter,

    /// The scope, when given, is non-empty and has no whitespace
    Scope,

    /// The scope is directly followed by the colon
    ScopeNoSpaceAfter,

    /// The description is present and separated from the colon by one space
    Description,

    /// The description does not start with extra whitespace
    DescriptionNoMultipleWhitespace,

    /// The header is separated from the body by a blank line
    DescriptionNoLineBreak,

    /// The description does not end with a period
    DescriptionNoFullStop,
}

/// All field checks, in the order they run.
pub const FIELD_CHECKS: [FieldCheck; 8] = [
    FieldCheck::CommitType,
    FieldCheck::CommitTypeNoSpaceAfter,
    FieldCheck::Scope,
    FieldCheck::ScopeNoSpaceAfter,
    FieldCheck::Description,
    FieldCheck::DescriptionNoMultipleWhitespace,
    FieldCheck::DescriptionNoLineBreak,
    FieldCheck::DescriptionNoFullStop,
];

impl FieldCheck {
    /// Runs this check against the captured fields.
    pub fn check(self, fields: &CommitFields<'_>) -> Option<Violation> {
        match self {
            FieldCheck::CommitType => check_commit_type(fields),
            FieldCheck::CommitTypeNoSpaceAfter => check_commit_type_no_space_after(fields),
            FieldCheck::Scope => check_scope(fields),
            FieldCheck::ScopeNoSpaceAfter => check_scope_no_space_after(fields),
            FieldCheck::Description => check_description(fields),
            FieldCheck::DescriptionNoMultipleWhitespace => {
                check_description_no_multiple_whitespace(fields)
            }
            FieldCheck::DescriptionNoLineBreak => check_description_no_line_break(fields),
            FieldCheck::DescriptionNoFullStop => check_description_no_full_stop(fields),
        }
    }
}

/// Runs every field check in order and collects all violations.
///
/// No check stops the others: a message with three problems reports three errors.
pub fn check_fields(fields: &CommitFields<'_>) -> Vec<Violation> {
    FIELD_CHECKS
        .iter()
        .filter_map(|field_check| field_check.check(fields))
        .collect()
}

fn check_commit_type(fields: &CommitFields<'_>) -> Option<Violation> {
    let commit_type = match fields.commit_type {
        Some(commit_type) => commit_type.trim(),
        None => return Some(Violation::TypeMissing),
    };

    if !COMMIT_TYPES.contains(&commit_type) {
        return Some(Violation::InvalidType(commit_type.to_string()));
    }

    None
}

fn check_commit_type_no_space_after(fields: &CommitFields<'_>) -> Option<Violation> {
    match fields.commit_type {
        Some(commit_type) if commit_type.ends_with(char::is_whitespace) => {
            Some(Violation::SpaceAfterType)
        }
        _ => None,
    }
}

fn check_scope(fields: &CommitFields<'_>) -> Option<Violation> {
    let scope = fields.scope?;

    if scope.is_empty() {
        return Some(Violation::ScopeEmpty);
    }

    if scope.contains(char::is_whitespace) {
        return Some(Violation::ScopeWhitespace);
    }

    None
}

fn check_scope_no_space_after(fields: &CommitFields<'_>) -> Option<Violation> {
    match fields.space_after_scope {
        Some(space) if !space.is_empty() => Some(Violation::SpaceAfterScope),
        _ => None,
    }
}

fn check_description(fields: &CommitFields<'_>) -> Option<Violation> {
    match fields.description {
        None | Some("") => Some(Violation::DescriptionMissing),
        Some(_) if !fields.colon.ends_with(' ') => Some(Violation::DescriptionNoLeadingSpace),
        Some(_) => None,
    }
}

fn check_description_no_multiple_whitespace(fields: &CommitFields<'_>) -> Option<Violation> {
    match fields.description {
        Some(description) if description.starts_with(char::is_whitespace) => {
            Some(Violation::DescriptionMultipleSpaceStart)
        }
        _ => None,
    }
}

fn check_description_no_line_break(fields: &CommitFields<'_>) -> Option<Violation> {
    let has_body = fields.body.is_some_and(|body| !body.is_empty());
    if matches!(fields.body_separator, "\n" | "\r\n") && has_body {
        return Some(Violation::DescriptionLineBreak);
    }

    None
}

fn check_description_no_full_stop(fields: &CommitFields<'_>) -> Option<Violation> {
    match fields.description {
        Some(description) if description.trim().ends_with('.') => {
            Some(Violation::DescriptionFullStop)
        }
        _ => None,
    }
}
