//! # Validation Checks
//!
//! This module contains the checks that are performed on commit messages.
//!
//! The checks are organized into submodules:
//! - `ignore`: Recognizes merge, revert and bot commits that are exempt from linting
//! - `comments`: Removes editor comments and verbose diffs from a message
//! - `header`: Validates the length of the first line
//! - `pattern`: Splits a message into its conventional commit fields
//! - `fields`: Validates each extracted field on its own
//!
//! These checks are run in a fixed order by the `CommitLinter` to produce
//! a `ValidationResult`.

pub mod comments;
pub mod fields;
pub mod header;
pub mod ignore;
pub mod pattern;
