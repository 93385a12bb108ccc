/// Commit message linting
pub mod lint;
