//! Configuration settings for the commitlint core functionality.
//!
//! This module centralizes the constants, pre-compiled patterns and settings used
//! throughout the crate, making it easier to modify behavior in one place.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigLoadError;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default maximum number of characters allowed in the commit header
pub const DEFAULT_MAX_HEADER_LENGTH: usize = 72;

/// Valid commit types for conventional commits
pub const COMMIT_TYPES: [&str; 12] = [
    "build", "ci", "docs", "feat", "fix", "perf", "refactor", "style", "test", "chore", "revert",
    "bump",
];

/// Marker line written by `git commit --verbose` above the staged diff
pub const VERBOSE_COMMIT_SEPARATOR: &str =
    "# ------------------------ >8 ------------------------";

lazy_static! {
    /// Pre-compiled regex for commits that are exempt from linting
    pub static ref IGNORE_COMMIT_REGEX: Regex = Regex::new(concat!(
        r"^(?:",
        r"(?:Merge pull request|(?:Merge .*? into .*?|Merge branch .*?)(?:\r?\n)*$)|",
        r"Merge tag .*?(?:\r?\n)*$|",
        r"[Rr]evert .*|",
        r"(?:Merged .*?(?:in|into) .*|Merged PR .*: .*)$|",
        r"Merge remote-tracking branch\s*.*$|",
        r"Automatic merge.*$|",
        r"Auto-merged .*? into .*$|",
        r"[Bb]ump \S+ from \S+ to \S+|",
        r"[Ii]nitial [Cc]ommit$",
        r")"
    ))
    .expect("Failed to compile ignore commit regex");

    /// Pre-compiled strict regex for the fast-fail conventional commit check
    pub static ref SIMPLE_COMMIT_REGEX: Regex = Regex::new(&format!(
        concat!(
            r"(?s)^(?P<type>{types})",
            r"(?P<scope>\(\S+\))?!?:",
            r" (?P<description>[^\s](?:[^\n\r]*[^.\s])?)",
            r"[^\S\n]*(?:\n[^\S\n]*\n(?P<body>.*)|\s*)$"
        ),
        types = COMMIT_TYPES.join("|")
    ))
    .expect("Failed to compile simple commit regex");

    /// Pre-compiled lenient regex that captures every commit field independently
    pub static ref DETAILED_COMMIT_REGEX: Regex = Regex::new(concat!(
        r"(?s)^(?P<type>\w+\s*)?",
        r"(?:\((?P<scope>[^)]*)\)(?P<space_after_scope>\s*))?",
        r"!?(?P<colon>:\s?)?",
        r"(?P<description>[^\n\r]+)?",
        r"(?P<body_separator>(?:\r?\n){0,2})",
        r"(?P<body>.*)$"
    ))
    .expect("Failed to compile detailed commit regex");
}

/// Settings for a single lint run.
///
/// The value is immutable for the duration of a call; callers that want
/// different behavior build a new value.
///
/// # Examples
///
/// ```
/// use commitlint_core::config::LintConfig;
///
/// let config = LintConfig {
///     max_header_length: 50,
///     ..LintConfig::default()
/// };
/// assert!(!config.skip_detail);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Maximum number of characters allowed in the header
    #[serde(default = "default_max_header_length")]
    pub max_header_length: usize,

    /// Whether to skip the header length check entirely
    #[serde(default)]
    pub disable_max_header_length: bool,

    /// Whether to run the fast-fail checks instead of the detailed ones
    #[serde(default)]
    pub skip_detail: bool,

    /// Whether to remove comment lines and verbose diffs before linting
    #[serde(default)]
    pub strip_comments: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_header_length: default_max_header_length(),
            disable_max_header_length: false,
            skip_detail: false,
            strip_comments: false,
        }
    }
}

/// Contents of a `.commitlint.toml` file.
///
/// Only a small set of options is recognized; unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommitlintConfig {
    #[serde(default = "default_max_header_length")]
    pub max_header_length: usize,

    #[serde(default)]
    pub disable_max_header_length: bool,

    #[serde(default)]
    pub skip_detail: bool,
}

impl CommitlintConfig {
    /// Convert the file settings into the settings for a lint run.
    pub fn to_lint_config(&self) -> LintConfig {
        LintConfig {
            max_header_length: self.max_header_length,
            disable_max_header_length: self.disable_max_header_length,
            skip_detail: self.skip_detail,
            strip_comments: false,
        }
    }
}

impl Default for CommitlintConfig {
    fn default() -> Self {
        Self {
            max_header_length: default_max_header_length(),
            disable_max_header_length: false,
            skip_detail: false,
        }
    }
}

fn default_max_header_length() -> usize {
    DEFAULT_MAX_HEADER_LENGTH
}

/// Loads the commitlint configuration from the given path.
///
/// # Arguments
/// * `path` - Path to the configuration file
///
/// # Returns
/// * `Ok(CommitlintConfig)` if loaded and valid
/// * `Err(ConfigLoadError)` if the file is missing, malformed, or holds an invalid value
pub fn load_commitlint_config<P: AsRef<Path>>(path: P) -> Result<CommitlintConfig, ConfigLoadError> {
    let path_ref = path.as_ref();
    let content = match fs::read_to_string(path_ref) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigLoadError::NotFound(path_ref.display().to_string()));
        }
        Err(e) => return Err(ConfigLoadError::Io(e)),
    };
    let config: CommitlintConfig = toml::from_str(&content)?;
    if config.max_header_length == 0 {
        return Err(ConfigLoadError::InvalidValue(
            "max_header_length must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}
