use std::path::{Path, PathBuf};

use commitlint_core::config::{load_commitlint_config, CommitlintConfig, LintConfig};
use commitlint_core::errors::ConfigLoadError;
use tracing::{debug, info};

use crate::errors::CliError;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".commitlint.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Settings given on the command line, applied on top of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Run the fast-fail checks only
    pub skip_detail: bool,

    /// Replace the configured maximum header length
    pub max_header_length: Option<usize>,

    /// Turn the header length check off
    pub disable_max_header_length: bool,

    /// Remove comments and verbose diffs before linting
    pub strip_comments: bool,
}

/// Get the path to the configuration file
pub fn get_config_path(config_path: Option<&Path>, working_dir: &Path) -> PathBuf {
    match config_path {
        Some(path) => path.to_path_buf(),
        None => working_dir.join(DEFAULT_CONFIG_FILENAME),
    }
}

/// Builds the lint settings from the configuration file and the command line.
///
/// An explicitly requested file must exist. The default file is optional; when
/// it is absent the built-in defaults are used.
pub fn resolve_lint_config(
    config_path: Option<&Path>,
    working_dir: &Path,
    overrides: &ConfigOverrides,
) -> Result<LintConfig, CliError> {
    let path = get_config_path(config_path, working_dir);
    debug!("Loading configuration from {:?}", path);

    let file_config = match load_commitlint_config(&path) {
        Ok(config) => {
            info!("Loaded configuration from {:?}", path);
            config
        }
        Err(ConfigLoadError::NotFound(_)) if config_path.is_none() => {
            debug!("No configuration file found, using defaults");
            CommitlintConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    let mut config = file_config.to_lint_config();
    if overrides.skip_detail {
        config.skip_detail = true;
    }

    // An explicit length on the command line re-enables the check
    if let Some(max_header_length) = overrides.max_header_length {
        config.max_header_length = max_header_length;
        config.disable_max_header_length = false;
    }

    if overrides.disable_max_header_length {
        config.disable_max_header_length = true;
    }

    config.strip_comments = overrides.strip_comments;

    Ok(config)
}
