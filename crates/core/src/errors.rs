use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while loading a `.commitlint.toml` file.
///
/// These are usage errors: the engine never recovers from them, the caller is
/// expected to report them and stop.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}
