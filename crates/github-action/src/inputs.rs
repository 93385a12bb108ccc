//! Reading action inputs and writing step outputs.
//!
//! GitHub passes each input `name` as the environment variable `INPUT_<NAME>`
//! and collects outputs and the step summary through files named by
//! `GITHUB_OUTPUT` and `GITHUB_STEP_SUMMARY`.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

use crate::errors::ActionError;

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;

/// Environment variable naming the file that collects step outputs
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Environment variable naming the file that collects the step summary
pub const GITHUB_STEP_SUMMARY: &str = "GITHUB_STEP_SUMMARY";

/// Errors in the inputs given to the action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Input required and not supplied: {0}")]
    Missing(String),

    #[error(
        "Input '{name}' does not meet YAML 1.2 \"Core Schema\" specification: got '{value}'. \
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    NotBoolean { name: String, value: String },
}

/// A snapshot of the process environment.
#[derive(Debug, Clone, Default)]
pub struct ActionEnvironment {
    vars: HashMap<String, String>,
}

impl ActionEnvironment {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    pub fn require(&self, key: &str) -> Result<String, ActionError> {
        self.var(key)
            .ok_or_else(|| ActionError::MissingEnvironment(key.to_string()))
    }
}

/// Name of the environment variable carrying the input `name`.
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Reads the input `name`.
pub fn get_input(env: &ActionEnvironment, name: &str) -> Result<String, InputError> {
    env.var(&input_variable(name))
        .ok_or_else(|| InputError::Missing(name.to_string()))
}

/// Reads the input `name` as a YAML 1.2 core schema boolean.
///
/// Only `true`, `True`, `TRUE`, `false`, `False` and `FALSE` are accepted.
pub fn get_boolean_input(env: &ActionEnvironment, name: &str) -> Result<bool, InputError> {
    let value = get_input(env, name)?;
    match value.as_str() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(InputError::NotBoolean {
            name: name.to_string(),
            value,
        }),
    }
}

/// Appends `line` and a newline to the file at `path`, creating the file if needed.
pub fn write_line_to_file(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

/// Records the step output `name=value`.
pub fn write_output(
    env: &ActionEnvironment,
    name: &str,
    value: impl Display,
) -> Result<(), ActionError> {
    let path = env.require(GITHUB_OUTPUT)?;
    write_line_to_file(Path::new(&path), &format!("{}={}", name, value))
        .map_err(|source| ActionError::Io { path, source })
}

/// Appends a line to the step summary.
pub fn write_step_summary(env: &ActionEnvironment, line: &str) -> Result<(), ActionError> {
    let path = env.require(GITHUB_STEP_SUMMARY)?;
    write_line_to_file(Path::new(&path), line).map_err(|source| ActionError::Io { path, source })
}
