//! Error taxonomy for a logging run.
//!
//! Every fatal condition of a run maps to one variant of [`TwLogError`], and
//! each variant carries its own process exit status so callers (and scripts
//! wrapping the CLI) can tell the classes apart:
//!
//! | Class        | Exit status |
//! |--------------|-------------|
//! | Config       | 2           |
//! | Validation   | 3           |
//! | Parse        | 4           |
//! | Source       | 5           |
//!
//! Submission failures are not part of this enum. They are per-record
//! outcomes collected by the dispatcher and never abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// The configuration file could not be turned into a usable [`Config`](super::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read from file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration file {0} is empty")]
    Empty(PathBuf),
    #[error("Could not parse configuration file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A row does not satisfy the configured column and project mapping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Column {column} ({field}) does not exist in the CSV file")]
    MissingColumn { column: String, field: &'static str },
    #[error("No project ID was found for \"{0}\". Add it to your configuration file")]
    UnknownProject(String),
}

/// A field value could not be interpreted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid duration \"{0}\": expected H:MM or a number of minutes")]
    InvalidDuration(String),
    #[error("Invalid date \"{0}\"")]
    InvalidDate(String),
}

/// Fatal errors that abort a run before anything is submitted.
#[derive(Debug, Error)]
pub enum TwLogError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Could not read rows from {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl TwLogError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TwLogError::Config(_) => 2,
            TwLogError::Validation(_) => 3,
            TwLogError::Parse(_) => 4,
            TwLogError::Source { .. } => 5,
        }
    }
}

/// Resolves the exit status for any error surfaced by a command.
///
/// Errors that are not part of the taxonomy (terminal prompts, runtime
/// failures) exit with `1`.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error.downcast_ref::<TwLogError>().map(TwLogError::exit_code).unwrap_or(1)
}
