//! Unified application error type.
//! All modules (cli, config, core, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("failed to read file {path:?}: {source}")]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write timeline: {0}")]
    Render(io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("file is required (use --file <PATH>)")]
    MissingInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Outcome of a log line that could not be turned into an entry.
/// Lines failing this way are dropped from the timeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("doesn't match pattern")]
    NoMatch,

    #[error("time format illegal: {0}")]
    InvalidTimestamp(String),

    #[error("time does not exist in the local time zone: {0}")]
    NonexistentLocalTime(String),
}
