use std::io;
use thiserror::Error;

use crate::engines::EngineError;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Raised by the calling layer when the submitted text is empty or
    /// whitespace-only. The classifier itself is never invoked in this case.
    #[error("No input: give me some words first")]
    EmptyInput,

    /// Represents failures surfaced by either scoring engine. Propagated
    /// unchanged; no retry or fallback scoring happens anywhere above.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}
