//! Errors raised by the CLI and REPL.

use thiserror::Error;

/// An error from the runtime layer.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The phrase could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] zuelen_foundation::Error),

    /// The phrase is not a valid date.
    #[error("not a valid date: '{0}'")]
    InvalidDate(String),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// JSON encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A command was used incorrectly.
    #[error("{0}")]
    Usage(String),
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
