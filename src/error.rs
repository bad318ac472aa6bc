//! Error types for studydash.

use thiserror::Error;

/// Errors surfaced by the CLI, configuration and terminal layers.
///
/// Timer and task operations never fail; only the outer surfaces do.
#[derive(Debug, Error)]
pub enum StudyError {
    /// Configuration could not be located, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup, drawing or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A named item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}
