//! Error types for the pseu CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Parsing, seeding or generation failure from the core
    #[error(transparent)]
    Core(#[from] pseu_core::PseuError),

    /// Item list given with --json was not a JSON array of strings
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
