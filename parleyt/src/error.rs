//! Error handling module for the parleyt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the parleyt CLI application.
#[derive(Error, Debug)]
pub enum ParleytError {
    /// Error when the configuration cannot be loaded or logging cannot be
    /// set up.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading the source file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The checked source contains lexical errors.
    #[error("{count} lexical error(s) in {source_name}")]
    Lex {
        /// Name of the checked source.
        source_name: String,
        /// Number of errors found.
        count: usize,
    },
}

/// Result type alias using ParleytError.
pub type Result<T> = std::result::Result<T, ParleytError>;
