//! Core error types for parley-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Start byte offset of the span
        span_start: usize,
        /// End byte offset of the span
        span_end: usize,
    },

    /// Span does not fall on character boundaries
    #[error("Failed to extract source: {0}")]
    ExtractFailed(String),
}

/// Result type alias for source lookups
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
