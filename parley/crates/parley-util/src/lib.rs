//! parley-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Parley toolchain: source locations,
//! line lookup over a source text, and the diagnostic types every phase
//! reports through.
//!
//! # Module Structure
//!
//! - [`span`] - Byte/line/column locations and [`SourceFile`] line lookup
//! - [`diagnostic`] - Diagnostics, severity levels, codes and the [`Handler`]
//! - [`error`] - Error types for the fallible operations in this crate
//!
//! # Example
//!
//! ```
//! use parley_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized token '@'")
//!     .code(DiagnosticCode::new("E", 0))
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
