//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for building diagnostics, collecting them
//! in a [`Handler`] and rendering them with a source snippet.
//!
//! # Examples
//!
//! ```
//! use parley_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use parley_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized token '@'")
//!     .code(DiagnosticCode::new("E", 0))
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;
use std::fmt;

use crate::span::{SourceFile, Span};

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic in the multi-line terminal format:
    ///
    /// ```text
    /// error[E002]: malformed number literal: multiple decimal points ('5.5.5')
    ///  --> voyage.parley:1:5
    ///   1 | ask 5.5.5
    ///     |     ^^^^^
    ///   = help: ...
    /// ```
    ///
    /// The snippet is omitted when the span's line is not in `file`.
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = format!("{}\n", self);
        out.push_str(&format!(
            " --> {}:{}:{}\n",
            file.name(),
            self.span.line,
            self.span.column
        ));

        if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` collects diagnostics in emission order and answers
/// queries about them.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
