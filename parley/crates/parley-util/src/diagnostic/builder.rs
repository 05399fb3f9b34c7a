//! Diagnostic builder and source snippets.
//!
//! [`DiagnosticBuilder`] constructs diagnostics with a fluent API;
//! [`SourceSnippet`] is the source line plus caret underline printed under
//! a rendered diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the
/// highlighted column range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build the snippet for `span` by looking up its line in `file`.
    ///
    /// A span running past the end of its first line is highlighted up to
    /// the end of that line. Returns `None` when the line does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_util::diagnostic::SourceSnippet;
    /// use parley_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("t", "ask 5.5.5\n");
    /// let snippet = SourceSnippet::from_span(&file, Span::new(4, 9, 1, 5)).unwrap();
    /// assert_eq!((snippet.start_column, snippet.end_column), (5, 10));
    /// ```
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line = file.line_at(span.line as usize)?;
        let start_column = span.column as usize;
        let line_len = line.chars().count();
        let width = file
            .span_text(span)
            .map(|text| text.lines().next().unwrap_or("").chars().count())
            .unwrap_or(0);
        let end_column = (start_column + width).min(line_len + 1).max(start_column);

        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret (^) line under the
    /// highlighted range. An empty range still gets one caret.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use parley_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use parley_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unterminated string literal")
///     .code(DiagnosticCode::new("E", 1))
///     .span(Span::new(0, 5, 1, 1))
///     .help("close the string with a matching quote")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
