//! Source file with precomputed line starts.
//!
//! Lets consumers of the lexer map a [`Span`] back onto its source line,
//! e.g. to print a snippet under a diagnostic.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use parley_util::span::SourceFile;
///
/// let file = SourceFile::new("voyage.parley", "anchor x = 5\nparrot x");
/// assert_eq!(file.name(), "voyage.parley");
/// assert_eq!(file.line_at(2), Some("parrot x"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its line break
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(3), Some("line3"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract the text covered by a span, with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use parley_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("main", "anchor x");
    /// assert_eq!(file.span_text(Span::new(0, 6, 1, 1)).unwrap(), "anchor");
    /// assert!(file.span_text(Span::new(6, 2, 1, 7)).is_err());
    /// ```
    pub fn span_text(&self, span: Span) -> SourceMapResult<&str> {
        let Span { start, end, .. } = span;
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::ExtractFailed(
                "Range is not on character boundaries".to_string(),
            ));
        }

        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
