//! Lexical error types.
//!
//! Errors are collected, never raised: the lexer records a [`LexError`] and
//! keeps scanning. Each error converts into a [`Diagnostic`] for rendering.

use std::fmt;

use parley_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error codes reported by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LexErrorCode {
    /// `E000`: no rule accepts the character.
    UnrecognizedToken,
    /// `E001`: end of line or input inside a string literal.
    UnterminatedString,
    /// `E002`: multiple decimal points, missing exponent digits or a
    /// trailing decimal point.
    MalformedNumber,
    /// `E003`: a letter directly after a numeric literal.
    IllegalIdentifier,
    /// `E004`: two operators that may not be adjacent.
    InvalidOperatorSequence,
    /// `E005`: a multi-line comment still open at end of input. Only
    /// reported when enabled in [`crate::LexOptions`].
    UnterminatedComment,
}

impl LexErrorCode {
    /// All codes in numeric order.
    pub const ALL: [LexErrorCode; 6] = [
        LexErrorCode::UnrecognizedToken,
        LexErrorCode::UnterminatedString,
        LexErrorCode::MalformedNumber,
        LexErrorCode::IllegalIdentifier,
        LexErrorCode::InvalidOperatorSequence,
        LexErrorCode::UnterminatedComment,
    ];

    /// Numeric part of the code.
    pub const fn number(self) -> u32 {
        match self {
            LexErrorCode::UnrecognizedToken => 0,
            LexErrorCode::UnterminatedString => 1,
            LexErrorCode::MalformedNumber => 2,
            LexErrorCode::IllegalIdentifier => 3,
            LexErrorCode::InvalidOperatorSequence => 4,
            LexErrorCode::UnterminatedComment => 5,
        }
    }

    /// Returns the code as a diagnostic code (`E000` .. `E005`).
    pub const fn diagnostic_code(self) -> DiagnosticCode {
        DiagnosticCode::new("E", self.number())
    }

    /// Fix-it hint attached to rendered diagnostics.
    pub const fn help(self) -> &'static str {
        match self {
            LexErrorCode::UnrecognizedToken => "remove the character or place it inside a string",
            LexErrorCode::UnterminatedString => "close the string with the quote that opened it",
            LexErrorCode::MalformedNumber => {
                "use a single decimal point followed by digits, and digits after an exponent"
            },
            LexErrorCode::IllegalIdentifier => "identifiers must start with a letter or '_'",
            LexErrorCode::InvalidOperatorSequence => {
                "separate the operators with an operand or parentheses"
            },
            LexErrorCode::UnterminatedComment => "close the comment with '>>>'",
        }
    }
}

impl fmt::Display for LexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic_code(), f)
    }
}

impl Serialize for LexErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A recorded lexical error.
///
/// Displays as `[E004] message (line L, col C)`.
///
/// # Example
///
/// ```
/// use parley_lex::{tokenize, LexErrorCode};
///
/// let result = tokenize("ask 5a");
/// let error = &result.errors[0];
/// assert_eq!(error.code, LexErrorCode::IllegalIdentifier);
/// assert_eq!(
///     error.to_string(),
///     "[E003] Illegal identifier '5a' (cannot start with digit) (line 1, col 5)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[error("[{code}] {message} (line {}, col {})", .span.line, .span.column)]
pub struct LexError {
    /// Error code.
    pub code: LexErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Offending source text.
    pub lexeme: String,
    /// Location of the offending text.
    pub span: Span,
}

impl LexError {
    /// Creates a new error.
    pub fn new(
        code: LexErrorCode,
        message: impl Into<String>,
        lexeme: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Line of the offending text (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the offending text (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Converts the error into a diagnostic carrying its code, span and a
    /// fix-it hint.
    pub fn to_diagnostic(&self) -> Diagnostic {
        DiagnosticBuilder::error(self.message.clone())
            .code(self.code.diagnostic_code())
            .span(self.span)
            .help(self.code.help())
            .build()
    }
}
