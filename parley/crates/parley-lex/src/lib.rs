//! parley-lex - Lexical Analyzer for the Parley scripting language
//!
//! This crate turns Parley source text into a list of classified tokens and
//! a separate list of lexical errors. Scanning never stops at an error: the
//! offending text is consumed, reported, and lexing resumes right after it.
//!
//! # Example Usage
//!
//! ```
//! use parley_lex::{tokenize, TokenKind};
//!
//! let result = tokenize("anchor gold = 42\nparrot gold");
//! assert!(result.errors.is_empty());
//!
//! let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds[..4], [
//!     TokenKind::Keyword,
//!     TokenKind::Keyword,
//!     TokenKind::Operator,
//!     TokenKind::Integer,
//! ]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, categories and the token record
//! - [`error`] - Error codes and the error record
//! - [`cursor`] - Character cursor for source traversal
//! - [`keywords`] - Reserved words
//! - [`operators`] - Operator tables and adjacency rules
//!
//! # Token Kinds
//!
//! | Kind | Category | Example |
//! |------|----------|---------|
//! | `NEWLINE` | `SEPARATOR` | `\n\n` |
//! | `COMMENT_SINGLE` | `COMMENT` | `<<< note` |
//! | `COMMENT_MULTI` | `COMMENT` | `<<< a <<< b >>> >>>` |
//! | `STRING` | `STRING_LIT` | `"ahoy"`, `'ahoy'` |
//! | `INTEGER` | `INT_LIT` | `42`, `-7` |
//! | `DOUBLE` | `DBL_LIT` | `3.14e10`, `.5` |
//! | `KEYWORD` | `KEYWORD` | `anchor`, `parrot` |
//! | `IDENTIFIER` | `IDENTIFIER` | `crew_size` |
//! | `OPERATOR` | `OPERATOR` | `+=`, `==`, `:` |
//! | `PUNCTUATION` | `SEPARATOR` | `(`, `,`, `}` |
//!
//! # Error Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | `E000` | Unrecognized character |
//! | `E001` | Unterminated string literal |
//! | `E002` | Malformed number literal |
//! | `E003` | Identifier starting with a digit |
//! | `E004` | Forbidden operator sequence |
//! | `E005` | Unterminated multi-line comment (opt-in) |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
mod lexer;
pub mod operators;
pub mod token;

#[cfg(test)]
mod edge_cases;

use std::collections::BTreeSet;

use serde::Serialize;
use static_assertions::assert_impl_all;

pub(crate) use lexer::Lexer;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorCode};
pub use token::{Token, TokenCategory, TokenKind};

/// Behaviour switches for [`tokenize_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Report a multi-line comment still open at end of input as `E005`.
    /// The comment token is produced either way.
    pub report_unterminated_comments: bool,
}

/// The result of lexing one source text.
///
/// Tokens and errors are each in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tokenized {
    /// Tokens produced.
    pub tokens: Vec<Token>,
    /// Errors recorded.
    pub errors: Vec<LexError>,
}

impl Tokenized {
    /// Returns true if any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the lines carrying at least one error, ascending and without
    /// duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_lex::tokenize;
    ///
    /// let result = tokenize("5a 6b\nanchor\n@");
    /// assert_eq!(result.error_lines(), [1, 3]);
    /// ```
    pub fn error_lines(&self) -> Vec<u32> {
        self.errors
            .iter()
            .map(LexError::line)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Splits the result into its token and error lists.
    pub fn into_parts(self) -> (Vec<Token>, Vec<LexError>) {
        (self.tokens, self.errors)
    }
}

assert_impl_all!(Token: Send, Sync);
assert_impl_all!(LexError: Send, Sync);
assert_impl_all!(Tokenized: Send, Sync);

/// Tokenizes `source` with the default options.
///
/// Never fails; problems in the input are returned as errors alongside the
/// tokens.
pub fn tokenize(source: &str) -> Tokenized {
    tokenize_with(source, &LexOptions::default())
}

/// Tokenizes `source` with the given options.
///
/// # Example
///
/// ```
/// use parley_lex::{tokenize_with, LexErrorCode, LexOptions};
///
/// let options = LexOptions { report_unterminated_comments: true };
/// let result = tokenize_with("<<< open <<< nested >>>", &options);
/// assert_eq!(result.errors[0].code, LexErrorCode::UnterminatedComment);
/// ```
pub fn tokenize_with(source: &str, options: &LexOptions) -> Tokenized {
    let result = Lexer::new(source, *options).tokenize();
    tracing::debug!(
        bytes = source.len(),
        tokens = result.tokens.len(),
        errors = result.errors.len(),
        "tokenized source"
    );
    result
}
