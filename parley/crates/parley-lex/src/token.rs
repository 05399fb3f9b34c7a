//! Token definitions.
//!
//! A [`Token`] records the kind, the coarse category, the exact source text
//! and the location of one lexeme. Tokens are plain values; every lexeme is
//! a byte-exact slice of the input.

use std::fmt;

use parley_util::Span;
use serde::Serialize;

/// The kind of a token.
///
/// Kinds serialize and display as the upper-case names used in token tables
/// (`NEWLINE`, `COMMENT_SINGLE`, `INTEGER`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A run of consecutive `\n` characters.
    Newline,
    /// `<<<` to the end of the line.
    CommentSingle,
    /// `<<< ... >>>`, possibly nested and spanning lines.
    CommentMulti,
    /// A quoted string literal, quotes included.
    String,
    /// Digits with no decimal point or exponent.
    Integer,
    /// Digits with a decimal point or an exponent.
    Double,
    /// A word from the reserved keyword list.
    Keyword,
    /// Any other word.
    Identifier,
    /// An arithmetic, comparison, assignment or bitwise operator.
    Operator,
    /// One of `( ) [ ] { } , .`.
    Punctuation,
}

impl TokenKind {
    /// Returns the category this kind belongs to.
    pub const fn category(self) -> TokenCategory {
        match self {
            TokenKind::Newline | TokenKind::Punctuation => TokenCategory::Separator,
            TokenKind::CommentSingle | TokenKind::CommentMulti => TokenCategory::Comment,
            TokenKind::String => TokenCategory::StringLit,
            TokenKind::Integer => TokenCategory::IntLit,
            TokenKind::Double => TokenCategory::DblLit,
            TokenKind::Keyword => TokenCategory::Keyword,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::Operator => TokenCategory::Operator,
        }
    }

    /// Returns the display name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::CommentSingle => "COMMENT_SINGLE",
            TokenKind::CommentMulti => "COMMENT_MULTI",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Double => "DOUBLE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
        }
    }

    /// Returns true for kinds skipped when looking back for the previous
    /// significant token.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Newline | TokenKind::CommentSingle | TokenKind::CommentMulti
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenCategory {
    /// Line breaks and punctuation.
    Separator,
    /// Single- and multi-line comments.
    Comment,
    /// String literals.
    StringLit,
    /// Integer literals.
    IntLit,
    /// Double literals.
    DblLit,
    /// Reserved words.
    Keyword,
    /// User names.
    Identifier,
    /// Operators.
    Operator,
}

impl TokenCategory {
    /// Returns the display name of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Separator => "SEPARATOR",
            TokenCategory::Comment => "COMMENT",
            TokenCategory::StringLit => "STRING_LIT",
            TokenCategory::IntLit => "INT_LIT",
            TokenCategory::DblLit => "DBL_LIT",
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexeme with its classification and location.
///
/// # Example
///
/// ```
/// use parley_lex::{tokenize, TokenCategory, TokenKind};
///
/// let tokens = tokenize("anchor").tokens;
/// assert_eq!(tokens[0].kind, TokenKind::Keyword);
/// assert_eq!(tokens[0].category, TokenCategory::Keyword);
/// assert_eq!(tokens[0].display_type(), "anchor");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Category, always `kind.category()`.
    pub category: TokenCategory,
    /// Exact source text.
    pub lexeme: String,
    /// Source location of the first character.
    pub span: Span,
}

impl Token {
    /// Creates a token; the category is derived from `kind`.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            category: kind.category(),
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Line of the first character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns the label shown in the "Token" column of a token table: the
    /// keyword itself for keywords, otherwise the kind name.
    pub fn display_type(&self) -> &str {
        match self.kind {
            TokenKind::Keyword => &self.lexeme,
            kind => kind.as_str(),
        }
    }
}
