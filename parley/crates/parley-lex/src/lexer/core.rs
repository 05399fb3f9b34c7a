//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! helpers shared by the sub-scanners.

use parley_util::Span;

use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::{LexError, LexErrorCode};
use crate::token::{Token, TokenKind};
use crate::{LexOptions, Tokenized};

/// Lexer for Parley source text.
///
/// The lexer walks the source once, appending tokens and errors to two
/// separate lists. Each sub-scanner inspects the current position and
/// either declines without consuming anything or consumes a lexeme and
/// records exactly one token or one error.
pub(crate) struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Behaviour switches.
    pub(crate) options: LexOptions,

    /// Cursor state where the current lexeme starts.
    token_start: CursorSnapshot,

    /// Tokens produced so far.
    pub(crate) tokens: Vec<Token>,

    /// Errors recorded so far.
    pub(crate) errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub(crate) fn new(source: &'a str, options: LexOptions) -> Self {
        let cursor = Cursor::new(source);
        Self {
            token_start: cursor.snapshot(),
            cursor,
            options,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scans the whole input.
    ///
    /// Rules are tried in a fixed order at every position: newline run,
    /// comment, string, number, identifier, operator, punctuation. A
    /// character no rule accepts is consumed and reported as `E000`.
    pub(crate) fn tokenize(mut self) -> Tokenized {
        loop {
            self.skip_whitespace();
            if self.cursor.is_at_end() {
                break;
            }

            self.begin_token();
            let accepted = self.scan_newlines()
                || self.scan_comment()
                || self.scan_string()
                || self.scan_number()
                || self.scan_identifier()
                || self.scan_operator()
                || self.scan_punctuation();

            if !accepted {
                let c = self.cursor.advance();
                self.push_error(
                    LexErrorCode::UnrecognizedToken,
                    format!("Unrecognized token '{}'", c),
                );
            }
        }

        Tokenized {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Skips spaces, tabs and carriage returns. Newlines are tokens.
    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(|c| matches!(c, ' ' | '\t' | '\r'));
    }

    /// Scans a run of consecutive `\n` characters into one token.
    fn scan_newlines(&mut self) -> bool {
        if self.cursor.peek(0) != '\n' {
            return false;
        }
        self.cursor.eat_while(|c| c == '\n');
        self.push_token(TokenKind::Newline);
        true
    }

    /// Marks the current position as the start of the next lexeme.
    #[inline]
    pub(crate) fn begin_token(&mut self) {
        self.token_start = self.cursor.snapshot();
    }

    /// Returns the cursor state where the current lexeme starts.
    #[inline]
    pub(crate) fn token_start(&self) -> CursorSnapshot {
        self.token_start
    }

    /// Returns the text consumed since [`Lexer::begin_token`].
    #[inline]
    pub(crate) fn current_lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start.position)
    }

    /// Returns the span of the text consumed since [`Lexer::begin_token`].
    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start.position,
            self.cursor.position(),
            self.token_start.line,
            self.token_start.column,
        )
    }

    /// Records a token for the current lexeme.
    pub(crate) fn push_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.current_lexeme(), self.current_span());
        self.tokens.push(token);
    }

    /// Records an error for the current lexeme.
    pub(crate) fn push_error(&mut self, code: LexErrorCode, message: String) {
        let error = LexError::new(code, message, self.current_lexeme(), self.current_span());
        tracing::trace!(
            code = %error.code,
            line = error.line(),
            column = error.column(),
            lexeme = %error.lexeme,
            "lexical error"
        );
        self.errors.push(error);
    }
}
