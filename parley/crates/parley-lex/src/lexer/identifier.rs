//! Identifier and keyword lexing.

use crate::keywords::is_keyword;
use crate::token::TokenKind;
use crate::Lexer;

/// Returns true if `c` can start an identifier: an ASCII letter or `_`.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans an identifier or keyword.
    ///
    /// The longest run of identifier characters is read first and then
    /// looked up, so `anchored` is an identifier even though it starts with
    /// the keyword `anchor`.
    pub(crate) fn scan_identifier(&mut self) -> bool {
        if !is_ident_start(self.cursor.peek(0)) {
            return false;
        }
        self.cursor.eat_while(is_ident_continue);

        let kind = if is_keyword(self.current_lexeme()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push_token(kind);
        true
    }
}
