//! String literal lexing.

use crate::error::LexErrorCode;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a string literal opened by `"` or `'`.
    ///
    /// The literal ends at the same quote character. A backslash consumes
    /// the character after it unconditionally, so `\"` does not close the
    /// string. A line break or end of input before the closing quote is
    /// reported as `E001`.
    pub(crate) fn scan_string(&mut self) -> bool {
        let quote = self.cursor.peek(0);
        if quote != '"' && quote != '\'' {
            return false;
        }
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            match self.cursor.peek(0) {
                '\n' => break,
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                c if c == quote => {
                    self.cursor.advance();
                    self.push_token(TokenKind::String);
                    return true;
                },
                _ => {
                    self.cursor.advance();
                },
            }
        }

        self.push_error(
            LexErrorCode::UnterminatedString,
            format!("Unterminated string literal (missing closing {})", quote),
        );
        true
    }
}
