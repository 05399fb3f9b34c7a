//! Comment lexing.
//!
//! Comments open with `<<<`. A comment whose closing `>>>` appears before
//! the next line break is multi-line and may nest; otherwise it runs to the
//! end of the line.

use crate::error::LexErrorCode;
use crate::token::TokenKind;
use crate::Lexer;

/// Opening comment delimiter.
pub(crate) const COMMENT_OPEN: &str = "<<<";

/// Closing comment delimiter.
pub(crate) const COMMENT_CLOSE: &str = ">>>";

impl<'a> Lexer<'a> {
    /// Scans a comment starting at `<<<`.
    pub(crate) fn scan_comment(&mut self) -> bool {
        if !self.cursor.starts_with(COMMENT_OPEN) {
            return false;
        }
        self.cursor.advance_n(COMMENT_OPEN.len());

        let rest = self.cursor.remaining();
        let rest_of_line = rest.find('\n').map_or(rest, |end| &rest[..end]);

        if rest_of_line.contains(COMMENT_CLOSE) {
            self.scan_multi_line_comment();
        } else {
            self.cursor.eat_while(|c| c != '\n');
            self.push_token(TokenKind::CommentSingle);
        }
        true
    }

    /// Scans the body of a multi-line comment after its opening `<<<`.
    ///
    /// Nested `<<<` raise the depth; a `>>>` at depth zero ends the comment,
    /// any other `>>>` lowers the depth.
    fn scan_multi_line_comment(&mut self) {
        let mut depth = 0u32;
        let mut closed = false;

        while !self.cursor.is_at_end() {
            if self.cursor.starts_with(COMMENT_OPEN) {
                self.cursor.advance_n(COMMENT_OPEN.len());
                depth += 1;
            } else if self.cursor.starts_with(COMMENT_CLOSE) {
                self.cursor.advance_n(COMMENT_CLOSE.len());
                if depth == 0 {
                    closed = true;
                    break;
                }
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }

        self.push_token(TokenKind::CommentMulti);
        if !closed && self.options.report_unterminated_comments {
            self.push_error(
                LexErrorCode::UnterminatedComment,
                "Unterminated multi-line comment (missing closing >>>)".to_string(),
            );
        }
    }
}
