//! Operator and punctuation lexing.

use crate::error::LexErrorCode;
use crate::operators::{forbids, is_punctuation, match_operator};
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Returns the previous significant token if it is an operator.
///
/// Newlines and comments are skipped; any other token in between means
/// there is no adjacent operator.
fn previous_operator(tokens: &[Token]) -> Option<&Token> {
    tokens
        .iter()
        .rev()
        .find(|token| !token.kind.is_trivia())
        .filter(|token| token.kind == TokenKind::Operator)
}

impl<'a> Lexer<'a> {
    /// Scans an operator, preferring the two-character forms.
    ///
    /// The operator token is always recorded. If the previous significant
    /// token is an operator that forbids this one, an `E004` error is
    /// recorded as well.
    pub(crate) fn scan_operator(&mut self) -> bool {
        let Some(op) = match_operator(self.cursor.remaining()) else {
            return false;
        };
        self.cursor.advance_n(op.chars().count());

        let forbidden_after = previous_operator(&self.tokens)
            .filter(|prev| forbids(&prev.lexeme, op))
            .map(|prev| prev.lexeme.clone());
        if let Some(prev) = forbidden_after {
            self.push_error(
                LexErrorCode::InvalidOperatorSequence,
                format!(
                    "Invalid operator sequence: '{}' cannot be followed by '{}'",
                    prev, op
                ),
            );
        }

        self.push_token(TokenKind::Operator);
        true
    }

    /// Scans a single punctuation character.
    pub(crate) fn scan_punctuation(&mut self) -> bool {
        if !is_punctuation(self.cursor.peek(0)) {
            return false;
        }
        self.cursor.advance();
        self.push_token(TokenKind::Punctuation);
        true
    }
}
