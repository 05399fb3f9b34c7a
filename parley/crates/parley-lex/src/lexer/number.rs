//! Number literal lexing.
//!
//! Numbers are decimal only: an optional leading `-`, digits, at most one
//! decimal point and an optional exponent. Malformed literals are consumed
//! whole and reported instead of being split into several tokens.

use crate::error::LexErrorCode;
use crate::lexer::identifier::{is_ident_continue, is_ident_start};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an integer or double literal.
    ///
    /// Starts at a digit or a `.`. A `-` belongs to the number when a digit
    /// or a `.` follows it; otherwise the cursor is rewound and the scanner
    /// declines so the `-` can be read as an operator.
    ///
    /// A `.` is always claimed here, so a lone `.` is a one-character
    /// double and `.size` after a name is an illegal identifier.
    pub(crate) fn scan_number(&mut self) -> bool {
        if self.cursor.peek(0) == '-' {
            self.cursor.advance();
        }
        if !self.at_numeric_start() {
            self.cursor.restore(self.token_start());
            return false;
        }

        let mut is_double = false;
        let mut seen_dot = false;

        loop {
            match self.cursor.peek(0) {
                c if c.is_ascii_digit() => {
                    self.cursor.advance();
                },
                '.' if seen_dot => {
                    self.cursor.eat_while(|c| c.is_ascii_digit() || c == '.');
                    self.report_malformed_number("multiple decimal points");
                    return true;
                },
                '.' => {
                    self.cursor.advance();
                    seen_dot = true;
                    is_double = true;
                },
                'e' | 'E' => {
                    self.cursor.advance();
                    is_double = true;
                    if matches!(self.cursor.peek(0), '+' | '-') {
                        self.cursor.advance();
                    }
                    if !self.cursor.peek(0).is_ascii_digit() {
                        self.cursor.eat_while(is_ident_continue);
                        self.report_malformed_number("missing exponent value");
                        return true;
                    }
                    self.cursor.eat_while(|c| c.is_ascii_digit());
                    break;
                },
                _ => break,
            }
        }

        let lexeme = self.current_lexeme();
        if lexeme.len() > 1 && lexeme.ends_with('.') {
            self.report_malformed_number("trailing decimal point");
            return true;
        }

        if is_ident_start(self.cursor.peek(0)) {
            self.cursor.eat_while(is_ident_continue);
            let message = format!(
                "Illegal identifier '{}' (cannot start with digit)",
                self.current_lexeme()
            );
            self.push_error(LexErrorCode::IllegalIdentifier, message);
            return true;
        }

        let kind = if is_double {
            TokenKind::Double
        } else {
            TokenKind::Integer
        };
        self.push_token(kind);
        true
    }

    /// Returns true at a digit or a `.`.
    fn at_numeric_start(&self) -> bool {
        let c = self.cursor.peek(0);
        c.is_ascii_digit() || c == '.'
    }

    fn report_malformed_number(&mut self, reason: &str) {
        let message = format!(
            "Malformed number literal: {} ('{}')",
            reason,
            self.current_lexeme()
        );
        self.push_error(LexErrorCode::MalformedNumber, message);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Token, TokenKind};
    use crate::{tokenize, LexErrorCode};

    fn lex_number(source: &str) -> Token {
        let result = tokenize(source);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert_eq!(result.tokens.len(), 1, "{:?}", result.tokens);
        result.tokens.into_iter().next().expect("no token")
    }

    fn lex_number_error(source: &str) -> LexError {
        let result = tokenize(source);
        assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
        result.errors.into_iter().next().expect("no error")
    }

    #[test]
    fn test_integer() {
        let token = lex_number("42");
        assert_eq!(token.kind, TokenKind::Integer);
        assert_eq!(token.lexeme, "42");
        assert_eq!((token.line(), token.column()), (1, 1));
    }

    #[test]
    fn test_double() {
        let token = lex_number("3.14e10");
        assert_eq!(token.kind, TokenKind::Double);
        assert_eq!(token.lexeme, "3.14e10");
    }

    #[test]
    fn test_exponent_without_dot_is_double() {
        assert_eq!(lex_number("1e5").kind, TokenKind::Double);
        assert_eq!(lex_number("2E-3").lexeme, "2E-3");
        assert_eq!(lex_number("7e+2").lexeme, "7e+2");
    }

    #[test]
    fn test_leading_dot() {
        let token = lex_number(".5");
        assert_eq!(token.kind, TokenKind::Double);
        assert_eq!(token.lexeme, ".5");
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(lex_number("-7").kind, TokenKind::Integer);
        assert_eq!(lex_number("-7").lexeme, "-7");
        assert_eq!(lex_number("-.5").kind, TokenKind::Double);
    }

    #[test]
    fn test_minus_between_numbers_binds_right() {
        let result = tokenize("5-3");
        let lexemes: Vec<_> = result.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, ["5", "-3"]);
    }

    #[test]
    fn test_lone_minus_is_operator() {
        let result = tokenize("- x");
        assert_eq!(result.tokens[0].kind, TokenKind::Operator);
        assert_eq!(result.tokens[0].lexeme, "-");
        assert_eq!(result.tokens[0].column(), 1);
    }

    #[test]
    fn test_minus_equals_is_operator() {
        let result = tokenize("x -= 1");
        assert_eq!(result.tokens[1].lexeme, "-=");
    }

    #[test]
    fn test_lone_dot_is_double() {
        let token = lex_number(".");
        assert_eq!(token.kind, TokenKind::Double);
        assert_eq!(token.lexeme, ".");
    }

    #[test]
    fn test_minus_dot_is_trailing_point() {
        let error = lex_number_error("-.");
        assert_eq!(error.code, LexErrorCode::MalformedNumber);
        assert_eq!(
            error.message,
            "Malformed number literal: trailing decimal point ('-.')"
        );
    }

    #[test]
    fn test_dot_after_name_is_illegal_identifier() {
        let result = tokenize("crew.size");
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind, TokenKind::Identifier);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, LexErrorCode::IllegalIdentifier);
        assert_eq!(result.errors[0].lexeme, ".size");
        assert_eq!(result.errors[0].column(), 5);
    }

    #[test]
    fn test_multiple_decimal_points() {
        let error = lex_number_error("5.5.5");
        assert_eq!(error.code, LexErrorCode::MalformedNumber);
        assert_eq!(
            error.message,
            "Malformed number literal: multiple decimal points ('5.5.5')"
        );
        assert_eq!(error.lexeme, "5.5.5");
        assert_eq!(error.column(), 1);
    }

    #[test]
    fn test_multiple_decimal_points_consumes_whole_run() {
        let result = tokenize("1.2.3.4 x");
        assert_eq!(result.errors[0].lexeme, "1.2.3.4");
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].lexeme, "x");
    }

    #[test]
    fn test_missing_exponent_value() {
        let error = lex_number_error("5e");
        assert_eq!(
            error.message,
            "Malformed number literal: missing exponent value ('5e')"
        );

        let error = lex_number_error("5e+x");
        assert_eq!(error.lexeme, "5e+x");
    }

    #[test]
    fn test_trailing_decimal_point() {
        let error = lex_number_error("5.");
        assert_eq!(
            error.message,
            "Malformed number literal: trailing decimal point ('5.')"
        );
    }

    #[test]
    fn test_illegal_identifier() {
        let error = lex_number_error("5a");
        assert_eq!(error.code, LexErrorCode::IllegalIdentifier);
        assert_eq!(error.message, "Illegal identifier '5a' (cannot start with digit)");
        assert_eq!(error.lexeme, "5a");
    }

    #[test]
    fn test_illegal_identifier_consumes_word() {
        let result = tokenize("12abc_3 x");
        assert_eq!(result.errors[0].lexeme, "12abc_3");
        assert_eq!(result.tokens.len(), 1);
    }

    #[test]
    fn test_illegal_identifier_after_exponent() {
        let error = lex_number_error("1e5x");
        assert_eq!(error.code, LexErrorCode::IllegalIdentifier);
        assert_eq!(error.lexeme, "1e5x");
    }

    #[test]
    fn test_number_followed_by_punctuation() {
        let result = tokenize("(42)");
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::Punctuation, TokenKind::Integer, TokenKind::Punctuation]
        );
    }
}
