//! Edge case tests for parley-lex

use proptest::prelude::*;

use crate::{tokenize, LexErrorCode, TokenKind, Tokenized};

fn kinds(result: &Tokenized) -> Vec<TokenKind> {
    result.tokens.iter().map(|t| t.kind).collect()
}

fn lexemes(result: &Tokenized) -> Vec<&str> {
    result.tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let result = tokenize("");
    assert!(result.tokens.is_empty());
    assert!(result.errors.is_empty());
    assert!(result.error_lines().is_empty());
}

#[test]
fn test_edge_only_newlines() {
    let result = tokenize("\n\n\n\n");
    assert_eq!(kinds(&result), [TokenKind::Newline]);
    assert_eq!(result.tokens[0].lexeme.len(), 4);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let result = tokenize(&format!("anchor {} = 1", name));
    assert_eq!(result.tokens[1].lexeme, name);
    assert_eq!(result.tokens[2].column(), 10009);
}

#[test]
fn test_edge_long_number() {
    let digits = "9".repeat(500);
    let result = tokenize(&digits);
    assert_eq!(kinds(&result), [TokenKind::Integer]);
}

#[test]
fn test_edge_keyword_against_punctuation() {
    let result = tokenize("parrot(aye)");
    assert_eq!(lexemes(&result), ["parrot", "(", "aye", ")"]);
    assert_eq!(result.tokens[0].kind, TokenKind::Keyword);
    assert_eq!(result.tokens[2].kind, TokenKind::Keyword);
}

#[test]
fn test_edge_comment_marker_inside_string() {
    let result = tokenize("\"<<< not a comment\"");
    assert_eq!(kinds(&result), [TokenKind::String]);
}

#[test]
fn test_edge_string_inside_comment() {
    let result = tokenize("<<< \"unclosed");
    assert_eq!(kinds(&result), [TokenKind::CommentSingle]);
    assert!(result.errors.is_empty());
}

#[test]
fn test_edge_comment_opener_at_end() {
    let result = tokenize("anchor <<<");
    assert_eq!(result.tokens[1].kind, TokenKind::CommentSingle);
    assert_eq!(result.tokens[1].lexeme, "<<<");
}

#[test]
fn test_edge_empty_multi_line_comment() {
    let result = tokenize("<<<>>>");
    assert_eq!(kinds(&result), [TokenKind::CommentMulti]);
}

#[test]
fn test_edge_four_angles_open_single_line_comment() {
    let result = tokenize("<<<< x");
    assert_eq!(kinds(&result), [TokenKind::CommentSingle]);
    assert_eq!(result.tokens[0].lexeme, "<<<< x");
}

#[test]
fn test_edge_stray_closer_is_operators() {
    let result = tokenize(">>>");
    assert_eq!(lexemes(&result), [">>", ">"]);
    assert!(result.errors.is_empty());
}

#[test]
fn test_edge_lone_minus_at_end() {
    let result = tokenize("x -");
    assert_eq!(result.tokens[1].kind, TokenKind::Operator);
}

#[test]
fn test_edge_minus_dot_without_digit() {
    let result = tokenize("-.");
    assert!(result.tokens.is_empty());
    assert_eq!(result.errors[0].code, LexErrorCode::MalformedNumber);
    assert_eq!(result.errors[0].lexeme, "-.");
}

#[test]
fn test_edge_lone_dot_at_end() {
    let result = tokenize(".");
    assert_eq!(kinds(&result), [TokenKind::Double]);
    assert!(result.errors.is_empty());
}

#[test]
fn test_edge_double_dot() {
    let result = tokenize("..");
    assert!(result.tokens.is_empty());
    assert_eq!(result.errors[0].lexeme, "..");
}

#[test]
fn test_edge_crlf_lines() {
    let result = tokenize("aye\r\nnay\r\n");
    let positions: Vec<_> = result
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Keyword)
        .map(|t| (t.line(), t.column()))
        .collect();
    assert_eq!(positions, [(1, 1), (2, 1)]);
}

#[test]
fn test_edge_tab_counts_as_one_column() {
    let result = tokenize("\tgold");
    assert_eq!(result.tokens[0].column(), 2);
}

#[test]
fn test_edge_unicode_in_string_columns() {
    let result = tokenize("\"ñandú\" x");
    assert_eq!(result.tokens[1].column(), 9);
    assert_eq!(result.tokens[1].span.start, 10);
}

#[test]
fn test_edge_multiple_errors_one_line() {
    let result = tokenize("@ 5a \"x");
    let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(
        codes,
        [
            LexErrorCode::UnrecognizedToken,
            LexErrorCode::IllegalIdentifier,
            LexErrorCode::UnterminatedString,
        ]
    );
    assert_eq!(result.error_lines(), [1]);
}

#[test]
fn test_edge_form_feed_is_unrecognized() {
    let result = tokenize("\u{0C}");
    assert_eq!(result.errors[0].code, LexErrorCode::UnrecognizedToken);
}

#[test]
fn test_edge_nul_character() {
    let result = tokenize("a\0b");
    assert_eq!(lexemes(&result), ["a", "b"]);
    assert_eq!(result.errors[0].lexeme, "\0");
}

#[test]
fn test_edge_string_with_nul_character() {
    let result = tokenize("\"a\0b\"");
    assert_eq!(kinds(&result), [TokenKind::String]);
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_never_panics() {
    proptest!(|(input in any::<String>())| {
        let _ = tokenize(&input);
    });
}

#[test]
fn test_property_deterministic() {
    proptest!(|(input in "[ -~\t\n]{0,200}")| {
        assert_eq!(tokenize(&input), tokenize(&input));
    });
}

#[test]
fn test_property_every_character_accounted_for() {
    proptest!(|(input in "[ -~\t\r\nλé]{0,200}")| {
        let result = tokenize(&input);
        let mut covered = vec![false; input.len()];
        let spans = result
            .tokens
            .iter()
            .map(|t| t.span)
            .chain(result.errors.iter().map(|e| e.span));
        for span in spans {
            for slot in &mut covered[span.start..span.end] {
                *slot = true;
            }
        }
        for (index, byte) in input.bytes().enumerate() {
            if !covered[index] {
                assert!(matches!(byte, b' ' | b'\t' | b'\r'), "{:?} at {}", input, index);
            }
        }
    });
}

#[test]
fn test_property_lexemes_are_source_slices() {
    proptest!(|(input in "[ -~\t\n]{0,200}")| {
        let result = tokenize(&input);
        for token in &result.tokens {
            assert_eq!(&input[token.span.start..token.span.end], token.lexeme);
        }
        for error in &result.errors {
            assert_eq!(&input[error.span.start..error.span.end], error.lexeme);
        }
        for pair in result.tokens.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    });
}

#[test]
fn test_property_error_lines_sorted_unique() {
    proptest!(|(input in "[ -~\n]{0,200}")| {
        let lines = tokenize(&input).error_lines();
        for pair in lines.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    });
}

#[test]
fn test_property_identifiers() {
    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}")| {
        let result = tokenize(&input);
        assert_eq!(result.tokens.len(), 1);
        assert!(matches!(result.tokens[0].kind, TokenKind::Identifier | TokenKind::Keyword));
    });
}

#[test]
fn test_property_integers() {
    proptest!(|(input in "-?[0-9]{1,20}")| {
        let result = tokenize(&input);
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind, TokenKind::Integer);
    });
}

#[test]
fn test_property_doubles() {
    proptest!(|(input in "[0-9]{1,8}\\.[0-9]{1,8}([eE][+-]?[0-9]{1,3})?")| {
        let result = tokenize(&input);
        assert!(result.errors.is_empty());
        assert_eq!(result.tokens[0].kind, TokenKind::Double);
        assert_eq!(result.tokens[0].lexeme, input);
    });
}

#[test]
fn test_property_string_literals() {
    proptest!(|(input in "[^\"\\\\\\n]{0,100}")| {
        let source = format!("\"{}\"", input);
        let result = tokenize(&source);
        assert!(result.errors.is_empty());
        assert_eq!(result.tokens.len(), 1);
        assert_eq!(result.tokens[0].kind, TokenKind::String);
    });
}
