//! Operator and punctuation tables, and the operator adjacency rules.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Two-character operators. Matched before the one-character set.
pub const TWO_CHAR_OPERATORS: [&str; 11] =
    ["+=", "-=", "*=", "/=", "==", "!=", "<=", ">=", "//", "<<", ">>"];

/// One-character operators.
pub const ONE_CHAR_OPERATORS: [char; 13] =
    ['+', '-', '*', '/', '%', '=', ':', '<', '>', '&', '|', '^', '~'];

/// Punctuation characters.
pub const PUNCTUATION: [char; 8] = ['(', ')', '[', ']', '{', '}', ',', '.'];

/// Operators forbidden after an assignment (`=` and the compound forms).
const AFTER_ASSIGNMENT: &[&str] = &[
    "+=", "-=", "*=", "/=", "==", "!=", "<=", ">=", "=", ":", "%", "/", "*",
];

/// Operators forbidden after a comparison.
const AFTER_COMPARISON: &[&str] = &[
    "+=", "-=", "*=", "/=", "==", "!=", "<=", ">=", "=", ":", "<", ">",
];

/// Operators forbidden after `+ * / %`.
const AFTER_ARITHMETIC: &[&str] = &["+=", "-=", "*=", "/=", "==", "!=", "<=", ">=", "=", ":"];

/// Operators forbidden after `:`.
const AFTER_COLON: &[&str] = &[
    "+=", "-=", "*=", "/=", "==", "!=", "<=", ">=", "=", ":", "+", "*", "/", "%", "<", ">",
];

static INVALID_SEQUENCES: LazyLock<FxHashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut table = FxHashMap::default();
        for op in ["+=", "-=", "*=", "/=", "="] {
            table.insert(op, AFTER_ASSIGNMENT);
        }
        for op in ["==", "!=", "<=", ">=", "<", ">"] {
            table.insert(op, AFTER_COMPARISON);
        }
        for op in ["+", "*", "/", "%"] {
            table.insert(op, AFTER_ARITHMETIC);
        }
        table.insert(":", AFTER_COLON);
        table
    });

/// Returns true if operator `next` may not directly follow operator `prev`.
///
/// Operators without an entry (`-`, `&`, `|`, `^`, `~`, `//`, `<<`, `>>`)
/// forbid nothing after them.
///
/// # Example
///
/// ```
/// use parley_lex::operators::forbids;
///
/// assert!(forbids("==", "!="));
/// assert!(forbids(":", "+"));
/// assert!(!forbids("=", "-"));
/// assert!(!forbids("-", "="));
/// ```
pub fn forbids(prev: &str, next: &str) -> bool {
    INVALID_SEQUENCES
        .get(prev)
        .is_some_and(|forbidden| forbidden.contains(&next))
}

/// Returns the operator starting `text`, preferring two-character forms.
pub(crate) fn match_operator(text: &str) -> Option<&str> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    let second_end = chars.nth(1).map_or(text.len(), |(index, _)| index);

    let two = &text[..second_end];
    if two.len() == 2 && TWO_CHAR_OPERATORS.contains(&two) {
        return Some(two);
    }
    ONE_CHAR_OPERATORS
        .contains(&first)
        .then(|| &text[..first.len_utf8()])
}

/// Returns true if `c` is punctuation.
#[inline]
pub(crate) fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}
