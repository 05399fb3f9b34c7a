//! Reserved words.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Every reserved word, in declaration order.
pub const KEYWORDS: [&str; 44] = [
    "anchor", "ask", "parrot", "truthy", "aye", "nay", "adrift", "pirate", "doubloon", "gold",
    "scroll", "ifwind", "elseye", "otherwise", "fer", "storm", "cut", "onward", "sailby", "ashore",
    "cease", "venture", "reel", "lastport", "alarm", "ayecheck", "sevenseas", "horizon", "be",
    "aboard", "withcrew", "eitherway", "naycrew", "naybe", "nayaboard", "rank", "map", "sink",
    "alias", "hauled", "shipin", "accord", "voyage", "holdfast",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Returns true if `word` is a reserved word. Matching is exact and
/// case-sensitive.
///
/// # Example
///
/// ```
/// use parley_lex::keywords::is_keyword;
///
/// assert!(is_keyword("anchor"));
/// assert!(!is_keyword("Anchor"));
/// assert!(!is_keyword("ankeeper"));
/// ```
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}
