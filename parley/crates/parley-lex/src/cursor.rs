//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. Positions are byte
//! offsets; columns count characters.

/// Sentinel returned by lookahead past the end of input.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// `advance` is the only mutator besides [`Cursor::restore`]; every peek is
/// side-effect free and never fails.
///
/// # Example
///
/// ```
/// use parley_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("anchor x");
/// assert_eq!(cursor.peek(0), 'a');
/// assert_eq!(cursor.advance(), 'a');
/// assert_eq!(cursor.peek(0), 'n');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `offset` characters ahead of the current
    /// position, or [`EOF_CHAR`] past the end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek(0), 'a');
    /// assert_eq!(cursor.peek(2), 'c');
    /// assert_eq!(cursor.peek(3), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path: every byte up to `offset` is ASCII
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Returns up to `n` characters from the current position without
    /// consuming them, truncated at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<< x");
    /// assert_eq!(cursor.peek_slice(3), "<<<");
    /// assert_eq!(cursor.peek_slice(50), "<<< x");
    /// ```
    pub fn peek_slice(&self, n: usize) -> &'a str {
        let rest = self.remaining();
        let end = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(index, _)| index);
        &rest[..end]
    }

    /// Returns true if the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes and returns the current character.
    ///
    /// Consuming `\n` moves to the next line and resets the column to 1.
    /// At end of input nothing is consumed and [`EOF_CHAR`] is returned.
    pub fn advance(&mut self) -> char {
        let Some(c) = self.remaining().chars().next() else {
            return EOF_CHAR;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Advances the cursor by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.peek(0)) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("aye nay");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "aye");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use parley_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("-x");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance();
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.peek(0), '-');
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
