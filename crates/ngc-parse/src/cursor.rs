//! Character cursor over a single source line.
//!
//! The cursor tracks a byte position and hands out characters one at a
//! time. G-code is whitespace-tolerant in unusual places (inside numeric
//! literals, for instance), so the only skipping helper it offers is for
//! blanks - spaces and tabs; newlines never reach the cursor because the
//! driver splits its input into lines first.

pub(crate) struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// The full source line.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Rewinds to a position previously obtained from [`position`](Self::position).
    pub fn restore(&mut self, position: usize) {
        self.position = position;
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// The character at the cursor, or `'\0'` at the end of the line.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// The character `offset` bytes ahead of the cursor, or `'\0'` past
    /// the end. Only meaningful when the characters in between are ASCII.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Consumes the expected character if it is next.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces and tabs.
    pub fn skip_blanks(&mut self) {
        while matches!(self.current_char(), ' ' | '\t') {
            self.advance();
        }
    }

    /// The source from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The source from the cursor to the end of the line.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_current() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new("#<x");
        assert_eq!(cursor.peek_char(0), '#');
        assert_eq!(cursor.peek_char(1), '<');
        assert_eq!(cursor.peek_char(2), 'x');
        assert_eq!(cursor.peek_char(3), '\0');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("**");
        assert!(cursor.match_char('*'));
        assert!(!cursor.match_char('/'));
        assert!(cursor.match_char('*'));
        assert!(!cursor.match_char('*'));
    }

    #[test]
    fn test_skip_blanks_stops_at_content() {
        let mut cursor = Cursor::new(" \t 1");
        cursor.skip_blanks();
        assert_eq!(cursor.current_char(), '1');
    }

    #[test]
    fn test_restore() {
        let mut cursor = Cursor::new("N10");
        let mark = cursor.position();
        cursor.advance();
        cursor.advance();
        cursor.restore(mark);
        assert_eq!(cursor.current_char(), 'N');
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("(hello) X1");
        cursor.advance();
        let start = cursor.position();
        for _ in 0.."hello".len() {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "hello");
        assert_eq!(cursor.remaining(), ") X1");
    }

    #[test]
    fn test_non_ascii_comment_text() {
        let mut cursor = Cursor::new("(münze)");
        cursor.advance();
        let start = cursor.position();
        while cursor.current_char() != ')' {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "münze");
    }
}
