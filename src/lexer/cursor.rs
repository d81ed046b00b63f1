//! Byte cursor over the source text
//!
//! The cursor only moves forward. Anything that needs to look past the current line (paragraph
//! continuation, table rows) does so through the non-mutating `following_line` lookahead, so
//! there is never a position to restore.

/// Width of a tab when measuring indentation
pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The unread remainder of the current line, without its newline
    pub fn current_line(&self) -> &'a str {
        &self.source[self.pos..self.line_end(self.pos)]
    }

    /// Consume the rest of the current line and return it. The newline is left in place.
    pub fn read_line(&mut self) -> &'a str {
        let line = self.current_line();
        self.pos += line.len();
        line
    }

    /// Step over a single newline, if the cursor sits on one
    pub fn skip_newline(&mut self) -> bool {
        if self.source.as_bytes().get(self.pos) == Some(&b'\n') {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance by `len` bytes, clamped to the end of input
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.source.len());
    }

    /// Skip every blank line ahead of the cursor. Lines holding only spaces, tabs or a carriage
    /// return count as blank.
    pub fn skip_blank_lines(&mut self) {
        while !self.is_eof() {
            if !is_blank(self.current_line()) {
                break;
            }
            self.read_line();
            if !self.skip_newline() {
                break;
            }
        }
    }

    /// Measure the indentation at the cursor without consuming it.
    ///
    /// Returns the column width (tabs count as [`TAB_WIDTH`]) and the number of bytes the
    /// indentation occupies.
    pub fn measure_indent(&self) -> (usize, usize) {
        let mut width = 0;
        let mut bytes = 0;
        for byte in self.source.as_bytes()[self.pos..].iter() {
            match byte {
                b' ' => width += 1,
                b'\t' => width += TAB_WIDTH,
                _ => break,
            }
            bytes += 1;
        }
        (width, bytes)
    }

    /// Look at the line after the current one without moving.
    ///
    /// Only meaningful once the current line has been read: the cursor must sit on the newline
    /// that ends it. Returns `None` at end of input.
    pub fn following_line(&self) -> Option<&'a str> {
        if self.source.as_bytes().get(self.pos) != Some(&b'\n') {
            return None;
        }
        let start = self.pos + 1;
        Some(&self.source[start..self.line_end(start)])
    }

    fn line_end(&self, from: usize) -> usize {
        self.source[from..]
            .find('\n')
            .map(|offset| from + offset)
            .unwrap_or(self.source.len())
    }
}

/// True for lines with no visible content
pub fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_stops_at_newline() {
        let mut cursor = Cursor::new("first\nsecond");
        assert_eq!(cursor.read_line(), "first");
        assert_eq!(cursor.position(), 5);
        assert!(cursor.skip_newline());
        assert_eq!(cursor.read_line(), "second");
        assert!(cursor.is_eof());
        assert!(!cursor.skip_newline());
    }

    #[test]
    fn test_measure_indent_does_not_consume() {
        let cursor = Cursor::new("  \t- item");
        assert_eq!(cursor.measure_indent(), (2 + TAB_WIDTH, 3));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_blank_lines() {
        let mut cursor = Cursor::new("\n\n   \n\t\ntext");
        cursor.skip_blank_lines();
        assert_eq!(cursor.current_line(), "text");
    }

    #[test]
    fn test_skip_blank_lines_to_eof() {
        let mut cursor = Cursor::new("\n  \n   ");
        cursor.skip_blank_lines();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_following_line_is_lookahead_only() {
        let mut cursor = Cursor::new("one\ntwo\nthree");
        cursor.read_line();
        assert_eq!(cursor.following_line(), Some("two"));
        assert_eq!(cursor.position(), 3);

        cursor.skip_newline();
        // Mid-line there is no "following" line yet
        assert_eq!(cursor.following_line(), None);
        cursor.read_line();
        assert_eq!(cursor.following_line(), Some("three"));
    }

    #[test]
    fn test_following_line_at_eof() {
        let mut cursor = Cursor::new("only");
        cursor.read_line();
        assert_eq!(cursor.following_line(), None);
    }

    #[test]
    fn test_following_line_after_trailing_newline() {
        let mut cursor = Cursor::new("only\n");
        cursor.read_line();
        assert_eq!(cursor.following_line(), Some(""));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r"));
        assert!(!is_blank("  x"));
    }
}
