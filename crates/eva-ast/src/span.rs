// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Source location tracking.

use std::fmt;

/// A 1-based line/column coordinate into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// The source range covered by an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True if `other` lies entirely inside this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Precomputed line-start offsets for O(log n) byte-offset → line:col lookup.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the start of each line. line_starts[0] is always 0.
    line_starts: Vec<usize>,
    len: usize,
}

impl LineMap {
    /// Build a line map by scanning source for newlines. O(n).
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        LineMap { line_starts, len: source.len() }
    }

    /// Convert a byte offset to a 1-based position.
    ///
    /// Offsets past the end of the source resolve to the end of the last line.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        Position::new(line_idx + 1, offset - self.line_starts[line_idx] + 1)
    }

    /// Get the source text of a 1-based line number, without its line ending.
    pub fn line_text<'a>(&self, source: &'a str, line: usize) -> Option<&'a str> {
        let idx = line.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|&s| s.saturating_sub(1)) // exclude the \n
            .unwrap_or(source.len());
        source
            .get(start..end)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_line_text_drops_carriage_return() {
        let src = "var x\r\nvar 1\r\n";
        let map = LineMap::new(src);
        assert_eq!(map.line_text(src, 1), Some("var x"));
        assert_eq!(map.line_text(src, 2), Some("var 1"));
        assert_eq!(map.position(9), Position::new(2, 3));
    }

    #[test]
    fn empty_source() {
        let lm = LineMap::new("");
        assert_eq!(lm.position(0), Position::new(1, 1));
        assert_eq!(lm.line_count(), 1);
        assert_eq!(lm.line_text("", 1), Some(""));
    }

    #[test]
    fn multi_line() {
        let src = "var x\nx = 1\nreturn x";
        let lm = LineMap::new(src);
        assert_eq!(lm.line_count(), 3);
        assert_eq!(lm.position(0), Position::new(1, 1)); // 'v'
        assert_eq!(lm.position(4), Position::new(1, 5)); // 'x'
        assert_eq!(lm.position(6), Position::new(2, 1)); // 'x'
        assert_eq!(lm.position(12), Position::new(3, 1)); // 'r'

        assert_eq!(lm.line_text(src, 1), Some("var x"));
        assert_eq!(lm.line_text(src, 2), Some("x = 1"));
        assert_eq!(lm.line_text(src, 3), Some("return x"));
        assert_eq!(lm.line_text(src, 4), None);
        assert_eq!(lm.line_text(src, 0), None);
    }

    #[test]
    fn offset_at_newline_belongs_to_its_line() {
        let src = "ab\ncd\n";
        let lm = LineMap::new(src);
        assert_eq!(lm.position(2), Position::new(1, 3));
        assert_eq!(lm.position(3), Position::new(2, 1));
        assert_eq!(lm.position(5), Position::new(2, 3));
        // After the trailing newline: start of the empty last line
        assert_eq!(lm.position(6), Position::new(3, 1));
        assert_eq!(lm.line_text(src, 3), Some(""));
    }

    #[test]
    fn offsets_past_end_clamp() {
        let lm = LineMap::new("abc");
        assert_eq!(lm.position(99), Position::new(1, 4));
    }

    #[test]
    fn positions_order_lexicographically() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 2));
    }

    #[test]
    fn span_containment() {
        let outer = Span::new(Position::new(1, 1), Position::new(3, 4));
        let inner = Span::new(Position::new(2, 5), Position::new(3, 1));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
    }
}
