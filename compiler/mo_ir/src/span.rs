//! Source location spans.
//!
//! Compact 8-byte byte-offset spans into the original source.

use std::fmt;

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized tokens in tests.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a zero-width span at a position.
    #[inline]
    pub const fn point(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Create from a byte range.
    ///
    /// # Panics
    /// Panics if the range exceeds `u32::MAX` bytes.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start)
            .unwrap_or_else(|_| panic!("span start {} exceeds u32::MAX", range.start));
        let end = u32::try_from(range.end)
            .unwrap_or_else(|_| panic!("span end {} exceeds u32::MAX", range.end));
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}..{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_range_round_trips() {
        let span = Span::from_range(3..10);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 10);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn point_is_empty() {
        assert!(Span::point(5).is_empty());
        assert!(!Span::new(5, 6).is_empty());
    }

    #[test]
    fn display_shows_range() {
        assert_eq!(Span::new(1, 4).to_string(), "1..4");
    }
}
