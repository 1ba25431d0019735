//! Byte ranges into the source text.
//!
//! Lox reports errors by line, which tokens carry on their own. Spans are
//! what the diagnostic renderer uses to find the column and underline the
//! offending text.

use std::fmt;
use std::ops::Range;

/// Half-open byte range `start..end`.
///
/// Offsets are `u32`; the lexer gives sources past 4 GiB [`Span::DUMMY`]
/// locations rather than failing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for a location that cannot be expressed.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`; used for "missing X here" errors.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    /// `None` if either end does not fit in `u32`.
    #[inline]
    pub fn try_from_range(range: Range<usize>) -> Option<Self> {
        Some(Span::new(
            u32::try_from(range.start).ok()?,
            u32::try_from(range.end).ok()?,
        ))
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

crate::static_assert_size!(Span, 8);

#[cfg(test)]
mod tests;
