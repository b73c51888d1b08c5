//! Zero-width locations in a source.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::location::line_column;
use crate::{LineColumn, SourceError, SourceRange, SourceText};

/// A location in a [`SourceText`].
///
/// Rather than referring to a specific character, a position sits between
/// characters, or at the start or end of the source. Valid offsets are
/// `0..=len`.
///
/// Two positions are equal when they share a source (by identity) and an
/// offset. Positions from different sources are never equal and are
/// unordered.
#[derive(Copy, Clone)]
pub struct SourcePosition<'src> {
    source: &'src SourceText,
    offset: usize,
}

#[cfg(target_pointer_width = "64")]
static_assert_size!(SourcePosition<'static>, 16);

impl<'src> SourcePosition<'src> {
    /// Callers guarantee `offset <= source.len()`.
    pub(crate) fn new(source: &'src SourceText, offset: usize) -> Self {
        debug_assert!(
            offset <= source.len(),
            "position offset {offset} exceeds source length {}",
            source.len()
        );
        SourcePosition { source, offset }
    }

    /// Character offset from the start of the source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The source this position belongs to.
    #[inline]
    pub fn source(&self) -> &'src SourceText {
        self.source
    }

    /// 1-based line and column, found by scanning from the start of the source.
    pub fn line_column(&self) -> LineColumn {
        line_column(self.source.as_char_slice(), self.offset)
    }

    /// The range from this position to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to a different source. Use
    /// [`try_to`](Self::try_to) for a fallible version.
    #[must_use]
    pub fn to(self, end: SourcePosition<'src>) -> SourceRange<'src> {
        self.try_to(end).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The range from this position to `end`, failing if `end` belongs to a
    /// different source.
    pub fn try_to(self, end: SourcePosition<'src>) -> Result<SourceRange<'src>, SourceError> {
        self.source.check_owns(end)?;
        Ok(SourceRange::new(self.source, self.offset, end.offset))
    }
}

impl PartialEq for SourcePosition<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.source.id() == other.source.id() && self.offset == other.offset
    }
}

impl Eq for SourcePosition<'_> {}

impl Hash for SourcePosition<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.id().hash(state);
        self.offset.hash(state);
    }
}

impl PartialOrd for SourcePosition<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.source.id() == other.source.id()).then(|| self.offset.cmp(&other.offset))
    }
}

impl fmt::Debug for SourcePosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.source.name(), self.offset)
    }
}

/// Renders as `name:line:column`.
impl fmt::Display for SourcePosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source.name(), self.line_column())
    }
}
