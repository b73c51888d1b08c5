//! Half-open spans over a source.
//!
//! A [`SourceRange`] covers `[start, end)` of one [`SourceText`]. Producers
//! (cursors, `SourcePosition::to`) keep `start <= end`; it is not enforced
//! here, but a reversed range cannot be sliced.
//!
//! Ranges render in two forms:
//! - compact, via `Display`: `name:startLine:startCol:endLine:endCol`
//! - excerpt, via [`SourceRange::describe`]: location, source line and a
//!   caret underline (see [`Excerpt`])

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::excerpt::Excerpt;
use crate::location::line_column_pair;
use crate::{LineColumn, SourceChars, SourceError, SourcePosition, SourceText};

/// A half-open span `[start, end)` in a [`SourceText`].
///
/// Equality and hashing use the source's identity and both offsets. An
/// empty range (`start == end`) is valid and marks a zero-width location
/// such as end of input.
#[derive(Copy, Clone)]
pub struct SourceRange<'src> {
    source: &'src SourceText,
    start: usize,
    end: usize,
}

#[cfg(target_pointer_width = "64")]
static_assert_size!(SourceRange<'static>, 24);

impl<'src> SourceRange<'src> {
    /// Callers guarantee both offsets are within `0..=source.len()`.
    pub(crate) fn new(source: &'src SourceText, start: usize, end: usize) -> Self {
        debug_assert!(
            start <= source.len() && end <= source.len(),
            "range {start}..{end} exceeds source length {}",
            source.len()
        );
        SourceRange { source, start, end }
    }

    /// The source this range belongs to.
    #[inline]
    pub fn source(&self) -> &'src SourceText {
        self.source
    }

    #[inline]
    pub fn start(&self) -> SourcePosition<'src> {
        SourcePosition::new(self.source, self.start)
    }

    #[inline]
    pub fn end(&self) -> SourcePosition<'src> {
        SourcePosition::new(self.source, self.end)
    }

    /// Number of characters covered. Zero for empty or reversed ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `position` lies inside the range (start inclusive, end
    /// exclusive). Always `false` for positions from another source.
    pub fn contains(&self, position: SourcePosition<'_>) -> bool {
        position.source().id() == self.source.id()
            && self.start <= position.offset()
            && position.offset() < self.end
    }

    /// The characters covered by the range.
    ///
    /// Fails only for reversed ranges.
    pub fn slice(&self) -> Result<SourceChars<'src>, SourceError> {
        self.source.slice(self.start, self.end)
    }

    /// A range from the start of this range to the end of `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` belongs to a different source. Use
    /// [`try_to`](Self::try_to) for a fallible version.
    #[must_use]
    pub fn to(self, other: SourceRange<'src>) -> SourceRange<'src> {
        self.try_to(other).unwrap_or_else(|e| panic!("{e}"))
    }

    /// A range from the start of this range to the end of `other`, failing
    /// if `other` belongs to a different source.
    pub fn try_to(self, other: SourceRange<'src>) -> Result<SourceRange<'src>, SourceError> {
        self.source.check_owns(other.end())?;
        Ok(SourceRange::new(self.source, self.start, other.end))
    }

    /// 1-based line and column of both endpoints, computed in one scan.
    pub fn line_columns(&self) -> (LineColumn, LineColumn) {
        line_column_pair(self.source.as_char_slice(), self.start, self.end)
    }

    /// Structured diagnostic excerpt for the line containing `start`.
    pub fn excerpt(&self) -> Excerpt<'src> {
        Excerpt::new(self.source, self.start, self.end)
    }

    /// Render a three-line diagnostic: `name:line:column`, the source line
    /// containing `start`, and a caret underline.
    ///
    /// ```
    /// use sourcetext::SourceText;
    ///
    /// let source = SourceText::from_string("<filename>", "abcdef");
    /// let range = source.position(2).unwrap().to(source.position(5).unwrap());
    /// assert_eq!(range.describe(), "<filename>:1:3\nabcdef\n  ^^^");
    /// ```
    pub fn describe(&self) -> String {
        self.excerpt().to_string()
    }
}

impl PartialEq for SourceRange<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.source.id() == other.source.id() && self.start == other.start && self.end == other.end
    }
}

impl Eq for SourceRange<'_> {}

impl Hash for SourceRange<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.id().hash(state);
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Debug for SourceRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.source.name(), self.start, self.end)
    }
}

/// Renders as `name:startLine:startCol:endLine:endCol`.
impl fmt::Display for SourceRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.line_columns();
        write!(f, "{}:{}:{}", self.source.name(), start, end)
    }
}

#[cfg(test)]
mod tests;
