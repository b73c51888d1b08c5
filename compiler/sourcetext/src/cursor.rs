//! Forward, seekable cursor over a source.
//!
//! The cursor is the only stateful piece of the crate: it owns an offset
//! into a borrowed [`SourceText`] and moves it as a lexer peeks and skips.
//! Positions and ranges are captured from it along the way.
//!
//! # Reads vs. navigation
//!
//! Data reads are strict: [`SourceCursor::peek_sequence`] fails when asked
//! for more characters than remain. Navigation clamps:
//! [`SourceCursor::skip`] and [`SourceCursor::skip_n`] stop at the end of
//! the source and never fail. [`SourceCursor::peek`] returns `None` at the
//! end instead of a sentinel character.

use crate::{SourceChars, SourceError, SourcePosition, SourceRange, SourceText};

/// Cursor over a [`SourceText`].
///
/// Created via [`SourceText::cursor()`]. The cursor is [`Copy`], so a
/// snapshot for backtracking is a plain copy; [`position`](Self::position)
/// and [`set_position`](Self::set_position) do the same through a
/// [`SourcePosition`].
///
/// # Invariant
///
/// `0 <= offset <= source.len()` at all times.
#[derive(Copy, Clone, Debug)]
pub struct SourceCursor<'src> {
    source: &'src SourceText,
    offset: usize,
}

impl<'src> SourceCursor<'src> {
    pub(crate) fn new(source: &'src SourceText) -> Self {
        SourceCursor { source, offset: 0 }
    }

    /// The source being scanned.
    #[inline]
    pub fn source(&self) -> &'src SourceText {
        self.source
    }

    /// Current character offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once every character has been skipped.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.offset == self.source.len()
    }

    /// Number of characters left to scan.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len() - self.offset
    }

    /// The character at the cursor, or `None` at the end.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.source.as_char_slice().get(self.offset).copied()
    }

    /// The next `len` characters, without advancing.
    ///
    /// Fails if fewer than `len` characters remain.
    pub fn peek_sequence(&self, len: usize) -> Result<SourceChars<'src>, SourceError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(SourceError::PeekPastEnd {
                requested: len,
                remaining,
            });
        }
        self.source.slice(self.offset, self.offset + len)
    }

    /// Advance by one character. Does nothing at the end.
    #[inline]
    pub fn skip(&mut self) {
        if self.offset < self.source.len() {
            self.offset += 1;
        }
    }

    /// Advance by `n` characters, stopping at the end.
    #[inline]
    pub fn skip_n(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.source.len());
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Returns the range of skipped characters (empty if none matched).
    pub fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> SourceRange<'src> {
        let start = self.offset;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.offset += 1;
        }
        SourceRange::new(self.source, start, self.offset)
    }

    /// Snapshot of the current offset.
    #[inline]
    pub fn position(&self) -> SourcePosition<'src> {
        SourcePosition::new(self.source, self.offset)
    }

    /// Move the cursor to `position`, forwards or backwards.
    ///
    /// # Panics
    ///
    /// Panics if `position` belongs to a different source.
    pub fn set_position(&mut self, position: SourcePosition<'src>) {
        if let Err(e) = self.source.check_owns(position) {
            panic!("{e}");
        }
        tracing::trace!(from = self.offset, to = position.offset(), "cursor seek");
        self.offset = position.offset();
    }

    /// Range covering the single character at the cursor.
    ///
    /// At the end, returns an empty range at the end position instead.
    pub fn char_range(&self) -> SourceRange<'src> {
        let end = if self.is_end() {
            self.offset
        } else {
            self.offset + 1
        };
        SourceRange::new(self.source, self.offset, end)
    }

    /// Range from `start` to the current position.
    ///
    /// # Panics
    ///
    /// Panics if `start` belongs to a different source.
    pub fn range_from(&self, start: SourcePosition<'src>) -> SourceRange<'src> {
        self.source.range(start, self.position())
    }

    /// Range from `start` to `end`, delegating to [`SourceText::range`].
    ///
    /// # Panics
    ///
    /// Panics if either position belongs to a different source.
    pub fn source_range(
        &self,
        start: SourcePosition<'src>,
        end: SourcePosition<'src>,
    ) -> SourceRange<'src> {
        self.source.range(start, end)
    }
}
