//! Immutable named source buffer.
//!
//! A [`SourceText`] owns the characters of one input and a display name
//! (usually a file path, or `<string>` for inline text). It is the single
//! source of truth for content and length; positions, ranges and cursors
//! borrow it and can never outlive it.
//!
//! # Identity
//!
//! Every buffer gets a process-unique [`SourceId`] at construction.
//! Locations compare by that id, so two buffers with identical names and
//! content are still different sources.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{SourceCursor, SourceError, SourcePosition, SourceRange};

/// Next id handed out by [`SourceId::fresh`].
static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a [`SourceText`] instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

impl SourceId {
    fn fresh() -> Self {
        SourceId(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// Immutable, named sequence of characters.
///
/// Offsets into the buffer count `char`s, not bytes: `"\u{e9}"` has length 1.
/// Grapheme clusters are not segmented, so a combining sequence occupies
/// several offsets.
pub struct SourceText {
    id: SourceId,
    name: String,
    chars: Box<[char]>,
}

impl SourceText {
    /// Create a buffer named `name` holding `text`.
    pub fn from_string(name: impl Into<String>, text: &str) -> Self {
        let name = name.into();
        let chars: Box<[char]> = text.chars().collect();
        let id = SourceId::fresh();
        tracing::debug!(%id, %name, len = chars.len(), "created source text");
        SourceText { id, name, chars }
    }

    /// Identity of this buffer.
    #[inline]
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Display name used as the prefix of rendered locations.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the buffer holds no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The whole content.
    pub fn chars(&self) -> SourceChars<'_> {
        SourceChars(&self.chars)
    }

    /// The character at `offset`, which must be in `0..len()`.
    pub fn char_at(&self, offset: usize) -> Result<char, SourceError> {
        self.chars
            .get(offset)
            .copied()
            .ok_or(SourceError::OffsetOutOfRange {
                offset,
                len: self.len(),
            })
    }

    /// The characters in `start..end`.
    ///
    /// Fails if `start > end` or `end > len()`.
    pub fn slice(&self, start: usize, end: usize) -> Result<SourceChars<'_>, SourceError> {
        self.chars
            .get(start..end)
            .map(SourceChars)
            .ok_or(SourceError::SliceOutOfRange {
                start,
                end,
                len: self.len(),
            })
    }

    /// The position at `offset`, which must be in `0..=len()`.
    pub fn position(&self, offset: usize) -> Result<SourcePosition<'_>, SourceError> {
        if offset > self.len() {
            return Err(SourceError::OffsetOutOfRange {
                offset,
                len: self.len(),
            });
        }
        Ok(SourcePosition::new(self, offset))
    }

    /// The range from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if either position belongs to a different source.
    pub fn range<'src>(
        &'src self,
        start: SourcePosition<'src>,
        end: SourcePosition<'src>,
    ) -> SourceRange<'src> {
        self.try_range(start, end).unwrap_or_else(|e| panic!("{e}"))
    }

    /// The range from `start` to `end`, failing if either position belongs
    /// to a different source.
    pub fn try_range<'src>(
        &'src self,
        start: SourcePosition<'src>,
        end: SourcePosition<'src>,
    ) -> Result<SourceRange<'src>, SourceError> {
        self.check_owns(start)?;
        start.try_to(end)
    }

    /// Create a [`SourceCursor`] positioned at offset 0.
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::new(self)
    }

    /// The raw character storage.
    #[inline]
    pub(crate) fn as_char_slice(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn check_owns(&self, position: SourcePosition<'_>) -> Result<(), SourceError> {
        let other = position.source().id();
        if other == self.id {
            Ok(())
        } else {
            Err(SourceError::SourceMismatch {
                left: self.id,
                right: other,
            })
        }
    }
}

impl fmt::Debug for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceText")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("len", &self.chars.len())
            .finish()
    }
}

/// Borrowed run of characters from a [`SourceText`].
///
/// Compares equal to a `str` with the same characters, and displays as the
/// text itself.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SourceChars<'src>(pub(crate) &'src [char]);

impl<'src> SourceChars<'src> {
    /// The underlying characters.
    #[inline]
    pub fn as_chars(&self) -> &'src [char] {
        self.0
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the characters.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'src, char>> {
        self.0.iter().copied()
    }
}

impl fmt::Display for SourceChars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for &ch in self.0 {
            f.write_char(ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SourceChars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string(), f)
    }
}

impl PartialEq<str> for SourceChars<'_> {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for SourceChars<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}
