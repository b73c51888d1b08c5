//! Line and column computation by linear scan.
//!
//! Every lookup scans from the start of the source, counting `\n`
//! characters. This is O(n) per call, which is fine for diagnostics: they
//! are rendered rarely and never on the scanning hot path.
//!
//! Offsets past the end of the content are capped at the end, so the
//! end-of-text position resolves to one column past the last character of
//! the final line.

use std::fmt;

/// A 1-based line and column pair.
///
/// Columns count characters from the start of the line, so the first
/// character of every line is at column 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl LineColumn {
    /// The location of the first character of a source.
    pub const START: LineColumn = LineColumn { line: 1, column: 1 };
}

impl Default for LineColumn {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Running line/column state while walking characters from the start.
#[derive(Copy, Clone, Debug, Default)]
struct LineTracker {
    location: LineColumn,
    /// Offset of the first character of the current line.
    line_start: usize,
}

impl LineTracker {
    /// Account for `ch` at `offset` and move past it.
    #[inline]
    fn advance(&mut self, offset: usize, ch: char) {
        if ch == '\n' {
            self.location.line += 1;
            self.location.column = 1;
            self.line_start = offset + 1;
        } else {
            self.location.column += 1;
        }
    }
}

/// Compute the 1-based line and column of `offset`.
pub(crate) fn line_column(chars: &[char], offset: usize) -> LineColumn {
    let limit = offset.min(chars.len());
    let mut tracker = LineTracker::default();
    for (i, &ch) in chars[..limit].iter().enumerate() {
        tracker.advance(i, ch);
    }
    tracker.location
}

/// Compute the line and column of both `start` and `end` in a single pass.
///
/// The scan stops at whichever offset is further along, so the cost is
/// that of one lookup rather than two.
pub(crate) fn line_column_pair(
    chars: &[char],
    start: usize,
    end: usize,
) -> (LineColumn, LineColumn) {
    let limit = start.max(end).min(chars.len());
    let mut tracker = LineTracker::default();
    let mut start_location = None;
    let mut end_location = None;

    for (i, &ch) in chars[..limit].iter().enumerate() {
        if i == start {
            start_location = Some(tracker.location);
        }
        if i == end {
            end_location = Some(tracker.location);
        }
        tracker.advance(i, ch);
    }

    // Offsets at or past `limit` were never visited inside the loop.
    (
        start_location.unwrap_or(tracker.location),
        end_location.unwrap_or(tracker.location),
    )
}

/// The line containing a given offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct LineBounds {
    /// Location of the offset the line was looked up for.
    pub location: LineColumn,
    /// Offset of the first character of the line.
    pub start: usize,
    /// Offset of the terminating `\n`, or the source length for the last line.
    pub end: usize,
}

/// Find the line containing `offset`.
///
/// A line runs from the character after the preceding `\n` (or the start of
/// the source) up to, but excluding, the next `\n` (or the end of the
/// source). An offset sitting on a `\n` belongs to the line that newline
/// terminates.
pub(crate) fn line_bounds(chars: &[char], offset: usize) -> LineBounds {
    let limit = offset.min(chars.len());
    let mut tracker = LineTracker::default();
    for (i, &ch) in chars[..limit].iter().enumerate() {
        tracker.advance(i, ch);
    }

    let end = chars[limit..]
        .iter()
        .position(|&ch| ch == '\n')
        .map_or(chars.len(), |newline| limit + newline);

    LineBounds {
        location: tracker.location,
        start: tracker.line_start,
        end,
    }
}
