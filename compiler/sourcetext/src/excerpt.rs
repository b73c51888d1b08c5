//! Caret-annotated source excerpts.
//!
//! An excerpt is the diagnostic form of a range:
//!
//! ```text
//! <filename>:2:3
//! ghijkl
//!   ^^^
//! ```
//!
//! Only the line containing the range's start is shown. Within that line
//! the carets cover the whole range, with at least one caret so an empty
//! range is still visible. A range that runs past the end of its start line
//! collapses to a single caret on its first character; multi-line
//! highlighting is not attempted and downstream tooling relies on this
//! exact output.

use std::fmt;

use crate::location::line_bounds;
use crate::{LineColumn, SourceChars, SourceText};

/// Rendered-ready description of where a range starts.
///
/// `Display` produces the three-line excerpt text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Excerpt<'src> {
    name: &'src str,
    location: LineColumn,
    line: SourceChars<'src>,
    caret_len: usize,
}

impl<'src> Excerpt<'src> {
    #[tracing::instrument(level = "trace", skip(source), fields(source_id = %source.id()))]
    pub(crate) fn new(source: &'src SourceText, start: usize, end: usize) -> Self {
        let chars = source.as_char_slice();
        let bounds = line_bounds(chars, start);
        let caret_len = if end <= bounds.end {
            end.saturating_sub(start).max(1)
        } else {
            1
        };

        Excerpt {
            name: source.name(),
            location: bounds.location,
            line: SourceChars(&chars[bounds.start..bounds.end]),
            caret_len,
        }
    }

    /// Display name of the source.
    pub fn name(&self) -> &'src str {
        self.name
    }

    /// 1-based location of the range's start.
    pub fn location(&self) -> LineColumn {
        self.location
    }

    /// Text of the line containing the range's start, without its newline.
    pub fn line(&self) -> SourceChars<'src> {
        self.line
    }

    /// Number of `^` characters in the underline. Always at least 1.
    pub fn caret_len(&self) -> usize {
        self.caret_len
    }
}

impl fmt::Display for Excerpt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:{}", self.name, self.location)?;
        writeln!(f, "{}", self.line)?;
        write!(
            f,
            "{}{}",
            " ".repeat(self.location.column - 1),
            "^".repeat(self.caret_len)
        )
    }
}
