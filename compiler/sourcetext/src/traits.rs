//! Shared interface for things that carry a source location.

use crate::SourceRange;

/// Trait for tokens, syntax nodes and errors that know where they came from.
pub trait Located<'src> {
    /// The range of source this item was produced from.
    fn source_range(&self) -> SourceRange<'src>;

    /// Three-line caret excerpt for this item's range.
    fn describe(&self) -> String {
        self.source_range().describe()
    }
}

impl<'src> Located<'src> for SourceRange<'src> {
    fn source_range(&self) -> SourceRange<'src> {
        *self
    }
}
