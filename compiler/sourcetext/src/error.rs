//! Errors raised by out-of-range reads and cross-source misuse.
//!
//! Every variant describes a programming error in the caller (a malformed
//! offset, an over-long peek, or mixing two sources). They are reported at
//! the call that caused them and never clamped. Navigation primitives
//! ([`SourceCursor::skip`](crate::SourceCursor::skip) and friends) clamp
//! instead and have no error cases.

use crate::SourceId;

/// Error returned by fallible [`SourceText`](crate::SourceText),
/// [`SourceRange`](crate::SourceRange) and
/// [`SourceCursor`](crate::SourceCursor) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// A single offset fell outside the valid range for the operation.
    #[error("offset {offset} is out of range for source of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A slice had `start > end` or a bound past the end of the source.
    #[error("slice {start}..{end} is out of range for source of length {len}")]
    SliceOutOfRange { start: usize, end: usize, len: usize },

    /// A cursor was asked to peek further than the remaining input.
    #[error("cannot peek {requested} characters, only {remaining} remaining")]
    PeekPastEnd { requested: usize, remaining: usize },

    /// Two positions or ranges from different sources were combined.
    #[error("cannot combine locations from different sources ({left} and {right})")]
    SourceMismatch { left: SourceId, right: SourceId },
}
