//! Source text positioning for lexers and parsers.
//!
//! This crate tracks *where* in an input a token, error, or syntax node came
//! from, and renders human-readable diagnostics from that information:
//! - [`SourceText`]: an immutable, named buffer of characters
//! - [`SourcePosition`]: a zero-width location between two characters
//! - [`SourceRange`]: a half-open span between two positions
//! - [`SourceCursor`]: a forward (and seekable) scanner producing positions
//!
//! # Usage
//!
//! ```
//! use sourcetext::SourceText;
//!
//! let source = SourceText::from_string("<string>", "let x = 1;\nlet = 2;");
//! let mut cursor = source.cursor();
//! cursor.skip_n(15);
//! let start = cursor.position();
//! cursor.skip();
//! let range = cursor.range_from(start);
//!
//! assert_eq!(range.to_string(), "<string>:2:5:2:6");
//! assert_eq!(range.describe(), "<string>:2:5\nlet = 2;\n    ^");
//! ```
//!
//! # Identity
//!
//! Positions and ranges are bound to the [`SourceText`] they were created
//! from. Equality and hashing use the buffer's [`SourceId`], never its
//! content: two buffers holding the same text are still distinct sources.
//!
//! # Offsets
//!
//! Offsets count characters (Unicode scalar values), not bytes.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep the value types small enough to pass around by copy.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod cursor;
mod error;
mod excerpt;
mod location;
mod position;
mod range;
mod source_text;
mod traits;
mod tracing_setup;

pub use cursor::SourceCursor;
pub use error::SourceError;
pub use excerpt::Excerpt;
pub use location::LineColumn;
pub use position::SourcePosition;
pub use range::SourceRange;
pub use source_text::{SourceChars, SourceId, SourceText};
pub use traits::Located;
pub use tracing_setup::init_tracing;
