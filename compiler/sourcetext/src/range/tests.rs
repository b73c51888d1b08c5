use std::collections::HashSet;

use super::*;
use pretty_assertions::assert_eq;

fn range(source: &SourceText, start: usize, end: usize) -> SourceRange<'_> {
    match (source.position(start), source.position(end)) {
        (Ok(start), Ok(end)) => start.to(end),
        _ => panic!("{start}..{end} is out of range"),
    }
}

// === Describe ===

/// (name, contents, offset, expected excerpt) for zero-width ranges.
const POINT_CASES: &[(&str, &str, usize, &str)] = &[
    (
        "one line, first character",
        "abcd",
        0,
        "<filename>:1:1\nabcd\n^",
    ),
    (
        "one line, last character",
        "abcd",
        3,
        "<filename>:1:4\nabcd\n   ^",
    ),
    ("one line, end", "abcd", 4, "<filename>:1:5\nabcd\n    ^"),
    ("many lines, end", "abc\ndef", 7, "<filename>:2:4\ndef\n   ^"),
    (
        "first line, first character",
        "abc\ndef",
        0,
        "<filename>:1:1\nabc\n^",
    ),
    (
        "first line, last character",
        "abc\ndef",
        2,
        "<filename>:1:3\nabc\n  ^",
    ),
    (
        "last line, first character",
        "abc\ndef",
        4,
        "<filename>:2:1\ndef\n^",
    ),
    ("new line", "abc\ndef", 3, "<filename>:1:4\nabc\n   ^"),
    ("empty source", "", 0, "<filename>:1:1\n\n^"),
    ("after trailing newline", "abc\n", 4, "<filename>:2:1\n\n^"),
];

#[test]
fn describe_points_at_zero_width_ranges() {
    for &(name, contents, offset, expected) in POINT_CASES {
        let source = SourceText::from_string("<filename>", contents);
        assert_eq!(range(&source, offset, offset).describe(), expected, "{name}");
    }
}

const LINES: &str = "abcdef\nghijkl\nmnopqr";

#[test]
fn describe_single_character_points_at_character() {
    let source = SourceText::from_string("<filename>", LINES);
    assert_eq!(
        range(&source, 9, 10).describe(),
        "<filename>:2:3\nghijkl\n  ^"
    );
}

#[test]
fn describe_multiple_characters_on_same_line_underlines_all() {
    let source = SourceText::from_string("<filename>", LINES);
    assert_eq!(
        range(&source, 9, 12).describe(),
        "<filename>:2:3\nghijkl\n  ^^^"
    );
}

#[test]
fn describe_range_ending_at_line_end_underlines_to_line_end() {
    let source = SourceText::from_string("<filename>", LINES);
    assert_eq!(
        range(&source, 9, 13).describe(),
        "<filename>:2:3\nghijkl\n  ^^^^"
    );
}

#[test]
fn describe_multiple_lines_points_at_first_character() {
    let source = SourceText::from_string("<filename>", LINES);
    assert_eq!(
        range(&source, 9, 14).describe(),
        "<filename>:2:3\nghijkl\n  ^"
    );
    assert_eq!(
        range(&source, 0, 20).describe(),
        "<filename>:1:1\nabcdef\n^"
    );
}

#[test]
fn describe_reversed_range_shows_single_caret() {
    let source = SourceText::from_string("<filename>", LINES);
    let reversed = SourceRange::new(&source, 11, 9);
    assert_eq!(reversed.describe(), "<filename>:2:5\nghijkl\n    ^");
}

#[test]
fn describe_counts_characters_not_bytes() {
    let source = SourceText::from_string("<filename>", "\u{e9}t\u{e9} = x");
    assert_eq!(
        range(&source, 6, 7).describe(),
        "<filename>:1:7\n\u{e9}t\u{e9} = x\n      ^"
    );
}

// === Display ===

#[test]
fn to_string_includes_name_and_start_and_end() {
    let source = SourceText::from_string("<string>", "abc");
    assert_eq!(range(&source, 1, 3).to_string(), "<string>:1:2:1:4");
}

#[test]
fn to_string_spans_lines() {
    let source = SourceText::from_string("<string>", LINES);
    assert_eq!(range(&source, 4, 16).to_string(), "<string>:1:5:3:3");
    assert_eq!(range(&source, 20, 20).to_string(), "<string>:3:7:3:7");
}

#[test]
fn debug_shows_offsets() {
    let source = SourceText::from_string("<string>", "abc");
    assert_eq!(format!("{:?}", range(&source, 1, 3)), "<string>@1..3");
}

// === Equality ===

#[test]
fn ranges_with_same_start_and_end_are_equal() {
    let source = SourceText::from_string("<string>", "abc");
    let set: HashSet<_> = [range(&source, 1, 3), range(&source, 1, 3)]
        .into_iter()
        .collect();
    assert_eq!(range(&source, 1, 3), range(&source, 1, 3));
    assert_eq!(set.len(), 1);
}

#[test]
fn ranges_with_different_start_are_not_equal() {
    let source = SourceText::from_string("<string>", "abc");
    assert_ne!(range(&source, 1, 3), range(&source, 2, 3));
}

#[test]
fn ranges_with_different_end_are_not_equal() {
    let source = SourceText::from_string("<string>", "abc");
    assert_ne!(range(&source, 1, 2), range(&source, 1, 3));
}

#[test]
fn ranges_from_different_sources_are_not_equal() {
    let first = SourceText::from_string("<string>", "abc");
    let second = SourceText::from_string("<string>", "abc");
    assert_ne!(range(&first, 1, 3), range(&second, 1, 3));
}

// === Slice and Combination ===

#[test]
fn slice_returns_covered_characters() {
    let source = SourceText::from_string("<string>", "hello world");
    let Ok(chars) = range(&source, 6, 11).slice() else {
        panic!("range is in order");
    };
    assert_eq!(chars, "world");
    assert!(matches!(range(&source, 3, 3).slice(), Ok(empty) if empty.is_empty()));
}

#[test]
fn slice_of_reversed_range_fails() {
    let source = SourceText::from_string("<string>", "abc");
    assert!(matches!(
        SourceRange::new(&source, 2, 1).slice(),
        Err(SourceError::SliceOutOfRange { start: 2, end: 1, .. })
    ));
}

#[test]
fn to_spans_from_this_start_to_other_end() {
    let source = SourceText::from_string("<string>", "let x = 1;");
    let combined = range(&source, 0, 3).to(range(&source, 8, 9));
    assert_eq!(combined, range(&source, 0, 9));
    assert_eq!(combined.len(), 9);
}

#[test]
fn try_to_rejects_other_source() {
    let first = SourceText::from_string("<string>", "abc");
    let second = SourceText::from_string("<string>", "abc");
    assert!(matches!(
        range(&first, 0, 1).try_to(range(&second, 1, 2)),
        Err(SourceError::SourceMismatch { .. })
    ));
}

#[test]
#[should_panic(expected = "different sources")]
fn to_panics_on_range_from_other_source() {
    let first = SourceText::from_string("<string>", "abc");
    let second = SourceText::from_string("<string>", "abc");
    let _ = range(&first, 0, 1).to(range(&second, 1, 2));
}

#[test]
fn contains_is_half_open() {
    let source = SourceText::from_string("<string>", "abcdef");
    let other = SourceText::from_string("<string>", "abcdef");
    let span = range(&source, 2, 4);
    let at = |offset| match source.position(offset) {
        Ok(position) => position,
        Err(e) => panic!("{e}"),
    };

    assert!(!span.contains(at(1)));
    assert!(span.contains(at(2)));
    assert!(span.contains(at(3)));
    assert!(!span.contains(at(4)));
    assert!(matches!(other.position(3), Ok(p) if !span.contains(p)));
}

#[test]
fn empty_range_has_zero_len() {
    let source = SourceText::from_string("<string>", "abc");
    assert!(range(&source, 2, 2).is_empty());
    assert!(SourceRange::new(&source, 3, 1).is_empty());
    assert_eq!(range(&source, 0, 3).len(), 3);
}

#[test]
fn line_columns_of_both_endpoints() {
    let source = SourceText::from_string("<string>", LINES);
    assert_eq!(
        range(&source, 9, 15).line_columns(),
        (
            LineColumn { line: 2, column: 3 },
            LineColumn { line: 3, column: 2 }
        )
    );
}
