//! Classification of unified diff lines by their leading bytes.
//!
//! Every line is classified on its own: the result depends only on the
//! line's prefix, never on the lines before it. That keeps the colorizer a
//! single pass over the input with no parser state.
//!
//! # Rules
//!
//! Evaluated in order, first match wins:
//!
//! | Prefix                | Kind                     |
//! |-----------------------|--------------------------|
//! | (empty line)          | [`LineKind::Blank`]      |
//! | `--- ` or `+++ `      | [`LineKind::FileHeader`] |
//! | `-`                   | [`LineKind::Removed`]    |
//! | `+`                   | [`LineKind::Added`]      |
//! | `@`                   | [`LineKind::HunkRange`]  |
//! | space                 | [`LineKind::Context`]    |
//! | anything else         | [`LineKind::Other`]      |
//!
//! # Examples
//!
//! ```
//! use colordiff::classify::{classify, split_hunk_range, LineKind};
//!
//! assert_eq!(classify(b"--- a/flake.nix"), LineKind::FileHeader);
//! assert_eq!(classify(b"-old"), LineKind::Removed);
//! assert_eq!(classify(b"index 6f2e06d..110fff0"), LineKind::Other);
//!
//! let (range, rest) = split_hunk_range(b"@@ -1,3 +1,4 @@ fn foo()").unwrap();
//! assert_eq!(range, b"@@ -1,3 +1,4 @@");
//! assert_eq!(rest, b" fn foo()");
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::recognize,
};

const OLD_FILE: &[u8] = b"--- ";
const NEW_FILE: &[u8] = b"+++ ";
const RANGE_END: &[u8] = b" @@";

/// Diff-syntax role of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty line
    Blank,
    /// `--- old` / `+++ new` file header
    FileHeader,
    /// Line only present in the old file
    Removed,
    /// Line only present in the new file
    Added,
    /// `@@ -a,b +c,d @@` hunk header, possibly followed by section text
    HunkRange,
    /// Unchanged line present in both files
    Context,
    /// No recognized prefix (`diff`, `index`, `\ No newline at end of file`, ...)
    Other,
}

/// Classify a line (without its terminator) by its leading bytes
pub fn classify(line: &[u8]) -> LineKind {
    let Some(&first) = line.first() else {
        return LineKind::Blank;
    };

    if file_header(line).is_ok() {
        return LineKind::FileHeader;
    }

    match first {
        b'-' => LineKind::Removed,
        b'+' => LineKind::Added,
        b'@' => LineKind::HunkRange,
        b' ' => LineKind::Context,
        _ => LineKind::Other,
    }
}

/// Split a hunk header after the first closing ` @@`.
///
/// Returns the range part (through the ` @@`) and the remainder, which is
/// usually the enclosing function name diff tools append. Returns `None`
/// when the line has no ` @@` at all.
pub fn split_hunk_range(line: &[u8]) -> Option<(&[u8], &[u8])> {
    hunk_range(line).ok().map(|(rest, range)| (range, rest))
}

fn file_header(line: &[u8]) -> IResult<&[u8], &[u8]> {
    alt((tag(OLD_FILE), tag(NEW_FILE))).parse(line)
}

fn hunk_range(line: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize((take_until(RANGE_END), tag(RANGE_END))).parse(line)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Arbitrary line content, bytes other than the line feed
    fn arb_line() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 0..40)
    }

    proptest! {
        /// Anything after "--- " or "+++ " is a file header
        #[test]
        fn header_prefix_always_wins(tail in arb_line(), old in any::<bool>()) {
            let mut line = if old { b"--- ".to_vec() } else { b"+++ ".to_vec() };
            line.extend_from_slice(&tail);
            prop_assert_eq!(classify(&line), LineKind::FileHeader);
        }

        /// Classification is decided by the first four bytes at most
        #[test]
        fn only_prefix_matters(line in arb_line(), tail in arb_line()) {
            let prefix_len = line.len().min(4);
            let mut extended = line[..prefix_len].to_vec();
            extended.extend_from_slice(&tail);
            if prefix_len == 4 || tail.is_empty() {
                prop_assert_eq!(classify(&line[..prefix_len]), classify(&extended));
            }
            if line.len() >= 4 {
                prop_assert_eq!(classify(&line), classify(&extended));
            }
        }

        /// A found hunk range always ends with the marker and splits losslessly
        #[test]
        fn hunk_split_is_lossless(line in arb_line()) {
            if let Some((range, rest)) = split_hunk_range(&line) {
                prop_assert!(range.ends_with(RANGE_END));
                let mut joined = range.to_vec();
                joined.extend_from_slice(rest);
                prop_assert_eq!(joined, line);
            } else {
                prop_assert!(!line.windows(3).any(|w| w == RANGE_END));
            }
        }
    }
}
