//! Character-level diff boundary.
//!
//! The merger consumes a flat sequence of equal/insert/delete runs that covers
//! both texts in order with no gaps. The runs come from the `similar` crate's
//! character diff; this module coalesces its per-character changes into runs
//! and checks the coverage contract in debug builds. Callers with their own
//! differ can skip this module entirely and feed
//! [`DifferenceIterator::from_ops`](super::DifferenceIterator::from_ops)
//! directly.

use similar::{ChangeTag, TextDiff};

/// Kind of a raw diff operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOpKind {
    /// Text present in both versions.
    Equal,
    /// Text present only in the reformatted version.
    Insert,
    /// Text present only in the original version.
    Delete,
}

/// One run of the character-level diff between two texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOp {
    /// What happened to this run of text.
    pub kind: RawOpKind,
    /// The run's text. For `Equal` and `Delete` this is a substring of the
    /// original text; for `Equal` and `Insert`, of the reformatted text.
    pub text: String,
}

impl RawOp {
    /// Create a raw operation.
    #[must_use]
    pub fn new(kind: RawOpKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Compute the character-level diff between two texts.
///
/// Returns runs ordered left to right. Concatenating the `Equal` and `Delete`
/// runs reproduces `original`; concatenating the `Equal` and `Insert` runs
/// reproduces `reformatted`.
#[must_use]
pub fn raw_diff(original: &str, reformatted: &str) -> Vec<RawOp> {
    let diff = TextDiff::from_chars(original, reformatted);
    let mut ops: Vec<RawOp> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => RawOpKind::Equal,
            ChangeTag::Insert => RawOpKind::Insert,
            ChangeTag::Delete => RawOpKind::Delete,
        };
        match ops.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => ops.push(RawOp::new(kind, change.value())),
        }
    }

    debug_assert_coverage(&ops, original, reformatted);
    ops
}

/// Check the differ contract: the runs must cover both texts completely.
///
/// A violation is a defect in the differ, not a recoverable condition, so it
/// only trips `debug_assert`s.
fn debug_assert_coverage(ops: &[RawOp], original: &str, reformatted: &str) {
    if !cfg!(debug_assertions) {
        return;
    }
    let old_len: usize = ops
        .iter()
        .filter(|op| op.kind != RawOpKind::Insert)
        .map(|op| op.text.len())
        .sum();
    let new_len: usize = ops
        .iter()
        .filter(|op| op.kind != RawOpKind::Delete)
        .map(|op| op.text.len())
        .sum();
    debug_assert_eq!(
        old_len,
        original.len(),
        "character diff does not cover the original text"
    );
    debug_assert_eq!(
        new_len,
        reformatted.len(),
        "character diff does not cover the reformatted text"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reassemble the original text from Equal and Delete runs.
    fn old_side(ops: &[RawOp]) -> String {
        ops.iter()
            .filter(|op| op.kind != RawOpKind::Insert)
            .map(|op| op.text.as_str())
            .collect()
    }

    /// Reassemble the reformatted text from Equal and Insert runs.
    fn new_side(ops: &[RawOp]) -> String {
        ops.iter()
            .filter(|op| op.kind != RawOpKind::Delete)
            .map(|op| op.text.as_str())
            .collect()
    }

    #[test]
    fn test_identical_texts_yield_single_equal_run() {
        let ops = raw_diff("abc", "abc");
        assert_eq!(ops, vec![RawOp::new(RawOpKind::Equal, "abc")]);
    }

    #[test]
    fn test_empty_to_text_is_one_insert_run() {
        let ops = raw_diff("", "abc");
        assert_eq!(ops, vec![RawOp::new(RawOpKind::Insert, "abc")]);
    }

    #[test]
    fn test_text_to_empty_is_one_delete_run() {
        let ops = raw_diff("abc", "");
        assert_eq!(ops, vec![RawOp::new(RawOpKind::Delete, "abc")]);
    }

    #[test]
    fn test_both_empty() {
        assert!(raw_diff("", "").is_empty());
    }

    #[test]
    fn test_adjacent_same_tag_changes_are_coalesced() {
        let ops = raw_diff("ab", "ab;\n");
        // The two appended characters must come back as one Insert run,
        // not one run per character.
        assert_eq!(
            ops,
            vec![
                RawOp::new(RawOpKind::Equal, "ab"),
                RawOp::new(RawOpKind::Insert, ";\n"),
            ]
        );
    }

    #[test]
    fn test_runs_cover_both_texts() {
        let original = "console . log('hello!')";
        let reformatted = "console.log(\"hello!\");\n";
        let ops = raw_diff(original, reformatted);
        assert_eq!(old_side(&ops), original);
        assert_eq!(new_side(&ops), reformatted);
    }

    #[test]
    fn test_runs_cover_disjoint_texts() {
        let ops = raw_diff("xxxx", "yy");
        assert_eq!(old_side(&ops), "xxxx");
        assert_eq!(new_side(&ops), "yy");
    }

    #[test]
    fn test_multibyte_text_stays_intact() {
        let original = "let s = 'héllo';";
        let reformatted = "let s = \"héllo\";";
        let ops = raw_diff(original, reformatted);
        assert_eq!(old_side(&ops), original);
        assert_eq!(new_side(&ops), reformatted);
    }
}
