//! Merging raw character diffs into human-meaningful edits.
//!
//! A character differ reports what changed, but one edit from a human point of
//! view often spans several raw operations: a deletion directly followed by an
//! insertion is a replacement, a line break added together with indentation
//! around an unchanged whitespace run is a single whitespace edit, and a code
//! token that reappears on the other side of a line break is a move. The
//! [`DifferenceIterator`] walks the raw op sequence with up to two ops of
//! lookahead and emits one [`Diff`] per merged edit.

use std::ops::Range;

use super::raw::{raw_diff, RawOp, RawOpKind};
use crate::predicate::is_whitespace;

/// One merged edit between the original text and its reformatted version.
///
/// Ranges are half-open byte ranges into the **original** text. For `Add` the
/// range is empty (`start == end`) and marks the insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff {
    /// Text that exists only in the reformatted version.
    Add {
        /// The insertion point as an empty range.
        range: Range<usize>,
        /// The text to insert.
        new_text: String,
    },
    /// Text that exists only in the original version.
    Remove {
        /// The bytes to delete.
        range: Range<usize>,
        /// The deleted text (`original[range]`).
        old_text: String,
    },
    /// Text replaced by different text.
    Replace {
        /// The bytes to replace.
        range: Range<usize>,
        /// The replaced text (`original[range]`).
        old_text: String,
        /// The replacement text.
        new_text: String,
    },
}

impl Diff {
    /// The affected byte range in the original text.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        match self {
            Diff::Add { range, .. } | Diff::Remove { range, .. } | Diff::Replace { range, .. } => {
                range.clone()
            }
        }
    }

    /// The affected text of the original version, if any.
    #[must_use]
    pub fn old_text(&self) -> Option<&str> {
        match self {
            Diff::Add { .. } => None,
            Diff::Remove { old_text, .. } | Diff::Replace { old_text, .. } => Some(old_text),
        }
    }

    /// The replacement text of the reformatted version, if any.
    #[must_use]
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Diff::Remove { .. } => None,
            Diff::Add { new_text, .. } | Diff::Replace { new_text, .. } => Some(new_text),
        }
    }
}

/// Iterator that merges raw diff operations into [`Diff`] edits.
///
/// Holds a cursor into the op sequence and a byte cursor into the original
/// text. The byte cursor advances over `Equal` runs and over the old side of
/// every emitted edit, never over pure insertions, so successive edits come
/// out with non-decreasing, non-overlapping ranges.
pub struct DifferenceIterator {
    /// All runs that the character differ detected.
    ops: Vec<RawOp>,
    /// The current index in `ops`.
    i: usize,
    /// The current byte offset in the original text.
    loc: usize,
}

impl DifferenceIterator {
    /// Diff `original` against `reformatted` and merge the result.
    #[must_use]
    pub fn new(original: &str, reformatted: &str) -> Self {
        Self::from_ops(raw_diff(original, reformatted))
    }

    /// Merge an op sequence produced by an external character differ.
    ///
    /// The sequence must cover both texts in order with no gaps, as
    /// [`raw_diff`] output does.
    #[must_use]
    pub fn from_ops(ops: Vec<RawOp>) -> Self {
        Self { ops, i: 0, loc: 0 }
    }

    /// Get the op at `i`, treating out-of-range lookahead as absent.
    fn op(&self, i: usize) -> Option<&RawOp> {
        self.ops.get(i)
    }

    /// Handle the current op (`Insert`).
    fn handle_insert(&mut self) -> Diff {
        let current = self.ops[self.i].text.clone();

        // "insert → delete" is a replacement.
        if let Some(next1) = self.op(self.i + 1) {
            if next1.kind == RawOpKind::Delete {
                let old_text = next1.text.clone();
                return self.replaced(2, old_text, current);
            }
        }

        if let (Some(next1), Some(next2)) = (self.op(self.i + 1), self.op(self.i + 2)) {
            if next1.kind == RawOpKind::Equal && is_whitespace(&next1.text) {
                // "insert → equal → insert" with all three whitespace: a line
                // break added together with the indentation around an
                // unchanged whitespace run. One whitespace edit, not three.
                if next2.kind == RawOpKind::Insert
                    && is_whitespace(&current)
                    && is_whitespace(&next2.text)
                {
                    let old_text = next1.text.clone();
                    let new_text = format!("{current}{}{}", next1.text, next2.text);
                    return self.replaced(3, old_text, new_text);
                }

                // "insert → equal → delete" where the inserted text repeats
                // the deleted token: the code moved to the previous line.
                if next2.kind == RawOpKind::Delete
                    && current.trim().ends_with(next2.text.trim())
                {
                    let old_text = format!("{}{}", next1.text, next2.text);
                    let new_text = format!("{current}{}", next1.text);
                    return self.replaced(3, old_text, new_text);
                }
            }
        }

        self.added(1, current)
    }

    /// Handle the current op (`Delete`).
    fn handle_delete(&mut self) -> Diff {
        let current = self.ops[self.i].text.clone();

        // "delete → insert" is a replacement.
        if let Some(next1) = self.op(self.i + 1) {
            if next1.kind == RawOpKind::Insert {
                let new_text = next1.text.clone();
                return self.replaced(2, current, new_text);
            }
        }

        if let (Some(next1), Some(next2)) = (self.op(self.i + 1), self.op(self.i + 2)) {
            if next1.kind == RawOpKind::Equal && is_whitespace(&next1.text) {
                // "delete → equal → delete" with all three whitespace: a line
                // break removed together with its indentation.
                if next2.kind == RawOpKind::Delete
                    && is_whitespace(&current)
                    && is_whitespace(&next2.text)
                {
                    let old_text = format!("{current}{}{}", next1.text, next2.text);
                    let new_text = next1.text.clone();
                    return self.replaced(3, old_text, new_text);
                }

                // "delete → equal → insert" where the inserted text repeats
                // the deleted token: the code moved to the next line.
                if next2.kind == RawOpKind::Insert
                    && next2.text.trim().starts_with(current.trim())
                {
                    let old_text = format!("{current}{}", next1.text);
                    let new_text = format!("{}{}", next1.text, next2.text);
                    return self.replaced(3, old_text, new_text);
                }
            }
        }

        self.removed(1, current)
    }

    /// Emit an `Add` edit and consume `op_count` ops. Pure insertions touch
    /// no original-text span, so `loc` stays put.
    fn added(&mut self, op_count: usize, new_text: String) -> Diff {
        let range = self.loc..self.loc;
        self.i += op_count;
        Diff::Add { range, new_text }
    }

    /// Emit a `Remove` edit, consume `op_count` ops, and advance past the
    /// removed text.
    fn removed(&mut self, op_count: usize, old_text: String) -> Diff {
        let range = self.loc..self.loc + old_text.len();
        self.i += op_count;
        self.loc = range.end;
        Diff::Remove { range, old_text }
    }

    /// Emit a `Replace` edit, consume `op_count` ops, and advance past the
    /// replaced text.
    fn replaced(&mut self, op_count: usize, old_text: String, new_text: String) -> Diff {
        let range = self.loc..self.loc + old_text.len();
        self.i += op_count;
        self.loc = range.end;
        Diff::Replace {
            range,
            old_text,
            new_text,
        }
    }
}

impl Iterator for DifferenceIterator {
    type Item = Diff;

    fn next(&mut self) -> Option<Diff> {
        while self.i < self.ops.len() {
            match self.ops[self.i].kind {
                RawOpKind::Equal => {
                    self.loc += self.ops[self.i].text.len();
                    self.i += 1;
                }
                RawOpKind::Insert => return Some(self.handle_insert()),
                RawOpKind::Delete => return Some(self.handle_delete()),
            }
        }
        None
    }
}
