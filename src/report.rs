//! Diagnostic reporting.
//!
//! Maps each merged edit and its classification to a positional diagnostic
//! with a human-readable message and an automatic fix. Hosts convert the byte
//! range to their own position type, print [`Diagnostic::message`], and apply
//! [`Fix`] when running in fix mode; [`apply_fixes`] does the latter for whole
//! batches and is also what the round-trip tests replay.

use std::ops::Range;

use crate::classify::{classify, Category, Classification};
use crate::diff::{Diff, DifferenceIterator};

/// An automatic fix for one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fix {
    /// Insert `text` at byte offset `at`.
    InsertAfter {
        /// The insertion offset.
        at: usize,
        /// The text to insert.
        text: String,
    },
    /// Delete the byte range.
    Remove {
        /// The bytes to delete.
        range: Range<usize>,
    },
    /// Replace the byte range with `text`.
    Replace {
        /// The bytes to replace.
        range: Range<usize>,
        /// The replacement text.
        text: String,
    },
}

/// One lint diagnostic: where, what kind, and how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The affected byte range in the original text. Empty for insertions.
    pub range: Range<usize>,
    /// The edit's category and display payload.
    pub classification: Classification,
    /// The fix that makes the original text match the reformatted one here.
    pub fix: Fix,
}

impl Diagnostic {
    /// Build the diagnostic for one merged edit.
    #[must_use]
    pub fn from_diff(diff: Diff) -> Self {
        let classification = classify(&diff);
        let range = diff.range();
        let fix = match diff {
            Diff::Add { range, new_text } => Fix::InsertAfter {
                at: range.start,
                text: new_text,
            },
            Diff::Remove { range, .. } => Fix::Remove { range },
            Diff::Replace {
                range, new_text, ..
            } => Fix::Replace {
                range,
                text: new_text,
            },
        };
        Self {
            range,
            classification,
            fix,
        }
    }

    /// Human-readable message for this diagnostic.
    ///
    /// Code payloads are quoted so that whitespace-sensitive snippets read
    /// unambiguously ("Require code \";\".").
    #[must_use]
    pub fn message(&self) -> String {
        let old_text = self.classification.old_text.as_deref().unwrap_or("");
        let new_text = self.classification.new_text.as_deref().unwrap_or("");
        match self.classification.category {
            Category::RequireLinebreak => "Require line break(s).".to_string(),
            Category::ExtraLinebreak => "Extra line break(s).".to_string(),
            Category::RequireWhitespace => "Require whitespace(s).".to_string(),
            Category::ExtraWhitespace => "Extra whitespace(s).".to_string(),
            Category::RequireCode => format!("Require code {new_text:?}."),
            Category::ExtraCode => format!("Extra code {old_text:?}."),
            Category::ReplaceWhitespace => "Require tweaking whitespace(s).".to_string(),
            Category::ReplaceCode => {
                format!("Require code {new_text:?} instead of {old_text:?}.")
            }
            Category::MoveCodeToNextLine => {
                format!("Move code {old_text:?} to the next line.")
            }
            Category::MoveCodeToPrevLine => {
                format!("Move code {old_text:?} to the previous line.")
            }
            Category::MoveCode => {
                format!("Require tweaking whitespaces around code {old_text:?}.")
            }
        }
    }
}

/// Report every difference between `original` and `reformatted` as a
/// diagnostic, in text order.
pub fn diagnostics(
    original: &str,
    reformatted: &str,
) -> impl Iterator<Item = Diagnostic> {
    DifferenceIterator::new(original, reformatted).map(Diagnostic::from_diff)
}

/// Apply every fix to `original`, producing the fully fixed text.
///
/// Diagnostics come out of [`diagnostics`] ordered with non-overlapping
/// ranges, so a single left-to-right pass suffices.
#[must_use]
pub fn apply_fixes(original: &str, diagnostics: &[Diagnostic]) -> String {
    let mut fixed = String::with_capacity(original.len());
    let mut cursor = 0;
    for diagnostic in diagnostics {
        match &diagnostic.fix {
            Fix::InsertAfter { at, text } => {
                fixed.push_str(&original[cursor..*at]);
                fixed.push_str(text);
                cursor = *at;
            }
            Fix::Remove { range } => {
                fixed.push_str(&original[cursor..range.start]);
                cursor = range.end;
            }
            Fix::Replace { range, text } => {
                fixed.push_str(&original[cursor..range.start]);
                fixed.push_str(text);
                cursor = range.end;
            }
        }
    }
    fixed.push_str(&original[cursor..]);
    fixed
}
