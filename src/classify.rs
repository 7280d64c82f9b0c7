//! Classification of merged edits into human-facing categories.
//!
//! Every [`Diff`] maps to exactly one [`Category`]: pure whitespace edits are
//! told apart from code edits, line-break-affecting edits from same-line ones,
//! and replacements whose trimmed content is unchanged are recognized as
//! moves. Classification is pure and stateless, so edits can be classified in
//! any order; only fix application cares about edit order.

use std::cmp::Ordering;

use crate::diff::Diff;
use crate::predicate::{has_linebreak, is_whitespace, leading_linebreak_count};

/// The category of a merged edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A line break must be inserted.
    RequireLinebreak,
    /// A line break must be removed.
    ExtraLinebreak,
    /// Whitespace must be inserted.
    RequireWhitespace,
    /// Whitespace must be removed.
    ExtraWhitespace,
    /// Code must be inserted.
    RequireCode,
    /// Code must be removed.
    ExtraCode,
    /// Whitespace must be rewritten without adding or removing line breaks.
    ReplaceWhitespace,
    /// Code must be rewritten.
    ReplaceCode,
    /// Code must move to the next line.
    MoveCodeToNextLine,
    /// Code must move to the previous line.
    MoveCodeToPrevLine,
    /// Whitespace around code must change without moving it across lines.
    MoveCode,
}

/// A classified edit: the category plus any display payload.
///
/// Payloads are snippets of the affected code with surrounding whitespace
/// already trimmed, ready for display. Which sides are present follows the
/// category: `RequireCode` carries the inserted code in `new_text`,
/// `ExtraCode` and the move categories carry the affected code in `old_text`,
/// and `ReplaceCode` carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The edit's category.
    pub category: Category,
    /// Trimmed snippet of the affected code in the original text.
    pub old_text: Option<String>,
    /// Trimmed snippet of the replacement code.
    pub new_text: Option<String>,
}

impl Classification {
    /// A classification without display payload.
    fn bare(category: Category) -> Self {
        Self {
            category,
            old_text: None,
            new_text: None,
        }
    }
}

/// Classify one merged edit.
///
/// Pure, total, and deterministic: every edit maps to exactly one category.
#[must_use]
pub fn classify(diff: &Diff) -> Classification {
    match diff {
        Diff::Add { new_text, .. } => {
            if is_whitespace(new_text) {
                Classification::bare(if has_linebreak(new_text) {
                    Category::RequireLinebreak
                } else {
                    Category::RequireWhitespace
                })
            } else {
                Classification {
                    category: Category::RequireCode,
                    old_text: None,
                    new_text: Some(new_text.trim().to_string()),
                }
            }
        }
        Diff::Remove { old_text, .. } => {
            if is_whitespace(old_text) {
                Classification::bare(if has_linebreak(old_text) {
                    Category::ExtraLinebreak
                } else {
                    Category::ExtraWhitespace
                })
            } else {
                Classification {
                    category: Category::ExtraCode,
                    old_text: Some(old_text.trim().to_string()),
                    new_text: None,
                }
            }
        }
        Diff::Replace {
            old_text, new_text, ..
        } => classify_replace(old_text, new_text),
    }
}

/// Classify a replacement edit.
fn classify_replace(old_text: &str, new_text: &str) -> Classification {
    // Whitespace reshuffle: the category depends on whether line breaks
    // appeared or disappeared.
    if is_whitespace(old_text) && is_whitespace(new_text) {
        let old_breaks = has_linebreak(old_text);
        let new_breaks = has_linebreak(new_text);
        let category = if !old_breaks && new_breaks {
            Category::RequireLinebreak
        } else if old_breaks && !new_breaks {
            Category::ExtraLinebreak
        } else {
            Category::ReplaceWhitespace
        };
        return Classification::bare(category);
    }

    // Same code, different placement: a move. The direction comes from the
    // number of line breaks in front of the first code character.
    if old_text.trim() == new_text.trim() {
        let old_line = leading_linebreak_count(old_text);
        let new_line = leading_linebreak_count(new_text);
        let category = match new_line.cmp(&old_line) {
            Ordering::Greater => Category::MoveCodeToNextLine,
            Ordering::Less => Category::MoveCodeToPrevLine,
            Ordering::Equal => Category::MoveCode,
        };
        return Classification {
            category,
            old_text: Some(old_text.trim().to_string()),
            new_text: None,
        };
    }

    Classification {
        category: Category::ReplaceCode,
        old_text: Some(old_text.trim().to_string()),
        new_text: Some(new_text.trim().to_string()),
    }
}
