//! Text predicates shared by the difference merger and the edit classifier.
//!
//! All checks go through precompiled regexes using `LazyLock`, with Unicode
//! character classes, so "whitespace" here means the full `\s` class and not
//! just ASCII blanks.

use std::sync::LazyLock;

use regex::Regex;

/// A string that consists entirely of whitespace.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+$").unwrap());

/// Any line break character.
static LINEBREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]").unwrap());

/// The whitespace run at the start of a string.
static LEADING_WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+").unwrap());

/// One line break, counting `\r\n` as a single break.
static LINEBREAK_KIND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|[\r\n]").unwrap());

/// Check if a given text is whitespace(s).
///
/// The empty string is not whitespace.
#[must_use]
pub fn is_whitespace(s: &str) -> bool {
    WHITESPACE_RE.is_match(s)
}

/// Check if a given text contains line break(s).
#[must_use]
pub fn has_linebreak(s: &str) -> bool {
    LINEBREAK_RE.is_match(s)
}

/// Count line breaks in the whitespace run at the start of a string.
///
/// Returns 0 when the text does not start with whitespace. A `\r\n` pair
/// counts as one break. The count tells which line the first code character
/// sits on relative to where the string starts, which is how the classifier
/// tells "moved to the next line" from "moved to the previous line".
#[must_use]
pub fn leading_linebreak_count(s: &str) -> usize {
    match LEADING_WHITESPACE_RE.find(s) {
        Some(head) => LINEBREAK_KIND_RE.find_iter(head.as_str()).count(),
        None => 0,
    }
}
