//! fmtlint - Formatter-driven lint diagnostics for source text
//!
//! Compares an original text against a reformatted version of the same text
//! and reports the differences as human-meaningful edits instead of raw
//! character diffs: "insert a line break here", "this whitespace is extra",
//! "this code should move to the previous line". Every edit carries an exact
//! byte range in the original text and an automatic fix.
//!
//! The formatter itself is external: implement [`Formatter`] for whatever
//! produces the reformatted text, then call [`check_text`].

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod classify;
pub mod config;
pub mod diff;
pub mod error;
pub mod format;
pub mod predicate;
pub mod process;
pub mod report;

// Re-export commonly used types
pub use classify::{classify, Category, Classification};
pub use config::{FormatConfig, NewLineKind};
pub use diff::{raw_diff, Diff, DifferenceIterator, RawOp, RawOpKind};
pub use error::Result;
pub use format::{CachedFormatter, Formatter};
pub use process::check_text;
pub use report::{apply_fixes, diagnostics, Diagnostic, Fix};
