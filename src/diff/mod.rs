//! Difference computation between an original text and its reformatted version.
//!
//! This module contains the diff engine organized into submodules:
//! - [`raw`]: the character-level diff boundary ([`RawOp`] runs from the
//!   external differ, plus [`raw_diff`] which adapts the `similar` crate)
//! - [`merge`]: merges adjacent raw operations into semantically coherent
//!   edits with byte ranges in the original text
//!
//! The merger favors a readable edit sequence over a minimal one: an adjacent
//! insert/delete pair, a whitespace-only reshuffle, or a token moved across a
//! line break each come out as a single edit.

pub mod merge;
pub mod raw;

pub use merge::{Diff, DifferenceIterator};
pub use raw::{raw_diff, RawOp, RawOpKind};
