//! Error types and result aliases for fmtlint.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! The diff engine itself is total over its inputs; errors only arise at the
//! boundaries (an invalid formatter configuration, or a formatter rejecting
//! its input).

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
