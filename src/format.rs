//! The external formatter boundary.
//!
//! The engine does not format text itself. It calls into a formatter behind
//! the [`Formatter`] trait and only inspects the result, treating the
//! formatter as a black box. [`CachedFormatter`] wraps any formatter with a
//! single-slot cache so that linting the same text twice in a row (report
//! pass, then fix pass) runs the formatter once.

use crate::config::FormatConfig;
use crate::error::Result;

/// An external code formatter.
///
/// `format` returns `Ok(Some(text))` with the reformatted text,
/// `Ok(None)` when the input is already formatted, and `Err` when the
/// formatter rejects the input (for example on a syntax error). The method
/// takes `&mut self` so that implementations may keep internal state, such as
/// a loaded plugin or the cache slot of [`CachedFormatter`].
pub trait Formatter {
    /// Format `file_text` under `config`.
    fn format(&mut self, file_text: &str, config: &FormatConfig) -> Result<Option<String>>;
}

/// The last formatter call, kept for reuse.
struct CacheSlot {
    config: FormatConfig,
    file_text: String,
    output: Option<String>,
}

/// Wraps a formatter with a single-slot cache of the last call.
///
/// Hosts lint every file with the same configuration and often check a file
/// twice in a row, once to report and once to fix. Keying the slot on
/// `(config, file_text)` makes the second run free. Formatter errors are not
/// cached; a failing input is retried on the next call.
pub struct CachedFormatter<F> {
    inner: F,
    slot: Option<CacheSlot>,
}

impl<F: Formatter> CachedFormatter<F> {
    /// Wrap `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: F) -> Self {
        Self { inner, slot: None }
    }

    /// Unwrap, discarding the cache.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: Formatter> Formatter for CachedFormatter<F> {
    fn format(&mut self, file_text: &str, config: &FormatConfig) -> Result<Option<String>> {
        if let Some(slot) = &self.slot {
            if slot.config == *config && slot.file_text == file_text {
                return Ok(slot.output.clone());
            }
        }

        let output = self.inner.format(file_text, config)?;
        self.slot = Some(CacheSlot {
            config: config.clone(),
            file_text: file_text.to_string(),
            output: output.clone(),
        });
        Ok(output)
    }
}
