//! The lint pipeline.
//!
//! [`check_text`] is the main entry point: validate the configuration, run
//! the external formatter, and when the output differs from the input, report
//! every difference as a fixable diagnostic. A formatter that cannot handle
//! the input (unparseable code, unsupported syntax) produces no diagnostics;
//! malformed text is the parser's business, not the formatter's.

use anyhow::bail;
use tracing::debug;

use crate::config::FormatConfig;
use crate::error::Result;
use crate::format::Formatter;
use crate::report::{diagnostics, Diagnostic};

/// Check `original` against the output of `formatter` and report every
/// difference as a diagnostic, in text order.
///
/// Returns an empty list when the text is already formatted or when the
/// formatter fails on it; formatter failures are recorded at debug level.
/// Returns an error only for an invalid `config`, which is a caller bug
/// rather than a property of the input text.
pub fn check_text<F: Formatter>(
    original: &str,
    formatter: &mut F,
    config: &FormatConfig,
) -> Result<Vec<Diagnostic>> {
    if let Some(message) = config.validate() {
        bail!("invalid formatter configuration: {message}");
    }

    let reformatted = match formatter.format(original, config) {
        Ok(Some(text)) => text,
        Ok(None) => return Ok(Vec::new()),
        Err(error) => {
            debug!("failed to format: {error:#}");
            return Ok(Vec::new());
        }
    };

    Ok(diagnostics(original, &reformatted).collect())
}
