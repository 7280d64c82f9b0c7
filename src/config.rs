//! Formatter configuration.
//!
//! This module provides the [`FormatConfig`] struct that is handed to the
//! external formatter. The engine never interprets these values itself; it
//! validates them, passes them through [`crate::Formatter::format`], and uses
//! them as the cache key of [`crate::CachedFormatter`]. The field set mirrors
//! the global options shared by mainstream code formatters. Hosts usually
//! deserialize this from their own option object; formatter-specific concerns
//! belong in the formatter implementation, not here.

use serde::{Deserialize, Serialize};

// Serde default functions
fn default_line_width() -> usize {
    120
}
fn default_indent_width() -> usize {
    4
}

/// Line ending style the formatter should produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NewLineKind {
    /// Keep whatever the majority of the input uses.
    #[default]
    Auto,
    /// Always `\n`.
    LineFeed,
    /// Always `\r\n`.
    CarriageReturnLineFeed,
}

/// Configuration passed to the external formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfig {
    /// Maximum width of a line before the formatter wraps it (default: 120)
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Number of columns per indentation level (default: 4)
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Indent with tabs instead of spaces (default: false)
    #[serde(default)]
    pub use_tabs: bool,

    /// Line ending style (default: keep the input's)
    #[serde(default)]
    pub new_line_kind: NewLineKind,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            line_width: 120,
            indent_width: 4,
            use_tabs: false,
            new_line_kind: NewLineKind::Auto,
        }
    }
}

impl FormatConfig {
    /// Minimum reasonable line width (must fit at least some code)
    const MIN_LINE_WIDTH: usize = 10;
    /// Maximum reasonable line width
    const MAX_LINE_WIDTH: usize = 1000;
    /// Maximum reasonable indent width
    const MAX_INDENT_WIDTH: usize = 20;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.line_width < Self::MIN_LINE_WIDTH {
            return Some(format!(
                "lineWidth {} is below minimum of {}",
                self.line_width,
                Self::MIN_LINE_WIDTH
            ));
        }
        if self.line_width > Self::MAX_LINE_WIDTH {
            return Some(format!(
                "lineWidth {} exceeds maximum of {}",
                self.line_width,
                Self::MAX_LINE_WIDTH
            ));
        }
        if self.indent_width == 0 {
            return Some("indentWidth must be at least 1".to_string());
        }
        if self.indent_width > Self::MAX_INDENT_WIDTH {
            return Some(format!(
                "indentWidth {} exceeds maximum of {}",
                self.indent_width,
                Self::MAX_INDENT_WIDTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.line_width, 120);
        assert_eq!(config.indent_width, 4);
        assert!(!config.use_tabs);
        assert_eq!(config.new_line_kind, NewLineKind::Auto);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FormatConfig::default().validate().is_none());
    }

    #[test]
    fn test_validate_line_width_too_small() {
        let config = FormatConfig {
            line_width: 2,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("lineWidth"));
    }

    #[test]
    fn test_validate_line_width_too_large() {
        let config = FormatConfig {
            line_width: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_indent_width_zero() {
        let config = FormatConfig {
            indent_width: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("indentWidth"));
    }

    #[test]
    fn test_validate_indent_width_too_large() {
        let config = FormatConfig {
            indent_width: 100,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_partial_json_config_gets_defaults() {
        // Hosts hand over partial option objects; missing keys fall back to
        // the defaults.
        let config: FormatConfig = serde_json::from_str(r#"{"lineWidth": 80}"#).unwrap();
        assert_eq!(config.line_width, 80);
        assert_eq!(config.indent_width, 4);
        assert!(!config.use_tabs);
    }

    #[test]
    fn test_json_config_round_trip() {
        let config = FormatConfig {
            line_width: 100,
            indent_width: 2,
            use_tabs: true,
            new_line_kind: NewLineKind::LineFeed,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"lineWidth\":100"));
        assert!(json.contains("\"newLineKind\":\"lineFeed\""));
        let back: FormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
