//! # Theme Error Types
//!
//! Errors raised by the theming core. Color conversion itself is total once a
//! [Color](crate::color::Color) exists, so every error here comes from a
//! boundary: parsing user or backend supplied hex strings, or reading
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A hex seed color failed to parse (wrong length or non-hex digits).
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Theme configuration file could not be read.
    #[error("Failed to read theme config {0:?}: {1}")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    /// Theme configuration file could not be parsed.
    #[error("Failed to parse theme config {0:?}: {1}")]
    ConfigParse(PathBuf, String),

    /// Theme configuration file has an extension we do not understand.
    #[error("Unsupported theme config format {0:?}. Use .toml")]
    UnsupportedConfigFormat(PathBuf),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(details: impl Into<String>) -> Self {
        Self::InvalidColor(details.into())
    }

    /// Create a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse(path.into(), details.into())
    }
}
