//! Error types for websmith
//!
//! The cache and generation core never fails; these errors belong to the
//! edges (configuration loading, format dispatch, file I/O).

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// websmith error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Generation
    // ========================================================================
    #[error("Unsupported format: {0} (expected one of: css, scss, json)")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // External conversions
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether the error was caused by what the user supplied
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedFormat(_) | Error::InvalidInput(_) | Error::Config(_)
        )
    }

    /// Unsupported format helper
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Error::UnsupportedFormat(format.into())
    }
}
