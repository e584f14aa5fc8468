//! Error types for configuration loading and validation
//!
//! Conversions themselves are total: malformed input collapses to a
//! documented default and no error is ever surfaced to the caller. The types
//! here exist for the one fallible path: loading and validating a
//! `ConversionConfig` at startup.

use anyhow::Error;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("numeric character set must include all ten ASCII digits")]
    MissingDigits,

    #[error("at least one date format must be configured")]
    NoDateFormats,
}

/// Main error type for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConversionError>;
