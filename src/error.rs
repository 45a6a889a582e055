//! Error types for feedscrub.
//!
//! This module defines the error types returned by cleaning and
//! extraction operations.

/// Error type for cleaning and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// No extractable content survived cleaning.
    ///
    /// Distinguishes an empty result from a populated article so callers
    /// can fall back to posting the raw feed description instead.
    #[error("No extractable content found")]
    NoContent,

    /// The supplied source URL is not a well-formed absolute URL.
    #[error("Invalid source URL: {0}")]
    InvalidSourceUrl(String),

    /// Invalid configuration supplied by the caller.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type alias for cleaning and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
