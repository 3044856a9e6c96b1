//! Error types for URL normalization.

use thiserror::Error;

/// Errors that can occur while normalizing a URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input starts with a scheme-like prefix that is not followed by `://`
    /// (`data:`, `mailto:`, or an ambiguous `user:pass@host`).
    #[error("Unsupported protocol")]
    UnsupportedProtocol,

    /// The scheme is not one of http, https or the default protocol, and
    /// custom protocols are not allowed.
    #[error("Invalid protocol: {0}")]
    InvalidProtocol(String),

    /// The hostname has fewer than two non-empty labels.
    #[error("Invalid domain: {0:?}")]
    InvalidDomain(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<url::ParseError> for NormalizeError {
    fn from(err: url::ParseError) -> Self {
        NormalizeError::InvalidUrl(err.to_string())
    }
}

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, NormalizeError>;
