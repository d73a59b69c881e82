//! Error types for the corpus harvester.
//!
//! Only failures that abort a run live here. A metadata or colophon document
//! that cannot be fetched is not an error: it is read as an empty document
//! and leaves the affected fields empty.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// HTTP request failed at the transport level.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A repository listing page answered with a non-success status.
    #[error("Repository listing page {page} returned HTTP {status}")]
    ListingStatus {
        page: u32,
        status: reqwest::StatusCode,
    },

    /// A configured endpoint is not an absolute http(s) URL.
    #[error("Invalid URL '{0}'. Expected an absolute http:// or https:// URL")]
    InvalidUrl(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
