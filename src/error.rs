//! Error types for pubmed-fetcher.
//!
//! Only transport, I/O and output problems are errors. Missing fields inside a
//! PubMed record never are; the extractor falls back to placeholders instead.

use thiserror::Error;

/// Main error type for pubmed-fetcher operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// E-utilities answered with a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Human readable description
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `FetchError`
pub type Result<T> = std::result::Result<T, FetchError>;
