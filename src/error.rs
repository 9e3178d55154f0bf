//! Error types for fetch-and-extract operations.
//!
//! Failures are data, not control flow: callers pattern-match on the
//! returned `Result` instead of relying on propagation to the process
//! boundary.

/// Error type for fetch-and-extract operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The readability collaborator rejected the document.
    #[error("readability failed: {0}")]
    Readability(String),
}

/// Result type alias for fetch-and-extract operations.
pub type Result<T> = std::result::Result<T, Error>;
