//! Error types for skyscrape operations.
//!
//! This module defines the main error type [`SkyscrapeError`] which covers
//! fetching and document-query failures. Extraction itself never errors:
//! "nothing matched" is an empty result sequence, not an `Err`.

use thiserror::Error;

/// Main error type for fetch and document-query operations.
///
/// Only the outermost boundaries of the crate produce errors: URL
/// validation, the single HTTP fetch attempt, and invalid CSS selectors.
/// Extraction strategies degrade to empty output instead of failing.
#[derive(Error, Debug)]
pub enum SkyscrapeError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues and other
    /// transport-level problems. One fetch attempt, no automatic retry.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when the HTTP request exceeds the configured timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Document query errors, typically an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A background extraction task terminated without delivering a result.
    ///
    /// Anything unexpected inside the spawned fetch-and-extract pipeline
    /// (including a panic) surfaces through this variant; it shares the
    /// error channel with network failures and is distinguished only by
    /// its message.
    #[cfg(feature = "fetch")]
    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}

/// Result type alias for SkyscrapeError.
pub type Result<T> = std::result::Result<T, SkyscrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SkyscrapeError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = SkyscrapeError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_task_failed_error() {
        let err = SkyscrapeError::TaskFailed("worker panicked".to_string());
        assert!(err.to_string().contains("worker panicked"));
    }
}
