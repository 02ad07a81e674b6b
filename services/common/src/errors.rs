//! Feed error types
//!
//! These errors stay inside the feeds layer: every public fetch absorbs
//! them into an all-absent value after logging. Nothing here reaches the
//! sentiment core.

use thiserror::Error;

/// Failure modes of a single best-effort fetch
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure: connect error, timeout, non-success status,
    /// or an undecodable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response parsed but the expected fields were missing or
    /// non-numeric
    #[error("Malformed response from {endpoint}: {details}")]
    MalformedResponse {
        /// Endpoint the response came from
        endpoint: String,
        /// What was wrong with the payload
        details: String,
    },

    /// The social-analytics API key is not configured
    #[error("social analytics API key is not configured")]
    MissingApiKey,
}
