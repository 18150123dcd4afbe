/// YouTube client error types
use thiserror::Error;

/// Result type alias for YouTube operations
pub type Result<T> = std::result::Result<T, YouTubeError>;

/// Errors from the YouTube Data API client
#[derive(Error, Debug)]
pub enum YouTubeError {
    /// No API key configured; checked before any network call
    #[error("YouTube API key is not configured")]
    CredentialMissing,

    /// The API rejected the request
    #[error("YouTube API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The API's error message, when it sent one
        message: String,
    },

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No video exists for the given id
    #[error("Video not found: {0}")]
    VideoNotFound(String),
}
