/// Core error types for Clipmark
use thiserror::Error;

/// Result type alias using `ClipmarkError`
pub type Result<T> = std::result::Result<T, ClipmarkError>;

/// Core error type for Clipmark.
///
/// Nothing is fatal: every failure path returns one of these to the
/// caller. Remote calls are never retried automatically.
#[derive(Error, Debug)]
pub enum ClipmarkError {
    /// The operation requires an authenticated user
    #[error("Authentication required")]
    AuthRequired,

    /// Identity provider failure, surfaced with the provider's code
    #[error("Auth error [{code}]: {message}")]
    Auth {
        /// Provider error code (e.g. "auth/invalid-credential")
        code: String,
        /// Human-readable message
        message: String,
    },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind ("playlist", "share", "tag", ...)
        entity: String,
        /// The id that was looked up
        id: String,
    },

    /// Local validation failure, caught before any remote call
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Document store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Network failure
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl ClipmarkError {
    /// Create an auth error with a provider code
    pub fn auth(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Auth {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
