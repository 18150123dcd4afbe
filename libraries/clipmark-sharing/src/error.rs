/// Sharing workflow error types
use thiserror::Error;

/// Result type alias for sharing operations
pub type Result<T> = std::result::Result<T, ShareError>;

/// Which workflow operation failed.
///
/// Each carries its own user-facing message, so the presentation layer
/// can show a specific failure line without inspecting the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOp {
    /// Sharing a playlist with another user
    Share,
    /// Accepting a received share
    Accept,
    /// Declining a received share
    Decline,
    /// Cancelling a sent share
    Cancel,
    /// Saving a rating
    Rate,
    /// Loading received shares
    ListReceived,
    /// Loading sent shares
    ListSent,
    /// Loading ratings
    Ratings,
}

impl ShareOp {
    /// User-facing failure line for this operation
    pub fn user_message(&self) -> &'static str {
        match self {
            ShareOp::Share => "Failed to share playlist",
            ShareOp::Accept => "Failed to accept shared playlist",
            ShareOp::Decline => "Failed to decline shared playlist",
            ShareOp::Cancel => "Failed to cancel share",
            ShareOp::Rate => "Failed to save rating",
            ShareOp::ListReceived => "Failed to load received shares",
            ShareOp::ListSent => "Failed to load sent shares",
            ShareOp::Ratings => "Failed to load ratings",
        }
    }
}

/// Errors from the share and rating workflows
#[derive(Error, Debug)]
pub enum ShareError {
    /// The operation requires a signed-in user
    #[error("Authentication required")]
    AuthRequired,

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind ("share", "playlist")
        entity: String,
        /// The id that was looked up
        id: String,
    },

    /// Sharing a playlist with yourself is rejected before any remote
    /// call
    #[error("Cannot share a playlist with yourself")]
    SelfShareForbidden,

    /// Rating outside the 1-5 range
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// A remote call failed; never retried
    #[error("{}: {message}", op.user_message())]
    Operation {
        /// The operation that failed
        op: ShareOp,
        /// Underlying cause
        message: String,
    },
}

impl ShareError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Wrap a backend failure for one operation
    pub fn operation(op: ShareOp, cause: impl std::fmt::Display) -> Self {
        Self::Operation {
            op,
            message: cause.to_string(),
        }
    }
}
