/// Playback error types
use thiserror::Error;

/// Result type alias for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Errors from the sequencer and the underlying player
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The embedded player reported a failure
    #[error("Player error: {0}")]
    Player(String),

    /// Core errors bubbling up from shared types
    #[error(transparent)]
    Core(#[from] clipmark_core::ClipmarkError),
}

impl PlaybackError {
    /// Create a player error
    pub fn player(msg: impl Into<String>) -> Self {
        Self::Player(msg.into())
    }
}
