//! Sequencer events

use clipmark_core::types::TagId;

/// What the sequencer is doing, announced to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A playlist item started playing
    ItemStarted {
        /// Position in the playlist
        index: usize,
        /// The tag being played
        tag_id: TagId,
    },

    /// Playback stopped (explicitly, or after the last item)
    Stopped,

    /// The last item finished and the sequencer reset to the start
    PlaylistFinished,
}
