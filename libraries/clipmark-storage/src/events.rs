//! Store change events
//!
//! Emitted synchronously by the in-memory stores so the UI layer can
//! re-render without polling.

use clipmark_core::types::{PlaylistId, TagId, VideoId};

/// A change in the tag or playlist stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The loaded video changed
    CurrentVideoChanged {
        /// New video, if any
        video_id: Option<VideoId>,
    },

    /// A tag was added, edited, or removed
    TagsChanged {
        /// The affected tag, when a single one changed
        tag_id: Option<TagId>,
    },

    /// A playlist was created, mutated, or deleted
    PlaylistsChanged {
        /// The affected playlist, when a single one changed
        playlist_id: Option<PlaylistId>,
    },

    /// The current playlist selection changed
    CurrentPlaylistChanged {
        /// New selection, if any
        playlist_id: Option<PlaylistId>,
    },
}
