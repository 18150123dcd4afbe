/// Playlist domain types
use crate::types::{PlaylistId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name suffix applied to playlists received through a share
pub const SHARED_NAME_SUFFIX: &str = " (shared)";

/// Where a playlist came from.
///
/// Modeled as a tagged variant instead of a pair of optional fields so
/// the owned and received cases are exhaustively checkable. On the wire
/// an owned playlist carries no extra fields; a received one carries
/// `sharedFrom` and `originalPlaylistId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaylistOrigin {
    /// Received from another user via the share workflow
    #[serde(rename_all = "camelCase")]
    Received {
        /// Email of the user who shared it
        shared_from: String,
        /// The owner's playlist id, kept for rating correlation
        original_playlist_id: PlaylistId,
    },
    /// Created locally by the current user
    Owned {},
}

impl PlaylistOrigin {
    /// True for playlists received through a share
    pub fn is_received(&self) -> bool {
        matches!(self, PlaylistOrigin::Received { .. })
    }
}

impl Default for PlaylistOrigin {
    fn default() -> Self {
        PlaylistOrigin::Owned {}
    }
}

/// A named, rated, ordered sequence of tag copies.
///
/// `tags` preserves insertion order; display layers sort by timestamp
/// without touching the stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name (non-empty)
    pub name: String,

    /// Tag copies, in insertion order
    pub tags: Vec<Tag>,

    /// Single-owner display rating, 0-5 where 0 means unrated
    #[serde(default)]
    pub rating: u8,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Owned or received provenance
    #[serde(flatten, default)]
    pub origin: PlaylistOrigin,
}

impl Playlist {
    /// Create a new locally-owned playlist from a tag selection
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            tags,
            rating: 0,
            created_at: Utc::now(),
            origin: PlaylistOrigin::Owned {},
        }
    }

    /// Materialize a playlist from a share snapshot.
    ///
    /// The local copy gets a fresh id and the `" (shared)"` name marker;
    /// the snapshot's tags and creation time are kept as-is.
    pub fn from_snapshot(
        snapshot: PlaylistSnapshot,
        shared_from: impl Into<String>,
        original_playlist_id: PlaylistId,
    ) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: format!("{}{}", snapshot.name, SHARED_NAME_SUFFIX),
            tags: snapshot.tags,
            rating: 0,
            created_at: snapshot.created_at,
            origin: PlaylistOrigin::Received {
                shared_from: shared_from.into(),
                original_playlist_id,
            },
        }
    }

    /// Take a point-in-time copy for embedding in a share record
    pub fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            name: self.name.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at,
        }
    }

    /// The owner's playlist id used for rating correlation, if received
    pub fn original_playlist_id(&self) -> Option<&PlaylistId> {
        match &self.origin {
            PlaylistOrigin::Received {
                original_playlist_id,
                ..
            } => Some(original_playlist_id),
            PlaylistOrigin::Owned {} => None,
        }
    }

    /// Number of tags in the playlist
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the playlist holds no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Point-in-time copy of a playlist embedded in a share record.
///
/// Later edits to the owner's playlist never propagate into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnapshot {
    /// Name at share time
    pub name: String,

    /// Tags at share time
    pub tags: Vec<Tag>,

    /// Creation time of the source playlist
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VideoId;

    fn tag(title: &str, timestamp: u32) -> Tag {
        Tag::new(VideoId::new("vid"), "Video", title, "", timestamp, 10)
    }

    #[test]
    fn owned_playlist_serializes_without_share_fields() {
        let playlist = Playlist::new("Highlights", vec![tag("a", 30)]);
        let json = serde_json::to_value(&playlist).unwrap();
        assert!(json.get("sharedFrom").is_none());
        assert!(json.get("originalPlaylistId").is_none());
    }

    #[test]
    fn received_playlist_roundtrips_origin() {
        let snapshot = Playlist::new("Highlights", vec![tag("a", 30)]).snapshot();
        let received =
            Playlist::from_snapshot(snapshot, "a@x.com", PlaylistId::new("p1"));
        assert_eq!(received.name, "Highlights (shared)");
        assert!(received.origin.is_received());

        let json = serde_json::to_string(&received).unwrap();
        let back: Playlist = serde_json::from_str(&json).unwrap();
        assert_eq!(back.origin, received.origin);
        assert_eq!(back.original_playlist_id(), Some(&PlaylistId::new("p1")));
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut playlist = Playlist::new("Highlights", vec![tag("a", 30)]);
        let snapshot = playlist.snapshot();
        playlist.name = "Renamed".to_string();
        playlist.tags.clear();
        assert_eq!(snapshot.name, "Highlights");
        assert_eq!(snapshot.tags.len(), 1);
    }
}
