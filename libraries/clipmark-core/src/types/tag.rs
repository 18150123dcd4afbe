/// Timestamped highlight tags
use crate::types::{TagId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default highlight duration in seconds when none is given
pub const DEFAULT_TAG_DURATION: u32 = 10;

/// A timestamped annotation on a video.
///
/// Tags are scoped to the video they were created on. Playlists hold
/// *copies* of tags; editing or deleting a source tag never changes the
/// entries already placed in a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique tag identifier
    pub id: TagId,

    /// Video this tag points into
    pub video_id: VideoId,

    /// Title of that video, captured at tag time
    pub video_title: String,

    /// Short label for the highlight
    pub title: String,

    /// Free-text memo
    #[serde(default)]
    pub memo: String,

    /// Offset into the video, in whole seconds
    pub timestamp: u32,

    /// Highlight length in seconds (always positive)
    pub duration: u32,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag on the given video.
    ///
    /// A zero `duration` falls back to [`DEFAULT_TAG_DURATION`].
    pub fn new(
        video_id: VideoId,
        video_title: impl Into<String>,
        title: impl Into<String>,
        memo: impl Into<String>,
        timestamp: u32,
        duration: u32,
    ) -> Self {
        Self {
            id: TagId::generate(),
            video_id,
            video_title: video_title.into(),
            title: title.into(),
            memo: memo.into(),
            timestamp,
            duration: if duration == 0 {
                DEFAULT_TAG_DURATION
            } else {
                duration
            },
            created_at: Utc::now(),
        }
    }

    /// Apply an edit. Only `title` and `memo` are mutable after creation.
    pub fn edit(&mut self, title: impl Into<String>, memo: impl Into<String>) {
        self.title = title.into();
        self.memo = memo.into();
    }
}
