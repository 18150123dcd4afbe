//! In-memory tag store
//!
//! Holds the tags for the current session, scoped to whichever video is
//! loaded. Insertion order is the storage order; display layers sort by
//! timestamp on the way out.

use crate::events::StoreEvent;
use clipmark_core::observe::{Observer, Observers};
use clipmark_core::parse::TagEntry;
use clipmark_core::types::{Tag, TagId, VideoId};

/// In-memory collection of timestamped tags
#[derive(Debug, Default)]
pub struct TagStore {
    current_video: Option<(VideoId, String)>,
    tags: Vec<Tag>,
    observers: Observers<StoreEvent>,
}

impl TagStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to store changes
    pub fn subscribe(&mut self, observer: Observer<StoreEvent>) {
        self.observers.subscribe(observer);
    }

    /// Set the currently loaded video
    pub fn set_current_video(&mut self, video_id: VideoId, title: impl Into<String>) {
        self.current_video = Some((video_id.clone(), title.into()));
        self.observers.notify(&StoreEvent::CurrentVideoChanged {
            video_id: Some(video_id),
        });
    }

    /// Clear the current video
    pub fn clear_current_video(&mut self) {
        self.current_video = None;
        self.observers
            .notify(&StoreEvent::CurrentVideoChanged { video_id: None });
    }

    /// The currently loaded video, if any
    pub fn current_video(&self) -> Option<&(VideoId, String)> {
        self.current_video.as_ref()
    }

    /// Create a tag on the current video.
    ///
    /// Returns `None` when no video is loaded (tags are always scoped to
    /// a video).
    pub fn add_tag(
        &mut self,
        title: impl Into<String>,
        memo: impl Into<String>,
        timestamp: u32,
        duration: u32,
    ) -> Option<&Tag> {
        let (video_id, video_title) = self.current_video.clone()?;
        let tag = Tag::new(video_id, video_title, title, memo, timestamp, duration);
        let tag_id = tag.id.clone();
        self.tags.push(tag);
        self.observers.notify(&StoreEvent::TagsChanged {
            tag_id: Some(tag_id),
        });
        self.tags.last()
    }

    /// Bulk-import parsed entries as tags on another video
    pub fn add_tags_from_video(
        &mut self,
        video_id: &VideoId,
        video_title: &str,
        entries: Vec<TagEntry>,
    ) -> usize {
        let added = entries.len();
        for entry in entries {
            self.tags.push(Tag::new(
                video_id.clone(),
                video_title,
                entry.title,
                entry.memo,
                entry.timestamp,
                0,
            ));
        }
        if added > 0 {
            self.observers
                .notify(&StoreEvent::TagsChanged { tag_id: None });
        }
        added
    }

    /// Edit a tag's title and memo. Returns false when the id is unknown.
    pub fn update_tag(&mut self, id: &TagId, title: &str, memo: &str) -> bool {
        let Some(tag) = self.tags.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        tag.edit(title, memo);
        self.observers.notify(&StoreEvent::TagsChanged {
            tag_id: Some(id.clone()),
        });
        true
    }

    /// Delete a tag. Playlists hold copies, so entries already placed in
    /// a playlist are unaffected. Returns the removed tag.
    pub fn delete_tag(&mut self, id: &TagId) -> Option<Tag> {
        let pos = self.tags.iter().position(|t| &t.id == id)?;
        let tag = self.tags.remove(pos);
        self.observers.notify(&StoreEvent::TagsChanged {
            tag_id: Some(id.clone()),
        });
        Some(tag)
    }

    /// Look up a tag by id
    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    /// All tags, in insertion order
    pub fn all(&self) -> &[Tag] {
        &self.tags
    }

    /// Replace the whole collection (e.g. after a remote sync)
    pub fn replace_all(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
        self.observers
            .notify(&StoreEvent::TagsChanged { tag_id: None });
    }

    /// Tags for one video, sorted by timestamp for display.
    ///
    /// The stored order is untouched.
    pub fn tags_for_video(&self, video_id: &VideoId) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self
            .tags
            .iter()
            .filter(|t| &t.video_id == video_id)
            .collect();
        tags.sort_by_key(|t| t.timestamp);
        tags
    }

    /// Number of tags in the store
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when no tags exist
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
