//! In-memory playlist store
//!
//! Playlists hold copies of tags, so edits and deletions in the tag
//! store never reach back into a playlist. Tag order inside a playlist
//! is insertion order.

use crate::events::StoreEvent;
use clipmark_core::error::{ClipmarkError, Result};
use clipmark_core::observe::{Observer, Observers};
use clipmark_core::types::{Playlist, PlaylistId, Tag};

/// In-memory collection of playlists plus the current selection
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
    current: Option<PlaylistId>,
    observers: Observers<StoreEvent>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to store changes
    pub fn subscribe(&mut self, observer: Observer<StoreEvent>) {
        self.observers.subscribe(observer);
    }

    /// Create a playlist from a name and tag selection.
    ///
    /// Both must be non-empty; this is checked locally before anything
    /// else happens.
    pub fn create(&mut self, name: &str, tags: Vec<Tag>) -> Result<&Playlist> {
        if name.trim().is_empty() {
            return Err(ClipmarkError::validation("playlist name must not be empty"));
        }
        if tags.is_empty() {
            return Err(ClipmarkError::validation(
                "a playlist needs at least one tag",
            ));
        }

        let playlist = Playlist::new(name.trim(), tags);
        let id = playlist.id.clone();
        self.playlists.push(playlist);
        self.notify_changed(Some(id));
        Ok(self.playlists.last().expect("just pushed"))
    }

    /// Insert a playlist built elsewhere (e.g. accepted from a share)
    pub fn insert(&mut self, playlist: Playlist) -> &Playlist {
        let id = playlist.id.clone();
        self.playlists.push(playlist);
        self.notify_changed(Some(id));
        self.playlists.last().expect("just pushed")
    }

    /// Append tag copies to a playlist
    pub fn add_tags(&mut self, id: &PlaylistId, tags: Vec<Tag>) -> Result<()> {
        let playlist = self.get_mut(id)?;
        playlist.tags.extend(tags);
        self.notify_changed(Some(id.clone()));
        Ok(())
    }

    /// Remove the tag at `index` from a playlist.
    ///
    /// Out-of-range indices are a no-op, matching the sequencer's
    /// silent-failure policy for index operations.
    pub fn remove_tag(&mut self, id: &PlaylistId, index: usize) -> Result<()> {
        let playlist = self.get_mut(id)?;
        if index < playlist.tags.len() {
            playlist.tags.remove(index);
            self.notify_changed(Some(id.clone()));
        }
        Ok(())
    }

    /// Rename a playlist
    pub fn rename(&mut self, id: &PlaylistId, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ClipmarkError::validation("playlist name must not be empty"));
        }
        let playlist = self.get_mut(id)?;
        playlist.name = name.trim().to_string();
        self.notify_changed(Some(id.clone()));
        Ok(())
    }

    /// Set the display rating (0-5, 0 clears it)
    pub fn set_rating(&mut self, id: &PlaylistId, rating: u8) -> Result<()> {
        if rating > 5 {
            return Err(ClipmarkError::validation("rating must be 0-5"));
        }
        let playlist = self.get_mut(id)?;
        playlist.rating = rating;
        self.notify_changed(Some(id.clone()));
        Ok(())
    }

    /// Delete a playlist. Clears the current selection when it pointed
    /// at the deleted playlist.
    pub fn delete(&mut self, id: &PlaylistId) -> Result<Playlist> {
        let pos = self
            .playlists
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ClipmarkError::not_found("playlist", id.as_str()))?;
        let playlist = self.playlists.remove(pos);

        if self.current.as_ref() == Some(id) {
            self.current = None;
            self.observers
                .notify(&StoreEvent::CurrentPlaylistChanged { playlist_id: None });
        }
        self.notify_changed(Some(id.clone()));
        Ok(playlist)
    }

    /// Select a playlist (or clear the selection with `None`)
    pub fn set_current(&mut self, id: Option<PlaylistId>) -> Result<()> {
        if let Some(id) = &id {
            self.get(id)?;
        }
        self.current = id.clone();
        self.observers
            .notify(&StoreEvent::CurrentPlaylistChanged { playlist_id: id });
        Ok(())
    }

    /// The currently selected playlist, if any
    pub fn current(&self) -> Option<&Playlist> {
        let id = self.current.as_ref()?;
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// Look up a playlist by id
    pub fn get(&self, id: &PlaylistId) -> Result<&Playlist> {
        self.playlists
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| ClipmarkError::not_found("playlist", id.as_str()))
    }

    /// Find a received playlist by the owner's original playlist id.
    ///
    /// Used to make accepting the same share twice idempotent.
    pub fn find_by_original(&self, original: &PlaylistId) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|p| p.original_playlist_id() == Some(original))
    }

    /// All playlists, in creation order
    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Replace the whole collection (e.g. after a remote sync)
    pub fn replace_all(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
        if let Some(current) = self.current.clone() {
            if !self.playlists.iter().any(|p| p.id == current) {
                self.current = None;
            }
        }
        self.notify_changed(None);
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// True when no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn get_mut(&mut self, id: &PlaylistId) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| ClipmarkError::not_found("playlist", id.as_str()))
    }

    fn notify_changed(&self, playlist_id: Option<PlaylistId>) {
        self.observers
            .notify(&StoreEvent::PlaylistsChanged { playlist_id });
    }
}
