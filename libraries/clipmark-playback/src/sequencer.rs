//! Playlist playback sequencer
//!
//! Walks a playlist's tags in order, driving the embedded player: load
//! the tag's video (skipped when it is already loaded), seek to the tag
//! timestamp, play. Index operations outside the playlist are ignored
//! rather than errors, so stale UI events cannot wedge playback.

use tracing::debug;

use clipmark_core::observe::{Observer, Observers};
use clipmark_core::types::Tag;

use crate::error::Result;
use crate::events::PlaybackEvent;
use crate::player::VideoPlayer;

/// Sequences playback of one playlist over a [`VideoPlayer`].
pub struct PlaylistSequencer {
    player: Box<dyn VideoPlayer>,
    items: Vec<Tag>,
    current_index: usize,
    playing: bool,
    observers: Observers<PlaybackEvent>,
}

impl PlaylistSequencer {
    /// Create a sequencer with no playlist loaded
    pub fn new(player: Box<dyn VideoPlayer>) -> Self {
        Self {
            player,
            items: Vec::new(),
            current_index: 0,
            playing: false,
            observers: Observers::new(),
        }
    }

    /// Subscribe to playback events
    pub fn subscribe(&mut self, observer: Observer<PlaybackEvent>) {
        self.observers.subscribe(observer);
    }

    /// Load a playlist's tags, resetting position without starting
    /// playback
    pub fn load_playlist(&mut self, items: Vec<Tag>) {
        self.items = items;
        self.current_index = 0;
        self.playing = false;
    }

    /// Jump to a playlist item and cue it on the player.
    ///
    /// Out-of-range indices (including any index on an empty playlist)
    /// are ignored. The playing flag is untouched; only `start` and
    /// `stop` change it.
    pub async fn jump_to_item(&mut self, index: usize) -> Result<()> {
        let Some(tag) = self.items.get(index).cloned() else {
            debug!(index, len = self.items.len(), "ignoring jump outside playlist");
            return Ok(());
        };

        // Reload only when the item lives on a different video
        if self.player.current_video() != Some(&tag.video_id) {
            self.player.load(&tag.video_id).await?;
        }
        self.player.seek(tag.timestamp).await?;
        self.player.play().await?;

        self.current_index = index;
        self.observers.notify(&PlaybackEvent::ItemStarted {
            index,
            tag_id: tag.id,
        });
        Ok(())
    }

    /// Start playback from the first item. Ignored on an empty
    /// playlist.
    pub async fn start(&mut self) -> Result<()> {
        if self.items.is_empty() {
            debug!("ignoring start without a playlist");
            return Ok(());
        }
        self.playing = true;
        self.jump_to_item(0).await
    }

    /// Stop playback, keeping the current position
    pub async fn stop(&mut self) -> Result<()> {
        if self.playing {
            self.player.pause().await?;
            self.playing = false;
            self.observers.notify(&PlaybackEvent::Stopped);
        }
        Ok(())
    }

    /// Advance to the next item.
    ///
    /// After the last item, playback stops and the position resets to
    /// the start, ready for a fresh `start`.
    pub async fn next(&mut self) -> Result<()> {
        if self.items.is_empty() {
            debug!("ignoring next without a playlist");
            return Ok(());
        }
        if self.current_index + 1 < self.items.len() {
            return self.jump_to_item(self.current_index + 1).await;
        }
        self.stop().await?;
        self.current_index = 0;
        self.observers.notify(&PlaybackEvent::PlaylistFinished);
        Ok(())
    }

    /// Step back to the previous item. Ignored on the first item.
    pub async fn previous(&mut self) -> Result<()> {
        if self.current_index == 0 {
            debug!("ignoring previous at playlist start");
            return Ok(());
        }
        self.jump_to_item(self.current_index - 1).await
    }

    /// Position of the current item
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The current item, if a playlist is loaded
    pub fn current_item(&self) -> Option<&Tag> {
        self.items.get(self.current_index)
    }

    /// True while an item is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of items in the loaded playlist
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no playlist (or an empty one) is loaded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl std::fmt::Debug for PlaylistSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistSequencer")
            .field("items", &self.items.len())
            .field("current_index", &self.current_index)
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}
