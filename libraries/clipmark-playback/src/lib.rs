//! Clipmark Playback
//!
//! Sequenced playback of a playlist's tags over an abstract embedded
//! video player.
//!
//! # Example
//!
//! ```rust,ignore
//! use clipmark_playback::{PlaylistSequencer, VideoPlayer};
//!
//! let mut sequencer = PlaylistSequencer::new(Box::new(player));
//! sequencer.load_playlist(playlist.tags.clone());
//! sequencer.start().await?;
//! sequencer.next().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod player;
pub mod sequencer;

pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use player::VideoPlayer;
pub use sequencer::PlaylistSequencer;
