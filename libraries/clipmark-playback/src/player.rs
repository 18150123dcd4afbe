//! Video player seam
//!
//! The sequencer drives an embedded player through this trait. The
//! production implementation wraps the iframe player API; tests use a
//! scripted double.

use async_trait::async_trait;
use clipmark_core::types::VideoId;

use crate::error::Result;

/// An embedded video player under the sequencer's control.
///
/// `load` resolves once the player is ready to accept `seek` and `play`
/// for the new video; callers never need their own settle delay.
#[async_trait]
pub trait VideoPlayer: Send {
    /// Load a video and wait until the player is ready for it
    async fn load(&mut self, video_id: &VideoId) -> Result<()>;

    /// Seek to an absolute position in seconds
    async fn seek(&mut self, seconds: u32) -> Result<()>;

    /// Start or resume playback
    async fn play(&mut self) -> Result<()>;

    /// Pause playback
    async fn pause(&mut self) -> Result<()>;

    /// The currently loaded video, if any
    fn current_video(&self) -> Option<&VideoId>;
}
