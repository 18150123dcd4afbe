//! Clipmark Core
//!
//! Shared types, collaborator traits, and error handling for Clipmark,
//! a video highlight-tagging and playlist-curation toolkit.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Tag`, `Playlist`, `ShareRecord`, `RatingRecord`, etc.
//! - **Collaborator Traits**: `DocumentStore`, `IdentityProvider`
//! - **Error Handling**: Unified `ClipmarkError` and `Result` types
//! - **Utilities**: bulk tag-entry parsing, share links, change observers
//!
//! # Example
//!
//! ```rust
//! use clipmark_core::types::{Playlist, Tag, VideoId};
//!
//! let tag = Tag::new(VideoId::new("dQw4w9WgXcQ"), "Some video", "intro", "", 30, 10);
//! let playlist = Playlist::new("Highlights", vec![tag]);
//! assert_eq!(playlist.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod link;
pub mod observe;
pub mod parse;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ClipmarkError, Result};
pub use observe::Observers;
pub use traits::{AuthStateCallback, DocumentStore, IdentityProvider};

// Export all types
pub use types::{
    Playlist, PlaylistId, PlaylistOrigin, PlaylistSnapshot, Principal, RatingRecord, RatingSummary,
    ShareId, ShareRecord, ShareStatus, Tag, TagId, UserId, VideoId, VideoSummary,
};
