//! Clipmark Storage
//!
//! Session-local stores plus in-memory backends for the document-store
//! and identity seams.
//!
//! - [`TagStore`] / [`PlaylistStore`]: the working set for one session,
//!   with synchronous change events for the presentation layer
//! - [`MemoryDocumentStore`]: a `DocumentStore` backend mirroring the
//!   production collection layout
//! - [`MemoryIdentityProvider`]: an `IdentityProvider` with the hosted
//!   service's error codes and redirect fallback

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod events;
pub mod memory;
pub mod playlists;
pub mod tags;

pub use auth::MemoryIdentityProvider;
pub use events::StoreEvent;
pub use memory::MemoryDocumentStore;
pub use playlists::PlaylistStore;
pub use tags::TagStore;
