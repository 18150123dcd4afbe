//! Clipmark Sharing
//!
//! Cross-user playlist sharing and rating workflows over the document
//! store and identity seams.
//!
//! A share carries a point-in-time snapshot of the playlist. The
//! recipient accepts it into their own collection (fresh id, name
//! suffixed with `" (shared)"`) or declines; either way the share record
//! reaches a terminal state exactly once. Ratings are one record per
//! `(playlist, user)` pair, upserted by the workflow.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod service;

pub use error::{Result, ShareError, ShareOp};
pub use service::SharingService;
