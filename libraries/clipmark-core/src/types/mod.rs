//! Domain types shared across the Clipmark crates

mod ids;
mod playlist;
mod rating;
mod share;
mod tag;
mod video;

pub use ids::{PlaylistId, RatingId, ShareId, TagId, UserId, VideoId};
pub use playlist::{Playlist, PlaylistOrigin, PlaylistSnapshot, SHARED_NAME_SUFFIX};
pub use rating::{RatingRecord, RatingSummary};
pub use share::{ShareRecord, ShareStatus};
pub use tag::{Tag, DEFAULT_TAG_DURATION};
pub use video::{Principal, VideoSummary};
