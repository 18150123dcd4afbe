/// Cross-user share records
use crate::types::{PlaylistId, PlaylistSnapshot, ShareId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a share record.
///
/// `Pending` transitions to `Accepted` or `Declined` exactly once; both
/// are terminal. A record may also be deleted outright by the sharer,
/// which is removal rather than a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareStatus {
    /// Awaiting the recipient's decision
    Pending,
    /// Recipient added the playlist to their collection
    Accepted,
    /// Recipient turned the share down
    Declined,
}

impl ShareStatus {
    /// Convert status to string for document storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareStatus::Pending => "pending",
            ShareStatus::Accepted => "accepted",
            ShareStatus::Declined => "declined",
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ShareStatus::Pending),
            "accepted" => Some(ShareStatus::Accepted),
            "declined" => Some(ShareStatus::Declined),
            _ => None,
        }
    }

    /// True for states that never transition again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ShareStatus::Pending)
    }
}

/// A playlist share between two users, stored in the global collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecord {
    /// Unique share identifier
    pub id: ShareId,

    /// The owner's playlist id
    pub playlist_id: PlaylistId,

    /// Playlist name at share time (denormalized for listing)
    pub playlist_name: String,

    /// Sharer's email
    pub owner_email: String,

    /// Sharer's user id
    pub owner_id: UserId,

    /// Recipient email, stored lowercased
    pub shared_with_email: String,

    /// Server timestamp; `None` until the store has assigned it
    #[serde(default)]
    pub shared_at: Option<DateTime<Utc>>,

    /// Lifecycle state
    pub status: ShareStatus,

    /// Point-in-time copy of the shared playlist
    pub playlist_data: PlaylistSnapshot,
}

impl ShareRecord {
    /// Create a new pending share.
    ///
    /// `shared_at` is left unset; the document store assigns the server
    /// timestamp on creation.
    pub fn pending(
        playlist_id: PlaylistId,
        owner_email: impl Into<String>,
        owner_id: UserId,
        recipient_email: impl Into<String>,
        playlist_data: PlaylistSnapshot,
    ) -> Self {
        Self {
            id: ShareId::generate(),
            playlist_id,
            playlist_name: playlist_data.name.clone(),
            owner_email: owner_email.into(),
            owner_id,
            shared_with_email: recipient_email.into().to_lowercase(),
            shared_at: None,
            status: ShareStatus::Pending,
            playlist_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Playlist, Tag, VideoId};

    #[test]
    fn status_string_conversion() {
        assert_eq!(ShareStatus::Pending.as_str(), "pending");
        assert_eq!(ShareStatus::parse("accepted"), Some(ShareStatus::Accepted));
        assert_eq!(ShareStatus::parse("declined"), Some(ShareStatus::Declined));
        assert_eq!(ShareStatus::parse("bogus"), None);
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!ShareStatus::Pending.is_terminal());
        assert!(ShareStatus::Accepted.is_terminal());
        assert!(ShareStatus::Declined.is_terminal());
    }

    #[test]
    fn pending_share_lowercases_recipient() {
        let playlist = Playlist::new(
            "Highlights",
            vec![Tag::new(VideoId::new("v"), "V", "t", "", 0, 10)],
        );
        let record = ShareRecord::pending(
            playlist.id.clone(),
            "a@x.com",
            UserId::new("u1"),
            "B@X.Com",
            playlist.snapshot(),
        );
        assert_eq!(record.shared_with_email, "b@x.com");
        assert_eq!(record.status, ShareStatus::Pending);
        assert!(record.shared_at.is_none());
        assert_eq!(record.playlist_name, "Highlights");
    }
}
