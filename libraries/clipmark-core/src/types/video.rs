/// Video host and identity types
use crate::types::{UserId, VideoId};
use serde::{Deserialize, Serialize};

/// Summary of a hosted video, as returned by search/trending/details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Video identifier
    pub id: VideoId,

    /// Video title
    pub title: String,

    /// Channel name
    pub channel: String,

    /// Thumbnail URL, if any
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Formatted view count ("1.2M views"), where available
    #[serde(default)]
    pub views: Option<String>,

    /// Formatted duration ("4:13"), where available
    #[serde(default)]
    pub duration: Option<String>,

    /// Publication timestamp as reported by the host
    #[serde(default)]
    pub published_at: Option<String>,

    /// Video description
    #[serde(default)]
    pub description: Option<String>,
}

/// An authenticated user, as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Provider-assigned user id
    pub user_id: UserId,

    /// Account email
    pub email: String,
}

impl Principal {
    /// Create a principal
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}
