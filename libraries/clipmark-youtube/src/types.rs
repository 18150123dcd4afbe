//! Data API response shapes
//!
//! Only the fields Clipmark reads are modeled; everything else in the
//! API responses is ignored.

use serde::Deserialize;

use clipmark_core::types::{VideoId, VideoSummary};

use crate::format::{format_duration, format_views};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItemId {
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoItem {
    pub id: String,
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Option<Statistics>,
    #[serde(default)]
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    pub title: String,
    pub channel_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub default: Option<Thumbnail>,
}

impl Thumbnails {
    /// Medium thumbnail with fallback to the default size
    pub fn best_url(&self) -> Option<String> {
        self.medium
            .as_ref()
            .or(self.default.as_ref())
            .map(|t| t.url.clone())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchItem {
    /// Map a search item to a summary; search responses carry no
    /// statistics or duration.
    pub fn into_summary(self) -> Option<VideoSummary> {
        let id = self.id.video_id?;
        Some(VideoSummary {
            id: VideoId::new(id),
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            thumbnail: self.snippet.thumbnails.best_url(),
            views: None,
            duration: None,
            published_at: self.snippet.published_at,
            description: self.snippet.description,
        })
    }
}

impl VideoItem {
    pub fn into_summary(self) -> VideoSummary {
        let views = self
            .statistics
            .and_then(|s| s.view_count)
            .unwrap_or_else(|| "0".to_string());
        let duration = self
            .content_details
            .and_then(|d| d.duration)
            .unwrap_or_default();
        VideoSummary {
            id: VideoId::new(self.id),
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            thumbnail: self.snippet.thumbnails.best_url(),
            views: Some(format_views(&views)),
            duration: Some(format_duration(&duration)),
            published_at: self.snippet.published_at,
            description: self.snippet.description,
        }
    }
}
