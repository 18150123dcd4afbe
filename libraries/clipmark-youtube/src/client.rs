//! YouTube Data API v3 client

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use clipmark_core::types::{VideoId, VideoSummary};

use crate::config::YouTubeConfig;
use crate::error::{Result, YouTubeError};
use crate::samples::sample_videos;
use crate::types::{ApiErrorResponse, SearchResponse, VideosResponse};

/// Client for the YouTube Data API v3.
///
/// # Example
///
/// ```ignore
/// use clipmark_youtube::{YouTubeClient, YouTubeConfig};
///
/// let client = YouTubeClient::new(YouTubeConfig::from_env()?)?;
/// let trending = client.trending_or_samples(10, None).await;
/// let results = client.search("lofi hip hop", 10).await?;
/// ```
pub struct YouTubeClient {
    http: Client,
    config: YouTubeConfig,
}

impl YouTubeClient {
    /// Create a client with the given configuration
    pub fn new(config: YouTubeConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Clipmark/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// True when an API key is configured
    pub fn has_credentials(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or(YouTubeError::CredentialMissing)
    }

    /// Search for videos by query
    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<VideoSummary>> {
        let key = self.key()?;
        let url = format!("{}/search", self.config.base_url);
        debug!(query, max_results, "searching videos");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", &max_results.to_string()),
                ("key", key),
            ])
            .send()
            .await?;
        let body: SearchResponse = Self::read_json(response).await?;
        Ok(body
            .items
            .into_iter()
            .filter_map(crate::types::SearchItem::into_summary)
            .collect())
    }

    /// Trending videos for a region; falls back to the configured
    /// region when `region` is `None`
    pub async fn trending(
        &self,
        max_results: u32,
        region: Option<&str>,
    ) -> Result<Vec<VideoSummary>> {
        let key = self.key()?;
        let region = region.unwrap_or(&self.config.region_code);
        let url = format!("{}/videos", self.config.base_url);
        debug!(region, max_results, "loading trending videos");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("chart", "mostPopular"),
                ("regionCode", region),
                ("maxResults", &max_results.to_string()),
                ("key", key),
            ])
            .send()
            .await?;
        let body: VideosResponse = Self::read_json(response).await?;
        Ok(body
            .items
            .into_iter()
            .map(crate::types::VideoItem::into_summary)
            .collect())
    }

    /// Full details for one video
    pub async fn video_details(&self, video_id: &VideoId) -> Result<VideoSummary> {
        let key = self.key()?;
        let url = format!("{}/videos", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("id", video_id.as_str()),
                ("key", key),
            ])
            .send()
            .await?;
        let body: VideosResponse = Self::read_json(response).await?;
        body.items
            .into_iter()
            .next()
            .map(crate::types::VideoItem::into_summary)
            .ok_or_else(|| YouTubeError::VideoNotFound(video_id.as_str().to_string()))
    }

    /// Trending videos, or the sample set when no API key is configured
    pub async fn trending_or_samples(
        &self,
        max_results: u32,
        region: Option<&str>,
    ) -> Vec<VideoSummary> {
        match self.trending(max_results, region).await {
            Ok(videos) => videos,
            Err(YouTubeError::CredentialMissing) => {
                warn!("no API key configured, serving sample videos");
                sample_videos()
            }
            Err(e) => {
                warn!(error = %e, "trending request failed, serving sample videos");
                sample_videos()
            }
        }
    }

    /// Search results, or the sample set when no API key is configured
    pub async fn search_or_samples(&self, query: &str, max_results: u32) -> Vec<VideoSummary> {
        match self.search(query, max_results).await {
            Ok(videos) => videos,
            Err(YouTubeError::CredentialMissing) => {
                warn!("no API key configured, serving sample videos");
                sample_videos()
            }
            Err(e) => {
                warn!(error = %e, "search request failed, serving sample videos");
                sample_videos()
            }
        }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(|e| YouTubeError::Parse(e.to_string()))
        } else {
            let message = response
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "request failed".to_string());
            Err(YouTubeError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.config.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish_non_exhaustive()
    }
}
