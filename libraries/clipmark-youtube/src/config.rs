//! Client configuration

use serde::Deserialize;

use crate::error::{Result, YouTubeError};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_REGION: &str = "KR";

/// Configuration for the YouTube Data API client.
///
/// The API key is optional: without one, only the sample fallbacks
/// work and every network call fails with `CredentialMissing`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct YouTubeConfig {
    /// Data API key
    pub api_key: Option<String>,

    /// API base URL, overridable for tests
    pub base_url: String,

    /// Region used for trending queries
    pub region_code: String,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            region_code: DEFAULT_REGION.to_string(),
        }
    }
}

impl YouTubeConfig {
    /// Config with an API key and default endpoints
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Load configuration from `CLIPMARK_YOUTUBE_*` environment
    /// variables (`API_KEY`, `BASE_URL`, `REGION_CODE`)
    pub fn from_env() -> Result<Self> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("CLIPMARK_YOUTUBE"))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|e| YouTubeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_api() {
        let config = YouTubeConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.region_code, "KR");
    }

    #[test]
    fn with_api_key_keeps_defaults() {
        let config = YouTubeConfig::with_api_key("test-key");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.region_code, "KR");
    }
}
