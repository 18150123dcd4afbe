//! Video URLs and share links
//!
//! A share link is a plain data carrier: the playlist (or a video plus
//! its tags) is JSON-serialized into a query parameter. There is no
//! signature or expiry; anyone holding the link can reconstruct the view.

use crate::error::{ClipmarkError, Result};
use crate::types::{Tag, VideoId};
use serde::{Deserialize, Serialize};
use url::Url;

/// Payload carried by a share link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SharedLink {
    /// A whole playlist (`?playlist=<json>`)
    Playlist(SharedPlaylistPayload),

    /// One video with its tags (`?v=<id>&tags=<json>`)
    VideoTags {
        /// The video the tags belong to
        video_id: VideoId,
        /// The tag set
        tags: Vec<Tag>,
    },
}

/// The denormalized playlist data placed in a `?playlist=` link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPlaylistPayload {
    /// Playlist name
    pub name: String,

    /// Tag copies
    pub tags: Vec<Tag>,
}

/// Extract the video id from a YouTube-style URL.
///
/// Recognizes `watch?v=`, `youtu.be/`, and `/embed/` forms. Returns
/// `None` for anything else (malformed URLs are a validation concern of
/// the caller).
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?.trim_start_matches("www.");

    match host {
        "youtu.be" => {
            let id = url.path_segments()?.next()?;
            non_empty_id(id)
        }
        "youtube.com" | "m.youtube.com" => {
            if url.path() == "/watch" {
                let id = url
                    .query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned())?;
                non_empty_id(&id)
            } else if let Some(rest) = url.path().strip_prefix("/embed/") {
                non_empty_id(rest.split('/').next().unwrap_or(""))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn non_empty_id(id: &str) -> Option<VideoId> {
    if id.is_empty() {
        None
    } else {
        Some(VideoId::new(id))
    }
}

/// Build a `?playlist=<json>` share link
pub fn playlist_share_url(base: &Url, payload: &SharedPlaylistPayload) -> Result<Url> {
    let json = serde_json::to_string(payload)?;
    let mut url = base.join("share").map_err(|e| ClipmarkError::Other(e.to_string()))?;
    url.query_pairs_mut().append_pair("playlist", &json);
    Ok(url)
}

/// Build a `?v=<id>&tags=<json>` share link
pub fn video_tags_share_url(base: &Url, video_id: &VideoId, tags: &[Tag]) -> Result<Url> {
    let json = serde_json::to_string(tags)?;
    let mut url = base.join("share").map_err(|e| ClipmarkError::Other(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("v", video_id.as_str())
        .append_pair("tags", &json);
    Ok(url)
}

/// Decode a share link back into its payload.
///
/// Returns `None` when the URL carries neither share shape or the JSON
/// does not decode; a broken link renders as an empty share view rather
/// than an error.
pub fn parse_share_url(url: &Url) -> Option<SharedLink> {
    let mut playlist = None;
    let mut video = None;
    let mut tags = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "playlist" => playlist = Some(value.into_owned()),
            "v" => video = Some(value.into_owned()),
            "tags" => tags = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(json) = playlist {
        let payload: SharedPlaylistPayload = serde_json::from_str(&json).ok()?;
        return Some(SharedLink::Playlist(payload));
    }

    let (video, json) = (video?, tags?);
    let tags: Vec<Tag> = serde_json::from_str(&json).ok()?;
    Some(SharedLink::VideoTags {
        video_id: VideoId::new(video),
        tags,
    })
}

/// Format a second offset as `M:SS` or `H:MM:SS` for display
pub fn format_timestamp(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(title: &str, timestamp: u32) -> Tag {
        Tag::new(VideoId::new("dQw4w9WgXcQ"), "Video", title, "", timestamp, 10)
    }

    #[test]
    fn extracts_watch_and_short_and_embed_ids() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=30",
        ] {
            assert_eq!(
                extract_video_id(url),
                Some(VideoId::new("dQw4w9WgXcQ")),
                "failed for {url}"
            );
        }
    }

    #[test]
    fn rejects_non_video_urls() {
        assert_eq!(extract_video_id("https://example.com/watch?v=x"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/feed"), None);
        assert_eq!(extract_video_id("not a url"), None);
    }

    #[test]
    fn playlist_link_roundtrips() {
        let base = Url::parse("https://clipmark.example/").unwrap();
        let payload = SharedPlaylistPayload {
            name: "Highlights".to_string(),
            tags: vec![tag("a", 30), tag("b", 90)],
        };

        let url = playlist_share_url(&base, &payload).unwrap();
        let parsed = parse_share_url(&url).unwrap();
        assert_eq!(parsed, SharedLink::Playlist(payload));
    }

    #[test]
    fn video_tags_link_roundtrips() {
        let base = Url::parse("https://clipmark.example/").unwrap();
        let tags = vec![tag("a", 30)];

        let url = video_tags_share_url(&base, &VideoId::new("dQw4w9WgXcQ"), &tags).unwrap();
        let parsed = parse_share_url(&url).unwrap();
        assert_eq!(
            parsed,
            SharedLink::VideoTags {
                video_id: VideoId::new("dQw4w9WgXcQ"),
                tags,
            }
        );
    }

    #[test]
    fn broken_links_parse_to_none() {
        let url = Url::parse("https://clipmark.example/share?playlist=%7Bnot-json").unwrap();
        assert_eq!(parse_share_url(&url), None);

        let url = Url::parse("https://clipmark.example/share?v=abc").unwrap();
        assert_eq!(parse_share_url(&url), None);
    }

    #[test]
    fn formats_timestamps() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(90), "1:30");
        assert_eq!(format_timestamp(3725), "1:02:05");
    }
}
