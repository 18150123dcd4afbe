//! Static sample videos
//!
//! Shown when no API key is configured, so browsing still has content.

use clipmark_core::types::{VideoId, VideoSummary};

fn sample(id: &str, title: &str, channel: &str, views: &str, duration: &str) -> VideoSummary {
    VideoSummary {
        id: VideoId::new(id),
        title: title.to_string(),
        channel: channel.to_string(),
        thumbnail: Some(format!("https://img.youtube.com/vi/{id}/mqdefault.jpg")),
        views: Some(views.to_string()),
        duration: Some(duration.to_string()),
        published_at: None,
        description: None,
    }
}

/// The built-in sample set
pub fn sample_videos() -> Vec<VideoSummary> {
    vec![
        sample(
            "dQw4w9WgXcQ",
            "Rick Astley - Never Gonna Give You Up (Official Video)",
            "RickAstleyVEVO",
            "1.4B views",
            "3:33",
        ),
        sample("jNQXAC9IVRw", "Me at the zoo", "jawed", "245M views", "0:19"),
        sample(
            "kJQP7kiw5Fk",
            "Luis Fonsi - Despacito ft. Daddy Yankee",
            "LuisFonsiVEVO",
            "8.2B views",
            "4:42",
        ),
        sample(
            "9bZkp7q19f0",
            "PSY - GANGNAM STYLE (강남스타일) Official Music Video",
            "officialpsy",
            "5.1B views",
            "4:13",
        ),
        sample(
            "OPf0YbXqDm0",
            "Mark Ronson - Uptown Funk ft. Bruno Mars",
            "MarkRonsonVEVO",
            "5.3B views",
            "4:30",
        ),
    ]
}
