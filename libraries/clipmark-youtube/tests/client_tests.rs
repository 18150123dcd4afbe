//! Client tests against a mock API server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clipmark_core::types::VideoId;
use clipmark_youtube::{YouTubeClient, YouTubeConfig, YouTubeError};

fn client_for(server: &MockServer) -> YouTubeClient {
    let config = YouTubeConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        region_code: "KR".to_string(),
    };
    YouTubeClient::new(config).expect("client")
}

fn video_item(id: &str, title: &str, views: &str, duration: &str) -> serde_json::Value {
    json!({
        "id": id,
        "snippet": {
            "title": title,
            "channelTitle": "A channel",
            "publishedAt": "2024-01-01T00:00:00Z",
            "thumbnails": {"medium": {"url": format!("https://img/{id}.jpg")}}
        },
        "statistics": {"viewCount": views},
        "contentDetails": {"duration": duration}
    })
}

#[tokio::test]
async fn trending_maps_and_formats_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("chart", "mostPopular"))
        .and(query_param("regionCode", "KR"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                video_item("abc", "First", "1234567", "PT4M13S"),
                video_item("def", "Second", "999", "PT1H2M5S"),
            ]
        })))
        .mount(&server)
        .await;

    let videos = client_for(&server).trending(10, None).await.unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].title, "First");
    assert_eq!(videos[0].views.as_deref(), Some("1.2M views"));
    assert_eq!(videos[0].duration.as_deref(), Some("4:13"));
    assert_eq!(videos[1].views.as_deref(), Some("999 views"));
    assert_eq!(videos[1].duration.as_deref(), Some("1:02:05"));
}

#[tokio::test]
async fn search_keeps_only_video_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "lofi"))
        .and(query_param("type", "video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": {"videoId": "abc"},
                    "snippet": {
                        "title": "A video",
                        "channelTitle": "A channel",
                        "description": "desc",
                        "thumbnails": {"default": {"url": "https://img/d.jpg"}}
                    }
                },
                {
                    "id": {"kind": "youtube#channel"},
                    "snippet": {"title": "A channel result", "channelTitle": "x"}
                }
            ]
        })))
        .mount(&server)
        .await;

    let videos = client_for(&server).search("lofi", 10).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, VideoId::new("abc"));
    // Search responses carry no statistics
    assert!(videos[0].views.is_none());
    assert_eq!(videos[0].thumbnail.as_deref(), Some("https://img/d.jpg"));
}

#[tokio::test]
async fn video_details_reports_missing_videos() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .video_details(&VideoId::new("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, YouTubeError::VideoNotFound(id) if id == "missing"));
}

#[tokio::test]
async fn api_errors_surface_the_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"message": "quota exceeded"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search("lofi", 10).await.unwrap_err();
    match err {
        YouTubeError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let server = MockServer::start().await;
    // No mocks mounted: a request would 404 rather than CredentialMissing.
    let config = YouTubeConfig {
        api_key: None,
        base_url: server.uri(),
        region_code: "KR".to_string(),
    };
    let client = YouTubeClient::new(config).unwrap();
    assert!(!client.has_credentials());

    let err = client.trending(10, None).await.unwrap_err();
    assert!(matches!(err, YouTubeError::CredentialMissing));
    let err = client.search("lofi", 10).await.unwrap_err();
    assert!(matches!(err, YouTubeError::CredentialMissing));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn fallbacks_serve_samples_without_credentials() {
    let config = YouTubeConfig::default();
    let client = YouTubeClient::new(config).unwrap();

    let trending = client.trending_or_samples(10, None).await;
    assert_eq!(trending.len(), 5);
    assert_eq!(trending[0].id, VideoId::new("dQw4w9WgXcQ"));

    let results = client.search_or_samples("anything", 10).await;
    assert_eq!(results.len(), 5);
}

#[tokio::test]
async fn region_override_wins_over_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("regionCode", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let videos = client_for(&server).trending(10, Some("US")).await.unwrap();
    assert!(videos.is_empty());
}
