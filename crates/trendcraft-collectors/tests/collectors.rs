//! Integration tests for the collectors using wiremock HTTP mocks.

use std::collections::HashMap;

use trendcraft_collectors::{
    collect_all, Collector, NewsClient, NewsCollector, RedditCollector, RetryPolicy,
    YouTubeClient, YouTubeCollector,
};
use trendcraft_core::build_app_config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn keywords() -> Vec<String> {
    vec!["SEO".to_string()]
}

fn is_sample(record: &trendcraft_core::Record) -> bool {
    record.extra.get("sample") == Some(&serde_json::Value::Bool(true))
}

#[tokio::test]
async fn youtube_live_results_come_first_then_samples() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "SEO"))
        .and(query_param("order", "viewCount"))
        .and(query_param("key", "yt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {"id": {"videoId": "abc"},
                 "snippet": {"title": "SEO in 2024", "channelTitle": "Rank Lab",
                             "publishedAt": "2024-01-15T14:30:00Z", "description": "All about SEO"}},
                {"id": {"kind": "youtube#channel"}, "snippet": {"title": "Not a video"}}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"statistics": {"viewCount": "12345", "likeCount": "678", "commentCount": "9"}}]
        })))
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("yt-key", 5, "trendcraft-test", &server.uri())
        .expect("client construction should not fail");
    let collector = YouTubeCollector::with_client(Some(client), RetryPolicy::none());
    let records = collector.collect(&keywords(), 3).await;

    assert_eq!(records.len(), 3);
    let live = &records[0];
    assert_eq!(live.title, "SEO in 2024");
    assert_eq!(live.url, "https://youtube.com/watch?v=abc");
    assert_eq!(live.published_at.as_deref(), Some("2024-01-15T14:30:00Z"));
    assert_eq!(live.engagement_metrics.views, Some(12_345));
    assert_eq!(live.engagement_metrics.likes, Some(678));
    assert_eq!(live.engagement_metrics.comments, Some(9));
    assert_eq!(live.extra["channel"], "Rank Lab");
    assert!(!is_sample(live));
    assert!(records[1..].iter().all(is_sample));
}

#[tokio::test]
async fn youtube_quota_error_falls_back_to_samples() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "quotaExceeded"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("yt-key", 5, "trendcraft-test", &server.uri())
        .expect("client construction should not fail");
    let records = YouTubeCollector::with_client(Some(client), RetryPolicy::none())
        .collect(&keywords(), 4)
        .await;

    assert_eq!(records.len(), 4);
    assert!(records.iter().all(is_sample));
    assert!(records.iter().all(|r| r.platform == "youtube"));
}

#[tokio::test]
async fn news_articles_are_tagged_google_news() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "SEO"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("apiKey", "news-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "articles": [
                {"title": "Search is changing", "url": "https://news.example/a",
                 "source": {"name": "Search Weekly"}, "publishedAt": "2024-02-01T08:00:00Z",
                 "description": "What the latest update means"},
                {"title": null, "url": "https://news.example/b", "source": {},
                 "publishedAt": "2024-02-02T09:00:00Z", "description": null}
            ]
        })))
        .mount(&server)
        .await;

    let client = NewsClient::with_base_url("news-key", 5, "trendcraft-test", &server.uri())
        .expect("client construction should not fail");
    let records = NewsCollector::with_client(Some(client), RetryPolicy::none())
        .collect(&keywords(), 2)
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].platform, "google_news");
    assert_eq!(records[0].keyword.as_deref(), Some("SEO"));
    assert_eq!(records[0].extra["source"], "Search Weekly");
    assert_eq!(records[0].engagement_metrics.views, Some(0));
    assert_eq!(records[1].title, "");
    assert!(!records.iter().any(is_sample));
}

#[tokio::test]
async fn news_error_envelope_falls_back_to_samples() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid."
        })))
        .mount(&server)
        .await;

    let client = NewsClient::with_base_url("bad-key", 5, "trendcraft-test", &server.uri())
        .expect("client construction should not fail");
    let records = NewsCollector::with_client(Some(client), RetryPolicy::none())
        .collect(&keywords(), 3)
        .await;

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(is_sample));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "articles": [{"title": "Back online", "url": "https://news.example/c"}]
        })))
        .mount(&server)
        .await;

    let client = NewsClient::with_base_url("news-key", 5, "trendcraft-test", &server.uri())
        .expect("client construction should not fail");
    let retry = RetryPolicy {
        max_retries: 2,
        backoff_base_ms: 0,
    };
    let records = NewsCollector::with_client(Some(client), retry)
        .collect(&keywords(), 1)
        .await;

    assert_eq!(records[0].title, "Back online");
}

#[tokio::test]
async fn reddit_posts_are_samples() {
    let records = RedditCollector.collect(&keywords(), 5).await;
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.platform == "reddit"));
    assert!(records.iter().all(|r| r.keyword.as_deref() == Some("SEO")));
}

#[tokio::test]
async fn collect_all_without_keys_fills_every_platform() {
    let env = HashMap::from([("TRENDCRAFT_ITEMS_PER_SOURCE", "4")]);
    let config = build_app_config(|key| {
        env.get(key)
            .map(|v| (*v).to_string())
            .ok_or(std::env::VarError::NotPresent)
    })
    .expect("config should build");

    let dataset = collect_all(&config, &keywords()).await;

    assert_eq!(
        dataset.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["google_news", "reddit", "youtube"]
    );
    assert!(dataset.values().all(|records| records.len() == 4));
}
