//! YouTube Data API v3 collector.
//!
//! Searches each keyword ordered by view count, then fetches statistics for
//! every hit. Without an API key it produces sample videos only.

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use trendcraft_core::{AppConfig, EngagementMetrics, Record};

use crate::collector::{top_up, Collector};
use crate::error::CollectorError;
use crate::http::ApiEndpoint;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::samples::{iso, sample_videos};

pub const YOUTUBE_PLATFORM: &str = "youtube";

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
const RESULTS_PER_KEYWORD: &str = "10";
const DESCRIPTION_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    id: SearchId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    published_at: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(default)]
    statistics: Statistics,
}

/// Counters arrive as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

fn count(raw: Option<&String>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Client for the two YouTube endpoints the collector needs.
pub struct YouTubeClient {
    endpoint: ApiEndpoint,
}

impl YouTubeClient {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CollectorError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Client pointed at a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the HTTP client cannot be built, or
    /// [`CollectorError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CollectorError> {
        Ok(Self {
            endpoint: ApiEndpoint::new(api_key, "key", timeout_secs, user_agent, base_url)?,
        })
    }

    async fn search(&self, keyword: &str) -> Result<Vec<SearchItem>, CollectorError> {
        let url = self.endpoint.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("q", keyword),
                ("type", "video"),
                ("maxResults", RESULTS_PER_KEYWORD),
                ("order", "viewCount"),
                ("relevanceLanguage", "en"),
            ],
        )?;
        let response: SearchResponse = self
            .endpoint
            .get_json(&url, &format!("youtube search(q={keyword})"))
            .await?;
        Ok(response.items)
    }

    async fn statistics(&self, video_id: &str) -> Result<Option<Statistics>, CollectorError> {
        let url = self
            .endpoint
            .build_url("videos", &[("part", "statistics,snippet"), ("id", video_id)])?;
        let response: VideosResponse = self
            .endpoint
            .get_json(&url, &format!("youtube videos(id={video_id})"))
            .await?;
        Ok(response.items.into_iter().next().map(|item| item.statistics))
    }
}

pub struct YouTubeCollector {
    client: Option<YouTubeClient>,
    retry: RetryPolicy,
}

impl YouTubeCollector {
    /// Live collector when `YOUTUBE_API_KEY` is set, sample-only otherwise.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = config.youtube_api_key.as_deref().and_then(|key| {
            YouTubeClient::new(key, config.request_timeout_secs, &config.user_agent)
                .map_err(|e| tracing::warn!(error = %e, "YouTube client construction failed"))
                .ok()
        });
        if client.is_none() {
            tracing::info!("no YouTube API key configured, using sample videos");
        }
        Self::with_client(client, RetryPolicy::from_config(config))
    }

    #[must_use]
    pub fn with_client(client: Option<YouTubeClient>, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    async fn fetch_live(&self, client: &YouTubeClient, keywords: &[String], limit: usize) -> Vec<Record> {
        let mut videos = Vec::new();

        'keywords: for keyword in keywords {
            let hits = match retry_with_backoff(self.retry, || client.search(keyword)).await {
                Ok(hits) => hits,
                Err(e) => {
                    tracing::warn!(keyword = %keyword, error = %e, "YouTube search failed");
                    continue;
                }
            };

            for hit in hits {
                let Some(video_id) = hit.id.video_id.as_deref() else {
                    continue;
                };
                let stats = match retry_with_backoff(self.retry, || client.statistics(video_id)).await {
                    Ok(Some(stats)) => stats,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!(video_id, error = %e, "YouTube statistics fetch failed");
                        continue;
                    }
                };
                videos.push(to_record(keyword, video_id, hit.snippet, &stats));
                if videos.len() >= limit {
                    break 'keywords;
                }
            }
        }

        tracing::debug!(count = videos.len(), "collected live YouTube videos");
        videos
    }
}

fn to_record(keyword: &str, video_id: &str, snippet: Snippet, stats: &Statistics) -> Record {
    let mut metrics = EngagementMetrics::video(
        count(stats.view_count.as_ref()),
        count(stats.like_count.as_ref()),
    );
    metrics.comments = Some(count(stats.comment_count.as_ref()));
    metrics
        .extra
        .insert("duration".to_owned(), Value::from("medium"));

    let mut extra = Map::new();
    extra.insert("channel".to_owned(), json!(snippet.channel_title));
    extra.insert(
        "description".to_owned(),
        json!(snippet.description.chars().take(DESCRIPTION_CHARS).collect::<String>()),
    );
    extra.insert("collected_at".to_owned(), json!(iso(Utc::now())));

    Record {
        title: snippet.title,
        url: format!("https://youtube.com/watch?v={video_id}"),
        published_at: snippet.published_at,
        keyword: Some(keyword.to_owned()),
        platform: YOUTUBE_PLATFORM.to_owned(),
        engagement_metrics: metrics,
        extra,
    }
}

impl Collector for YouTubeCollector {
    fn platform(&self) -> &'static str {
        YOUTUBE_PLATFORM
    }

    async fn collect(&self, keywords: &[String], limit: usize) -> Vec<Record> {
        let live = match &self.client {
            Some(client) => self.fetch_live(client, keywords, limit).await,
            None => Vec::new(),
        };
        top_up(live, limit, YOUTUBE_PLATFORM, |n| {
            sample_videos(n, keywords, &mut rand::rng(), Utc::now())
        })
    }
}
