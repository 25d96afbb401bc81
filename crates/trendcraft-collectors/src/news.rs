//! NewsAPI `v2/everything` collector, stored under the `google_news` key.

use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Map};
use trendcraft_core::{AppConfig, EngagementMetrics, Record};

use crate::collector::{top_up, Collector};
use crate::error::CollectorError;
use crate::http::ApiEndpoint;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::samples::{iso, sample_news};

pub const NEWS_PLATFORM: &str = "google_news";

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";
const PAGE_SIZE: &str = "10";
const CONTENT_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: Option<String>,
    url: Option<String>,
    #[serde(default)]
    source: ArticleSource,
    published_at: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ArticleSource {
    name: Option<String>,
}

pub struct NewsClient {
    endpoint: ApiEndpoint,
}

impl NewsClient {
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
            endpoint: ApiEndpoint::new(api_key, "apiKey", timeout_secs, user_agent, base_url)?,
        })
    }

    async fn everything(&self, keyword: &str) -> Result<Vec<Article>, CollectorError> {
        let url = self.endpoint.build_url(
            "everything",
            &[
                ("q", keyword),
                ("pageSize", PAGE_SIZE),
                ("language", "en"),
                ("sortBy", "publishedAt"),
            ],
        )?;
        let response: EverythingResponse = self
            .endpoint
            .get_json(&url, &format!("news everything(q={keyword})"))
            .await?;
        if response.status == "error" {
            return Err(CollectorError::Api {
                platform: NEWS_PLATFORM,
                message: response.message.unwrap_or_else(|| "unknown error".to_owned()),
            });
        }
        Ok(response.articles)
    }
}

pub struct NewsCollector {
    client: Option<NewsClient>,
    retry: RetryPolicy,
}

impl NewsCollector {
    /// Live collector when `NEWS_API_KEY` is set, sample-only otherwise.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = config.news_api_key.as_deref().and_then(|key| {
            NewsClient::new(key, config.request_timeout_secs, &config.user_agent)
                .map_err(|e| tracing::warn!(error = %e, "news client construction failed"))
                .ok()
        });
        if client.is_none() {
            tracing::info!("no news API key configured, using sample articles");
        }
        Self::with_client(client, RetryPolicy::from_config(config))
    }

    #[must_use]
    pub fn with_client(client: Option<NewsClient>, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    async fn fetch_live(&self, client: &NewsClient, keywords: &[String], limit: usize) -> Vec<Record> {
        let mut items = Vec::new();

        'keywords: for keyword in keywords {
            let articles = match retry_with_backoff(self.retry, || client.everything(keyword)).await {
                Ok(articles) => articles,
                Err(e) => {
                    tracing::warn!(keyword = %keyword, error = %e, "news search failed");
                    continue;
                }
            };
            for article in articles {
                items.push(to_record(keyword, article));
                if items.len() >= limit {
                    break 'keywords;
                }
            }
        }

        tracing::debug!(count = items.len(), "collected live news articles");
        items
    }
}

fn to_record(keyword: &str, article: Article) -> Record {
    let mut metrics = EngagementMetrics {
        views: Some(0),
        ..EngagementMetrics::default()
    };
    metrics.extra.insert("sentiment".to_owned(), json!("neutral"));

    let mut extra = Map::new();
    extra.insert(
        "source".to_owned(),
        json!(article.source.name.unwrap_or_default()),
    );
    extra.insert(
        "content".to_owned(),
        json!(article
            .description
            .unwrap_or_default()
            .chars()
            .take(CONTENT_CHARS)
            .collect::<String>()),
    );
    extra.insert("collected_at".to_owned(), json!(iso(Utc::now())));

    Record {
        title: article.title.unwrap_or_default(),
        url: article.url.unwrap_or_default(),
        published_at: article.published_at,
        keyword: Some(keyword.to_owned()),
        platform: NEWS_PLATFORM.to_owned(),
        engagement_metrics: metrics,
        extra,
    }
}

impl Collector for NewsCollector {
    fn platform(&self) -> &'static str {
        NEWS_PLATFORM
    }

    async fn collect(&self, keywords: &[String], limit: usize) -> Vec<Record> {
        let live = match &self.client {
            Some(client) => self.fetch_live(client, keywords, limit).await,
            None => Vec::new(),
        };
        top_up(live, limit, NEWS_PLATFORM, |n| {
            sample_news(n, &mut rand::rng(), Utc::now())
        })
    }
}
