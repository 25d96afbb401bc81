//! Platform collectors that feed the trend analyzer.
//!
//! Each [`Collector`] returns exactly the requested number of records: live
//! API results first, topped up with synthetic samples when a key is missing
//! or a request fails.

mod collector;
mod error;
mod http;
mod news;
mod reddit;
mod retry;
mod samples;
mod youtube;

pub use collector::Collector;
pub use error::CollectorError;
pub use news::{NewsClient, NewsCollector, NEWS_PLATFORM};
pub use reddit::{RedditCollector, REDDIT_PLATFORM};
pub use retry::RetryPolicy;
pub use samples::{sample_news, sample_posts, sample_videos};
pub use youtube::{YouTubeClient, YouTubeCollector, YOUTUBE_PLATFORM};

use trendcraft_core::{AppConfig, Dataset};

async fn run<C: Collector>(collector: &C, keywords: &[String], limit: usize, dataset: &mut Dataset) {
    let records = collector.collect(keywords, limit).await;
    tracing::info!(
        platform = collector.platform(),
        count = records.len(),
        "collection finished"
    );
    dataset.insert(collector.platform().to_owned(), records);
}

/// Collect news, videos and forum posts for `keywords`.
pub async fn collect_all(config: &AppConfig, keywords: &[String]) -> Dataset {
    let limit = config.items_per_source;
    let mut dataset = Dataset::new();

    run(&NewsCollector::from_config(config), keywords, limit, &mut dataset).await;
    run(&YouTubeCollector::from_config(config), keywords, limit, &mut dataset).await;
    run(&RedditCollector, keywords, limit, &mut dataset).await;

    dataset
}
