//! Forum collector. Reddit's API is not wired up, so every post is a sample.

use chrono::Utc;
use trendcraft_core::Record;

use crate::collector::Collector;
use crate::samples::sample_posts;

pub const REDDIT_PLATFORM: &str = "reddit";

#[derive(Debug, Default)]
pub struct RedditCollector;

impl Collector for RedditCollector {
    fn platform(&self) -> &'static str {
        REDDIT_PLATFORM
    }

    async fn collect(&self, keywords: &[String], limit: usize) -> Vec<Record> {
        let posts = sample_posts(limit, keywords, &mut rand::rng(), Utc::now());
        tracing::info!(count = posts.len(), "generated sample Reddit posts");
        posts
    }
}
