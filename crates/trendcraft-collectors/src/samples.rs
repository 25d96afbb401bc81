//! Synthetic records used when a live API is unavailable or returns too few
//! items.
//!
//! The generators take the RNG and the current time as arguments so tests can
//! pin both.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::{json, Map, Value};
use trendcraft_core::{EngagementMetrics, Record};

use crate::news::NEWS_PLATFORM;
use crate::reddit::REDDIT_PLATFORM;
use crate::youtube::YOUTUBE_PLATFORM;

const FALLBACK_KEYWORD: &str = "digital marketing";

struct VideoTemplate {
    kind: &'static str,
    title_prefix: &'static str,
    title_suffix: &'static str,
    views: (i64, i64),
    likes_ratio: f64,
}

const VIDEO_TEMPLATES: &[VideoTemplate] = &[
    VideoTemplate {
        kind: "Tutorial",
        title_prefix: "How to ",
        title_suffix: " - Complete Guide",
        views: (5_000, 500_000),
        likes_ratio: 0.03,
    },
    VideoTemplate {
        kind: "Case Study",
        title_prefix: "",
        title_suffix: " Success Story - Real Results",
        views: (10_000, 300_000),
        likes_ratio: 0.04,
    },
    VideoTemplate {
        kind: "Tips",
        title_prefix: "10 ",
        title_suffix: " Tips That Actually Work",
        views: (8_000, 200_000),
        likes_ratio: 0.035,
    },
    VideoTemplate {
        kind: "Trends",
        title_prefix: "",
        title_suffix: " Trends 2024 - What's Working Now",
        views: (15_000, 400_000),
        likes_ratio: 0.025,
    },
    VideoTemplate {
        kind: "Tools",
        title_prefix: "Best ",
        title_suffix: " Tools for Beginners",
        views: (12_000, 250_000),
        likes_ratio: 0.03,
    },
];

/// (kind, title prefix, upvote base, comment base)
const POST_TYPES: &[(&str, &str, i64, i64)] = &[
    ("Question", "How do I...", 15, 8),
    ("Success Story", "I increased...", 250, 75),
    ("Discussion", "What's your opinion on...", 120, 25),
    ("Guide", "Complete guide to...", 450, 60),
    ("News", "Latest update about...", 80, 15),
];

const SUBREDDITS: &[&str] = &[
    "marketing",
    "digital_marketing",
    "socialmedia",
    "content_marketing",
    "SEO",
    "PPC",
];

const NEWS_TOPICS: &[&str] = &[
    "SEO",
    "Content Marketing",
    "Email Marketing",
    "Influencer Marketing",
];

pub(crate) fn iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn pick_keyword<'a, R: Rng + ?Sized>(keywords: &'a [String], rng: &mut R) -> &'a str {
    keywords
        .choose(rng)
        .map_or(FALLBACK_KEYWORD, String::as_str)
}

/// `"ai marketing"` → `"Ai Marketing"`.
pub(crate) fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn extra(fields: Value) -> Map<String, Value> {
    match fields {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scaled(value: i64, factor: f64) -> i64 {
    (value as f64 * factor) as i64
}

/// Video records spread over the last 30 days.
pub fn sample_videos<R: Rng + ?Sized>(
    count: usize,
    keywords: &[String],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let keyword = pick_keyword(keywords, rng);
            let template = &VIDEO_TEMPLATES[rng.random_range(0..VIDEO_TEMPLATES.len())];
            let views = rng.random_range(template.views.0..=template.views.1);
            let likes = scaled(views, template.likes_ratio * rng.random_range(0.8..1.2));
            let comments = scaled(views, 0.002 * rng.random_range(0.5..1.5));
            let published = now - Duration::days(rng.random_range(0..=30));
            let display = title_case(keyword);

            let mut metrics = EngagementMetrics::video(views, likes);
            metrics.comments = Some(comments);
            metrics.extra = extra(json!({
                "duration": (["short", "medium", "long"][rng.random_range(0..3)]),
            }));

            Record {
                title: format!("{}{display}{}", template.title_prefix, template.title_suffix),
                url: format!("https://youtube.com/watch?v=sample_{i:03}"),
                published_at: Some(iso(published)),
                keyword: Some(keyword.to_string()),
                platform: YOUTUBE_PLATFORM.to_string(),
                engagement_metrics: metrics,
                extra: extra(json!({
                    "channel": format!("{display} Academy"),
                    "description": format!(
                        "Learn about {keyword} with this {} video. Perfect for marketers looking to improve their skills.",
                        template.kind.to_lowercase()
                    ),
                    "collected_at": iso(now),
                    "sample": true,
                })),
            }
        })
        .collect()
}

/// Forum posts spread over the last 7 days.
pub fn sample_posts<R: Rng + ?Sized>(
    count: usize,
    keywords: &[String],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let subreddit = SUBREDDITS[rng.random_range(0..SUBREDDITS.len())];
            let (kind, prefix, upvote_base, comment_base) =
                POST_TYPES[rng.random_range(0..POST_TYPES.len())];
            let keyword = pick_keyword(keywords, rng);
            let published = now - Duration::days(rng.random_range(0..=7));

            let mut metrics = EngagementMetrics::forum(
                upvote_base + rng.random_range(-20..=50),
                comment_base + rng.random_range(-5..=20),
            );
            metrics.extra = extra(json!({
                "awards": rng.random_range(0_u8..=3),
                "score": rng.random_range(50_u32..=1000),
            }));

            Record {
                title: format!("{prefix} {keyword}?"),
                url: format!("https://reddit.com/r/{subreddit}/sample{i}"),
                published_at: Some(iso(published)),
                keyword: Some(keyword.to_string()),
                platform: REDDIT_PLATFORM.to_string(),
                engagement_metrics: metrics,
                extra: extra(json!({
                    "subreddit": subreddit,
                    "content": format!(
                        "Discussion about {keyword} in the context of {}...",
                        kind.to_lowercase()
                    ),
                    "collected_at": iso(now),
                    "sample": true,
                })),
            }
        })
        .collect()
}

/// News items on a few fixed marketing topics, all published `now`.
pub fn sample_news<R: Rng + ?Sized>(count: usize, rng: &mut R, now: DateTime<Utc>) -> Vec<Record> {
    (0..count)
        .map(|_| {
            let topic = NEWS_TOPICS[rng.random_range(0..NEWS_TOPICS.len())];
            let slug = topic.to_lowercase().replace(' ', "-");
            let mut metrics = EngagementMetrics {
                views: Some(rng.random_range(500..=5_000)),
                ..EngagementMetrics::default()
            };
            metrics.extra = extra(json!({
                "sentiment": (["positive", "neutral", "positive"][rng.random_range(0..3)]),
            }));

            Record {
                title: format!("{topic} Trends in 2024"),
                url: format!("https://example.com/{slug}"),
                published_at: Some(iso(now)),
                keyword: Some(topic.to_lowercase()),
                platform: NEWS_PLATFORM.to_string(),
                engagement_metrics: metrics,
                extra: extra(json!({
                    "source": format!("{topic} Digest"),
                    "content": format!("Latest trends and strategies in {}...", topic.to_lowercase()),
                    "collected_at": iso(now),
                    "sample": true,
                })),
            }
        })
        .collect()
}
