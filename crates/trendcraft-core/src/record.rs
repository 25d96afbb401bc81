//! Normalized records produced by the collectors and consumed by the analyzer.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Every collected record, keyed by platform name.
pub type Dataset = BTreeMap<String, Vec<Record>>;

/// Keyword label used when a record carries no keyword.
pub const UNKNOWN_KEYWORD: &str = "unknown";

/// One item collected from a platform.
///
/// Only the fields the analyzer reads are typed; anything else the collector
/// attached (channel, subreddit, description, `collected_at`, ...) is kept in
/// `extra` and written back out unchanged. Text fields holding a number or
/// boolean are read as its JSON text; arrays and objects read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "nullable_text")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub platform: String,
    #[serde(default)]
    pub engagement_metrics: EngagementMetrics,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// The raw timestamp, or `None` when absent or blank.
    #[must_use]
    pub fn published_at(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Keyword used for grouping; [`UNKNOWN_KEYWORD`] when absent.
    #[must_use]
    pub fn keyword_label(&self) -> &str {
        self.keyword.as_deref().unwrap_or(UNKNOWN_KEYWORD)
    }
}

/// Platform-dependent engagement counters.
///
/// Video platforms report `views`/`likes`, forums `upvotes`/`comments`, news
/// usually nothing. Values that are not integers (floats, numeric strings) are
/// coerced; anything else reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub likes: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub upvotes: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EngagementMetrics {
    #[must_use]
    pub fn video(views: i64, likes: i64) -> Self {
        Self {
            views: Some(views),
            likes: Some(likes),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn forum(upvotes: i64, comments: i64) -> Self {
        Self {
            upvotes: Some(upvotes),
            comments: Some(comments),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn views_or_zero(&self) -> i64 {
        self.views.unwrap_or(0)
    }

    #[must_use]
    pub fn likes_or_zero(&self) -> i64 {
        self.likes.unwrap_or(0)
    }

    #[must_use]
    pub fn upvotes_or_zero(&self) -> i64 {
        self.upvotes.unwrap_or(0)
    }

    #[must_use]
    pub fn comments_or_zero(&self) -> i64 {
        self.comments.unwrap_or(0)
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            #[allow(clippy::cast_possible_truncation)]
            n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}
