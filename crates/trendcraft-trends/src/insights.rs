//! Output types of the trend analyzer.
//!
//! All blocks are plain values that serialize to JSON with the same key names
//! the CLI writes to `trend_insights.json`. An empty [`Insights`] (the failure
//! result) serializes as five empty objects; otherwise the viral block always
//! carries its four keys, empty or not.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The five insight blocks produced by one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub best_posting_times: BTreeMap<String, PostingTimes>,
    #[serde(default)]
    pub viral_content_patterns: ViralPatterns,
    #[serde(default)]
    pub engagement_insights: BTreeMap<String, PlatformEngagement>,
    /// Platform → keyword → stats.
    #[serde(default)]
    pub keyword_performance: BTreeMap<String, BTreeMap<String, KeywordStats>>,
    #[serde(default)]
    pub platform_insights: BTreeMap<String, PlatformSummary>,
}

impl Insights {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_posting_times.is_empty()
            && self.viral_content_patterns.is_empty()
            && self.engagement_insights.is_empty()
            && self.keyword_performance.is_empty()
            && self.platform_insights.is_empty()
    }
}

impl Serialize for Insights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Insights", 5)?;
        state.serialize_field("best_posting_times", &self.best_posting_times)?;
        if self.is_empty() {
            state.serialize_field("viral_content_patterns", &BTreeMap::<String, String>::new())?;
        } else {
            state.serialize_field("viral_content_patterns", &self.viral_content_patterns)?;
        }
        state.serialize_field("engagement_insights", &self.engagement_insights)?;
        state.serialize_field("keyword_performance", &self.keyword_performance)?;
        state.serialize_field("platform_insights", &self.platform_insights)?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingTimes {
    /// Up to three most frequent hours, ascending.
    pub peak_hours: Vec<u32>,
    pub best_time_range: String,
    pub sample_size: usize,
    pub peak_hour: u32,
}

impl PostingTimes {
    /// Window reported when a platform yielded no hours at all.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            peak_hours: vec![10, 14, 19],
            best_time_range: "10:00 - 19:00".to_string(),
            sample_size: 0,
            peak_hour: 14,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViralPatterns {
    #[serde(default)]
    pub high_engagement_titles: Vec<String>,
    #[serde(default)]
    pub common_keywords_in_viral: Vec<String>,
    /// Written as `{}` when absent.
    #[serde(
        default,
        serialize_with = "length_pattern_or_empty",
        deserialize_with = "empty_length_pattern_as_none"
    )]
    pub content_length_pattern: Option<ContentLengthPattern>,
    #[serde(default)]
    pub emotional_triggers: Vec<String>,
}

impl ViralPatterns {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high_engagement_titles.is_empty()
            && self.common_keywords_in_viral.is_empty()
            && self.content_length_pattern.is_none()
            && self.emotional_triggers.is_empty()
    }
}

#[allow(clippy::ref_option)]
fn length_pattern_or_empty<S: Serializer>(
    pattern: &Option<ContentLengthPattern>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match pattern {
        Some(pattern) => pattern.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthPatternOrEmpty {
    Pattern(ContentLengthPattern),
    Empty(BTreeMap<String, IgnoredAny>),
}

fn empty_length_pattern_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ContentLengthPattern>, D::Error> {
    Ok(
        match Option::<LengthPatternOrEmpty>::deserialize(deserializer)? {
            Some(LengthPatternOrEmpty::Pattern(pattern)) => Some(pattern),
            Some(LengthPatternOrEmpty::Empty(_)) | None => None,
        },
    )
}

/// Title lengths (in characters) of viral records against all video records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLengthPattern {
    pub avg_viral_title_length: f64,
    pub avg_title_length: f64,
}

/// Engagement block for one platform; the variant follows its
/// [`EngagementShape`](crate::EngagementShape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformEngagement {
    Video(VideoEngagement),
    Forum(ForumEngagement),
    Other(OtherEngagement),
}

impl PlatformEngagement {
    /// `avg_views`, else `avg_upvotes`, else zero.
    #[must_use]
    pub fn headline_average(&self) -> i64 {
        match self {
            Self::Video(v) => v.avg_views,
            Self::Forum(f) => f.avg_upvotes,
            Self::Other(_) => 0,
        }
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        match self {
            Self::Video(v) => v.total_items,
            Self::Forum(f) => f.total_items,
            Self::Other(o) => o.total_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEngagement {
    pub avg_views: i64,
    pub avg_likes: i64,
    pub view_to_like_ratio: f64,
    pub max_views: i64,
    pub min_views: i64,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumEngagement {
    pub avg_upvotes: i64,
    pub avg_comments: i64,
    pub engagement_rate: f64,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherEngagement {
    pub total_items: usize,
    pub avg_title_length: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordStats {
    pub count: usize,
    pub total_engagement: i64,
    pub avg_engagement: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub total_items: usize,
    pub date_range: String,
    pub top_keywords: Vec<String>,
    pub engagement_trend: EngagementTrend,
}

/// Direction of engagement between the older and newer half of a platform's
/// dated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementTrend {
    Increasing,
    Decreasing,
    Stable,
    #[serde(rename = "Insufficient data")]
    InsufficientData,
}

impl std::fmt::Display for EngagementTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementTrend::Increasing => write!(f, "Increasing"),
            EngagementTrend::Decreasing => write!(f, "Decreasing"),
            EngagementTrend::Stable => write!(f, "Stable"),
            EngagementTrend::InsufficientData => write!(f, "Insufficient data"),
        }
    }
}
