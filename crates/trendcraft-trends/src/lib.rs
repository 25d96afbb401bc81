//! Trend analysis over collected platform records.
//!
//! [`analyze`] turns a [`Dataset`](trendcraft_core::Dataset) into five insight
//! blocks (posting times, viral patterns, engagement, keyword performance,
//! platform summaries) and [`recommendations`] condenses those blocks into at
//! most five actionable lines. Neither entry point fails: malformed fields
//! degrade to documented defaults and an internal fault yields empty insights.

pub mod analyzer;
pub mod error;
pub mod insights;
pub mod recommend;
pub mod shape;
pub mod timestamp;

mod counting;
mod engagement;
mod keywords;
mod platforms;
mod posting_times;
mod viral;

pub use analyzer::{analyze, analyze_with_rng, run_stages};
pub use error::AnalysisError;
pub use insights::{
    ContentLengthPattern, EngagementTrend, ForumEngagement, Insights, KeywordStats,
    OtherEngagement, PlatformEngagement, PlatformSummary, PostingTimes, VideoEngagement,
    ViralPatterns,
};
pub use recommend::{
    recommendations, with_thousands, GENERIC_RECOMMENDATIONS, MAX_RECOMMENDATIONS,
};
pub use shape::EngagementShape;
pub use timestamp::{parse_hour, parse_timestamp, HourParse};
