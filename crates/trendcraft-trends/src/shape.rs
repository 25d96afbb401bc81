//! Which engagement counters mean something for a platform.

use trendcraft_core::EngagementMetrics;

pub const VIDEO_PLATFORM: &str = "youtube";
pub const FORUM_PLATFORM: &str = "reddit";

/// Engagement shape of a platform, chosen once per platform by name.
///
/// Matching is exact: a platform called `"YouTube"` or `"yt"` is `Other` even
/// if its records carry `views`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementShape {
    /// `views` and `likes`.
    VideoLike,
    /// `upvotes` and `comments`.
    ForumLike,
    Other,
}

impl EngagementShape {
    #[must_use]
    pub fn classify(platform: &str) -> Self {
        match platform {
            VIDEO_PLATFORM => Self::VideoLike,
            FORUM_PLATFORM => Self::ForumLike,
            _ => Self::Other,
        }
    }

    /// The single counter used for keyword and trend engagement.
    #[must_use]
    pub fn primary_metric(self, metrics: &EngagementMetrics) -> i64 {
        match self {
            Self::VideoLike => metrics.views_or_zero(),
            Self::ForumLike => metrics.upvotes_or_zero(),
            Self::Other => 0,
        }
    }
}
