use std::collections::BTreeMap;

use trendcraft_core::{Dataset, Record};

use crate::counting::{checked_sum, mean_f64, ratio, truncated_mean};
use crate::error::AnalysisError;
use crate::insights::{ForumEngagement, OtherEngagement, PlatformEngagement, VideoEngagement};
use crate::shape::EngagementShape;

const STAGE: &str = "engagement";

pub(crate) fn analyze_engagement(
    dataset: &Dataset,
) -> Result<BTreeMap<String, PlatformEngagement>, AnalysisError> {
    let mut out = BTreeMap::new();
    for (platform, records) in dataset {
        if records.is_empty() {
            continue;
        }
        let block = match EngagementShape::classify(platform) {
            EngagementShape::VideoLike => {
                PlatformEngagement::Video(video_engagement(platform, records)?)
            }
            EngagementShape::ForumLike => {
                PlatformEngagement::Forum(forum_engagement(platform, records)?)
            }
            EngagementShape::Other => PlatformEngagement::Other(other_engagement(records)),
        };
        out.insert(platform.clone(), block);
    }
    Ok(out)
}

fn video_engagement(platform: &str, records: &[Record]) -> Result<VideoEngagement, AnalysisError> {
    let views: Vec<i64> = records
        .iter()
        .map(|r| r.engagement_metrics.views_or_zero())
        .collect();
    let total_views = checked_sum(views.iter().copied(), STAGE, platform)?;
    let total_likes = checked_sum(
        records.iter().map(|r| r.engagement_metrics.likes_or_zero()),
        STAGE,
        platform,
    )?;
    let n = records.len();

    Ok(VideoEngagement {
        avg_views: truncated_mean(total_views, n),
        avg_likes: truncated_mean(total_likes, n),
        view_to_like_ratio: ratio(total_likes, total_views),
        max_views: views.iter().copied().max().unwrap_or(0),
        min_views: views.iter().copied().min().unwrap_or(0),
        total_items: n,
    })
}

fn forum_engagement(platform: &str, records: &[Record]) -> Result<ForumEngagement, AnalysisError> {
    let total_upvotes = checked_sum(
        records.iter().map(|r| r.engagement_metrics.upvotes_or_zero()),
        STAGE,
        platform,
    )?;
    let total_comments = checked_sum(
        records.iter().map(|r| r.engagement_metrics.comments_or_zero()),
        STAGE,
        platform,
    )?;
    let n = records.len();

    Ok(ForumEngagement {
        avg_upvotes: truncated_mean(total_upvotes, n),
        avg_comments: truncated_mean(total_comments, n),
        engagement_rate: ratio(total_comments, total_upvotes),
        total_items: n,
    })
}

fn other_engagement(records: &[Record]) -> OtherEngagement {
    let total_chars = records.iter().fold(0_i64, |acc, r| {
        acc.saturating_add(i64::try_from(r.title.chars().count()).unwrap_or(i64::MAX))
    });
    OtherEngagement {
        total_items: records.len(),
        avg_title_length: mean_f64(total_chars, records.len()),
    }
}
