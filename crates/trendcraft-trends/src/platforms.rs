//! One summary row per platform: volume, date span, keywords, trend.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use trendcraft_core::{Dataset, Record};

use crate::counting::{checked_sum, mean_f64, most_common};
use crate::error::AnalysisError;
use crate::insights::{EngagementTrend, PlatformSummary};
use crate::shape::EngagementShape;
use crate::timestamp::parse_timestamp;

const STAGE: &str = "platform_insights";
const TOP_KEYWORDS: usize = 5;
/// Fewer records than this (total or dated) cannot show a trend.
const MIN_TREND_SAMPLE: usize = 5;
const RISE_FACTOR: f64 = 1.2;
const FALL_FACTOR: f64 = 0.8;
const UNKNOWN_DATE_RANGE: &str = "Unknown";

pub(crate) fn analyze_platforms(
    dataset: &Dataset,
) -> Result<BTreeMap<String, PlatformSummary>, AnalysisError> {
    let mut out = BTreeMap::new();
    for (platform, records) in dataset {
        if records.is_empty() {
            continue;
        }
        let summary = PlatformSummary {
            total_items: records.len(),
            date_range: date_range(records),
            top_keywords: top_keywords(records),
            engagement_trend: engagement_trend(platform, records)?,
        };
        out.insert(platform.clone(), summary);
    }
    Ok(out)
}

fn date_range(records: &[Record]) -> String {
    let dates = records
        .iter()
        .filter_map(|r| parse_timestamp(r.published_at()))
        .map(|dt| dt.date());
    let (min, max) = dates.fold((None, None), |(lo, hi), d| {
        (
            Some(lo.map_or(d, |lo: chrono::NaiveDate| lo.min(d))),
            Some(hi.map_or(d, |hi: chrono::NaiveDate| hi.max(d))),
        )
    });
    match (min, max) {
        (Some(min), Some(max)) => {
            format!("{} to {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d"))
        }
        _ => UNKNOWN_DATE_RANGE.to_string(),
    }
}

fn top_keywords(records: &[Record]) -> Vec<String> {
    most_common(
        records
            .iter()
            .filter_map(|r| r.keyword.as_deref())
            .filter(|k| !k.is_empty()),
        TOP_KEYWORDS,
    )
    .into_iter()
    .map(|(keyword, _)| keyword.to_string())
    .collect()
}

/// Compare mean engagement of the older and newer half of dated records.
fn engagement_trend(platform: &str, records: &[Record]) -> Result<EngagementTrend, AnalysisError> {
    if records.len() < MIN_TREND_SAMPLE {
        return Ok(EngagementTrend::InsufficientData);
    }

    let shape = EngagementShape::classify(platform);
    let mut dated: Vec<(NaiveDateTime, i64)> = records
        .iter()
        .filter_map(|r| {
            parse_timestamp(r.published_at())
                .map(|dt| (dt, shape.primary_metric(&r.engagement_metrics)))
        })
        .collect();
    if dated.len() < MIN_TREND_SAMPLE {
        return Ok(EngagementTrend::Stable);
    }
    // Stable: equal timestamps keep input order.
    dated.sort_by_key(|&(dt, _)| dt);

    let (older, newer) = dated.split_at(dated.len() / 2);
    let older_mean = half_mean(older, platform)?;
    let newer_mean = half_mean(newer, platform)?;

    Ok(if newer_mean > older_mean * RISE_FACTOR {
        EngagementTrend::Increasing
    } else if newer_mean < older_mean * FALL_FACTOR {
        EngagementTrend::Decreasing
    } else {
        EngagementTrend::Stable
    })
}

fn half_mean(half: &[(NaiveDateTime, i64)], platform: &str) -> Result<f64, AnalysisError> {
    let total = checked_sum(half.iter().map(|&(_, v)| v), STAGE, platform)?;
    Ok(mean_f64(total, half.len()))
}

#[cfg(test)]
mod tests {
    use trendcraft_core::EngagementMetrics;

    use super::*;

    fn video(day: u32, views: i64) -> Record {
        Record {
            published_at: Some(format!("2024-01-{day:02}T12:00:00Z")),
            engagement_metrics: EngagementMetrics::video(views, 0),
            ..Record::default()
        }
    }

    fn keyworded(keyword: Option<&str>) -> Record {
        Record {
            keyword: keyword.map(ToString::to_string),
            ..Record::default()
        }
    }

    #[test]
    fn date_range_spans_parseable_dates() {
        let mut undated = video(1, 0);
        undated.published_at = Some("yesterday".to_string());
        let records = vec![video(20, 0), undated, video(3, 0), video(11, 0)];
        assert_eq!(date_range(&records), "2024-01-03 to 2024-01-20");
    }

    #[test]
    fn date_range_without_dates_is_unknown() {
        assert_eq!(date_range(&[Record::default()]), "Unknown");
    }

    #[test]
    fn top_keywords_skip_missing_and_rank_by_frequency() {
        let records = vec![
            keyworded(Some("seo")),
            keyworded(None),
            keyworded(Some("ai")),
            keyworded(Some("ai")),
            keyworded(Some("")),
            keyworded(Some("ads")),
        ];
        assert_eq!(top_keywords(&records), vec!["ai", "seo", "ads"]);
    }

    #[test]
    fn fewer_than_five_records_is_insufficient() {
        let records: Vec<Record> = (1..=4).map(|d| video(d, 100)).collect();
        assert_eq!(
            engagement_trend("youtube", &records).unwrap(),
            EngagementTrend::InsufficientData
        );
    }

    #[test]
    fn too_few_dated_records_is_stable() {
        let mut records: Vec<Record> = (1..=4).map(|d| video(d, d.into())).collect();
        records.push(Record::default());
        assert_eq!(
            engagement_trend("youtube", &records).unwrap(),
            EngagementTrend::Stable
        );
    }

    #[test]
    fn rising_views_are_increasing_regardless_of_input_order() {
        // older half: days 1-2 (mean 100); newer half: days 3-5 (mean 200)
        let records = vec![
            video(5, 200),
            video(1, 100),
            video(3, 200),
            video(2, 100),
            video(4, 200),
        ];
        assert_eq!(
            engagement_trend("youtube", &records).unwrap(),
            EngagementTrend::Increasing
        );
    }

    #[test]
    fn falling_views_are_decreasing() {
        let records: Vec<Record> = (1..=6)
            .map(|d| video(d, if d <= 3 { 1_000 } else { 100 }))
            .collect();
        assert_eq!(
            engagement_trend("youtube", &records).unwrap(),
            EngagementTrend::Decreasing
        );
    }

    #[test]
    fn change_within_twenty_percent_is_stable() {
        let records: Vec<Record> = (1..=6)
            .map(|d| video(d, if d <= 3 { 100 } else { 115 }))
            .collect();
        assert_eq!(
            engagement_trend("youtube", &records).unwrap(),
            EngagementTrend::Stable
        );
    }

    #[test]
    fn other_platforms_trend_on_zero_engagement() {
        let records: Vec<Record> = (1..=6).map(|d| video(d, i64::from(d) * 1_000)).collect();
        assert_eq!(
            engagement_trend("google_news", &records).unwrap(),
            EngagementTrend::Stable
        );
    }
}
