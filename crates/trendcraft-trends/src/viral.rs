//! Title patterns of above-average video records.
//!
//! Only video-like platforms take part: virality is judged on `views`, which
//! forums and news feeds do not report. Extending it to upvotes would change
//! the meaning of "viral" and is deliberately left out.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use trendcraft_core::{Dataset, Record};

use crate::counting::{checked_sum, mean_f64, most_common};
use crate::error::AnalysisError;
use crate::insights::{ContentLengthPattern, ViralPatterns};
use crate::shape::EngagementShape;

const STAGE: &str = "viral_patterns";
const MAX_TITLES: usize = 5;
const TITLE_CHARS: usize = 100;
const MAX_KEYWORDS: usize = 10;

/// Words of four or more word characters.
static KEYWORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{4,}\b").expect("valid keyword token regex"));
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid word token regex"));

/// Fixed headline word bank reported under `emotional_triggers`. Matched
/// against whole lower-cased words of viral titles; no scoring is involved.
const EMOTIONAL_TRIGGERS: &[&str] = &[
    "amazing",
    "best",
    "easy",
    "epic",
    "free",
    "insane",
    "instantly",
    "mistakes",
    "never",
    "proven",
    "secret",
    "secrets",
    "shocking",
    "success",
    "ultimate",
    "unbelievable",
    "worst",
];

pub(crate) fn analyze_viral_patterns(dataset: &Dataset) -> Result<ViralPatterns, AnalysisError> {
    let video_records: Vec<(&str, &Record)> = dataset
        .iter()
        .filter(|(platform, _)| EngagementShape::classify(platform) == EngagementShape::VideoLike)
        .flat_map(|(platform, records)| records.iter().map(move |r| (platform.as_str(), r)))
        .collect();

    if video_records.is_empty() {
        return Ok(ViralPatterns::default());
    }

    let mut total_views = 0_i64;
    for (platform, record) in &video_records {
        total_views = checked_sum(
            [total_views, record.engagement_metrics.views_or_zero()],
            STAGE,
            platform,
        )?;
    }
    let record_count = i128::try_from(video_records.len()).unwrap_or(i128::MAX);

    // views > total / n, compared exactly as views * n > total.
    let viral: Vec<&Record> = video_records
        .iter()
        .map(|(_, r)| *r)
        .filter(|r| i128::from(r.engagement_metrics.views_or_zero()) * record_count > i128::from(total_views))
        .collect();

    if viral.is_empty() {
        return Ok(ViralPatterns::default());
    }

    let high_engagement_titles = viral
        .iter()
        .take(MAX_TITLES)
        .filter(|r| !r.title.is_empty())
        .map(|r| r.title.chars().take(TITLE_CHARS).collect())
        .collect();

    let all_titles = viral
        .iter()
        .filter(|r| !r.title.is_empty())
        .map(|r| r.title.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let common_keywords_in_viral = most_common(
        KEYWORD_TOKEN.find_iter(&all_titles).map(|m| m.as_str()),
        MAX_KEYWORDS,
    )
    .into_iter()
    .map(|(word, _)| word.to_string())
    .collect();

    let content_length_pattern = Some(ContentLengthPattern {
        avg_viral_title_length: average_title_length(viral.iter().copied()),
        avg_title_length: average_title_length(video_records.iter().map(|(_, r)| *r)),
    });

    Ok(ViralPatterns {
        high_engagement_titles,
        common_keywords_in_viral,
        content_length_pattern,
        emotional_triggers: emotional_triggers(&all_titles),
    })
}

fn average_title_length<'a, I>(records: I) -> f64
where
    I: Iterator<Item = &'a Record>,
{
    let (total, count) = records.fold((0_i64, 0_usize), |(total, count), r| {
        let len = i64::try_from(r.title.chars().count()).unwrap_or(i64::MAX);
        (total.saturating_add(len), count + 1)
    });
    mean_f64(total, count)
}

fn emotional_triggers(lowercase_titles: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    WORD_TOKEN
        .find_iter(lowercase_titles)
        .map(|m| m.as_str())
        .filter(|word| EMOTIONAL_TRIGGERS.contains(word))
        .filter(|word| seen.insert(*word))
        .map(ToString::to_string)
        .collect()
}
