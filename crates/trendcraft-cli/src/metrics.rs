//! Generated-content performance log (`performance_metrics.json`).
//!
//! Every saved generation is appended as a [`ContentEntry`]; per-platform
//! statistics are updated on each append and a trend view over the last N
//! days is recomputed on demand.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use trendcraft_content::GenerationResult;
use uuid::Uuid;

use crate::store::{read_json, write_json};

const TOP_TOPICS: usize = 5;
const REPORT_TOPICS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ContentEntry {
    pub metrics_id: Uuid,
    pub platform: String,
    pub topic: String,
    /// Characters of generated copy.
    pub length: usize,
    pub model_used: String,
    pub tracked_at: DateTime<Utc>,
}

impl ContentEntry {
    pub(crate) fn from_result(result: &GenerationResult, tracked_at: DateTime<Utc>) -> Self {
        Self {
            metrics_id: Uuid::new_v4(),
            platform: result.platform.clone(),
            topic: result.topic.clone(),
            length: result.length,
            model_used: result.model_used.clone(),
            tracked_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlatformStats {
    pub total_content: usize,
    /// Mean length over this platform's entries with a non-zero length.
    pub avg_length: f64,
    pub last_posted: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TopicCount {
    pub topic: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct TrendAnalysis {
    pub analysis_date: DateTime<Utc>,
    pub period_days: u32,
    pub total_content: usize,
    pub platform_distribution: BTreeMap<String, usize>,
    /// One decimal.
    pub average_length: f64,
    pub top_topics: Vec<TopicCount>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MetricsSummary {
    pub total_content_tracked: usize,
    pub platforms_used: Vec<String>,
    pub overall_status: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct MetricsStore {
    #[serde(default)]
    pub content_performance: Vec<ContentEntry>,
    #[serde(default)]
    pub platform_stats: BTreeMap<String, PlatformStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_analysis: Option<TrendAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl MetricsStore {
    /// Load the log at `path`; a missing file is an empty log.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            read_json(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Stamp `last_updated` and write the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub(crate) fn save(&mut self, path: &Path, now: DateTime<Utc>) -> anyhow::Result<()> {
        self.last_updated = Some(now);
        write_json(path, self)
    }

    /// Append `entry` and refresh its platform's statistics.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn track(&mut self, entry: ContentEntry) {
        let platform = entry.platform.clone();
        let tracked_at = entry.tracked_at;
        self.content_performance.push(entry);

        let lengths: Vec<usize> = self
            .content_performance
            .iter()
            .filter(|c| c.platform == platform && c.length > 0)
            .map(|c| c.length)
            .collect();

        let stats = self.platform_stats.entry(platform.clone()).or_default();
        stats.total_content += 1;
        stats.last_posted = Some(tracked_at);
        if !lengths.is_empty() {
            stats.avg_length = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        }
        tracing::debug!(
            platform = %platform,
            total = stats.total_content,
            "tracked generated content"
        );
    }

    /// Summarize entries tracked within `days` of `now` and keep the result as
    /// the latest `trend_analysis`. `None` (and no stored analysis) when
    /// nothing falls in the window.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn analyze_trends(&mut self, days: u32, now: DateTime<Utc>) -> Option<TrendAnalysis> {
        let cutoff = now - Duration::days(i64::from(days));
        let recent: Vec<&ContentEntry> = self
            .content_performance
            .iter()
            .filter(|c| c.tracked_at >= cutoff)
            .collect();
        if recent.is_empty() {
            self.trend_analysis = None;
            return None;
        }

        let mut platform_distribution = BTreeMap::new();
        for entry in &recent {
            *platform_distribution.entry(entry.platform.clone()).or_insert(0) += 1;
        }
        let average_length =
            recent.iter().map(|c| c.length).sum::<usize>() as f64 / recent.len() as f64;

        let analysis = TrendAnalysis {
            analysis_date: now,
            period_days: days,
            total_content: recent.len(),
            platform_distribution,
            average_length: (average_length * 10.0).round() / 10.0,
            top_topics: top_topics(recent.iter().map(|c| c.topic.as_str())),
        };
        self.trend_analysis = Some(analysis.clone());
        Some(analysis)
    }

    pub(crate) fn summary(&self) -> MetricsSummary {
        let total = self.content_performance.len();
        MetricsSummary {
            total_content_tracked: total,
            platforms_used: self.platform_stats.keys().cloned().collect(),
            overall_status: if total > 0 { "Active" } else { "Inactive" },
        }
    }

    /// Plain-text report of the summary, platform statistics and the latest
    /// trend analysis.
    pub(crate) fn render_report(&self, now: DateTime<Utc>) -> String {
        let summary = self.summary();
        let mut lines = vec![
            "📈 PERFORMANCE METRICS REPORT".to_owned(),
            "=".repeat(40),
            format!("Generated: {}", now.format("%Y-%m-%d %H:%M")),
            String::new(),
            "📊 OVERVIEW".to_owned(),
            format!("Total Content Tracked: {}", summary.total_content_tracked),
            format!("Platforms Used: {}", summary.platforms_used.join(", ")),
            format!("Overall Status: {}", summary.overall_status),
            String::new(),
            "🖥️ PLATFORM STATISTICS".to_owned(),
        ];
        for (platform, stats) in &self.platform_stats {
            let last_posted = stats
                .last_posted
                .map_or_else(|| "Never".to_owned(), |t| t.format("%Y-%m-%d").to_string());
            lines.extend([
                format!("  {}:", platform.to_uppercase()),
                format!("    • Total Posts: {}", stats.total_content),
                format!("    • Avg Length: {:.0} chars", stats.avg_length),
                format!("    • Last Posted: {last_posted}"),
            ]);
        }

        if let Some(trends) = &self.trend_analysis {
            lines.extend([
                String::new(),
                "📈 RECENT TRENDS".to_owned(),
                format!("  Period: Last {} days", trends.period_days),
                format!("  Content Created: {}", trends.total_content),
                format!("  Avg Length: {:.1} chars", trends.average_length),
            ]);
            if !trends.top_topics.is_empty() {
                lines.push(String::new());
                lines.push("🔥 TOP TOPICS".to_owned());
                for topic in trends.top_topics.iter().take(REPORT_TOPICS) {
                    lines.push(format!("  • {}: {} posts", topic.topic, topic.count));
                }
            }
        }
        lines.join("\n")
    }
}

/// Most frequent topics, ties in order of first appearance.
fn top_topics<'a>(topics: impl Iterator<Item = &'a str>) -> Vec<TopicCount> {
    let mut counts: Vec<TopicCount> = Vec::new();
    for topic in topics {
        match counts.iter_mut().find(|t| t.topic == topic) {
            Some(existing) => existing.count += 1,
            None => counts.push(TopicCount {
                topic: topic.to_owned(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_TOPICS);
    counts
}

/// Print the metrics report after refreshing the `days` trend window.
///
/// # Errors
///
/// Returns an error if the metrics file cannot be read or written.
pub(crate) fn run_metrics(path: &Path, days: u32) -> anyhow::Result<()> {
    let now = Utc::now();
    let mut store = MetricsStore::load(path)?;
    if store.analyze_trends(days, now).is_none() {
        tracing::info!(days, "no content tracked in the trend window");
    }
    if !store.content_performance.is_empty() {
        store.save(path, now)?;
    }
    println!("{}", store.render_report(now));
    Ok(())
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
