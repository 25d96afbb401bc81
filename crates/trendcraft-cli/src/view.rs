//! Read-only views over stored insights: `trends` and `report`.

use chrono::{DateTime, Utc};
use trendcraft_core::AppConfig;
use trendcraft_trends::{recommendations, with_thousands, Insights, PlatformEngagement};

use crate::collect::numbered;
use crate::store::read_json;

/// Load `trend_insights.json`, pointing at `collect` when it is missing.
pub(crate) fn load_insights(config: &AppConfig) -> anyhow::Result<Insights> {
    let path = config.insights_path();
    if !path.exists() {
        anyhow::bail!(
            "no trend insights at {}; run `trendcraft collect` first",
            path.display()
        );
    }
    read_json(&path)
}

/// Print best posting times, top viral keywords and engagement averages.
///
/// # Errors
///
/// Returns an error if the insights file is missing or unreadable.
pub(crate) fn run_trends(config: &AppConfig) -> anyhow::Result<()> {
    let insights = load_insights(config)?;
    println!("{}", render_trends(&insights));
    Ok(())
}

/// Print (or write to `output`) a markdown trend report.
///
/// # Errors
///
/// Returns an error if the insights file is missing or the report cannot be written.
pub(crate) fn run_report(config: &AppConfig, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let insights = load_insights(config)?;
    let report = render_markdown_report(&insights, Utc::now());
    match output {
        Some(path) => {
            std::fs::write(path, &report)?;
            println!("report saved to {}", path.display());
        }
        None => println!("{report}"),
    }
    Ok(())
}

pub(crate) fn render_trends(insights: &Insights) -> String {
    let mut lines = vec!["BEST POSTING TIMES:".to_owned()];
    for (platform, times) in &insights.best_posting_times {
        if !times.peak_hours.is_empty() {
            lines.push(format!("  • {platform}: Post at {}", times.best_time_range));
        }
    }

    lines.push(String::new());
    lines.push("VIRAL CONTENT PATTERNS:".to_owned());
    let viral = &insights.viral_content_patterns.common_keywords_in_viral;
    if !viral.is_empty() {
        let top: Vec<&str> = viral.iter().take(5).map(String::as_str).collect();
        lines.push(format!("  • Top keywords: {}", top.join(", ")));
    }

    lines.push(String::new());
    lines.push("ENGAGEMENT INSIGHTS:".to_owned());
    for (platform, engagement) in &insights.engagement_insights {
        match engagement {
            PlatformEngagement::Video(v) => lines.push(format!(
                "  • {platform}: {} avg views",
                with_thousands(v.avg_views)
            )),
            PlatformEngagement::Forum(f) => lines.push(format!(
                "  • {platform}: {} avg upvotes",
                with_thousands(f.avg_upvotes)
            )),
            PlatformEngagement::Other(_) => {}
        }
    }
    lines.join("\n")
}

pub(crate) fn render_markdown_report(insights: &Insights, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        "# Trend Report".to_owned(),
        String::new(),
        format!("**Generated**: {}", now.format("%Y-%m-%d %H:%M UTC")),
        format!("**Platforms**: {}", insights.platform_insights.len()),
        String::new(),
        "---".to_owned(),
        String::new(),
        "## Platforms".to_owned(),
        String::new(),
        "| Platform | Items | Date Range | Trend | Top Keywords |".to_owned(),
        "|----------|-------|------------|-------|--------------|".to_owned(),
    ];
    for (platform, summary) in &insights.platform_insights {
        lines.push(format!(
            "| {platform} | {} | {} | {} | {} |",
            summary.total_items,
            summary.date_range,
            summary.engagement_trend,
            summary.top_keywords.join(", ")
        ));
    }

    lines.extend([
        String::new(),
        "## Best Posting Times".to_owned(),
        String::new(),
        "| Platform | Best Window | Peak Hours | Sample Size |".to_owned(),
        "|----------|-------------|------------|-------------|".to_owned(),
    ]);
    for (platform, times) in &insights.best_posting_times {
        let hours: Vec<String> = times.peak_hours.iter().map(|h| format!("{h}:00")).collect();
        lines.push(format!(
            "| {platform} | {} | {} | {} |",
            times.best_time_range,
            hours.join(", "),
            times.sample_size
        ));
    }

    let viral = &insights.viral_content_patterns;
    lines.extend([String::new(), "## Viral Patterns".to_owned(), String::new()]);
    if viral.is_empty() {
        lines.push("No viral content detected.".to_owned());
    } else {
        lines.push(format!(
            "- **Keywords**: {}",
            viral.common_keywords_in_viral.join(", ")
        ));
        if !viral.emotional_triggers.is_empty() {
            lines.push(format!(
                "- **Emotional triggers**: {}",
                viral.emotional_triggers.join(", ")
            ));
        }
        if let Some(pattern) = &viral.content_length_pattern {
            lines.push(format!(
                "- **Title length**: {:.1} chars viral vs {:.1} overall",
                pattern.avg_viral_title_length, pattern.avg_title_length
            ));
        }
        for title in &viral.high_engagement_titles {
            lines.push(format!("- _{title}_"));
        }
    }

    lines.extend([String::new(), "## Recommendations".to_owned(), String::new()]);
    lines.extend(numbered(&recommendations(insights)));
    lines.join("\n")
}
