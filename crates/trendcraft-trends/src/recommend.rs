//! Condense [`Insights`] into a short list of human-readable suggestions.

use crate::insights::Insights;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Returned when the insights support no specific suggestion.
pub const GENERIC_RECOMMENDATIONS: [&str; 4] = [
    "📅 Post during business hours (9 AM - 5 PM) for maximum reach",
    "🔥 Use emotional triggers in your headlines",
    "🎯 Include clear call-to-actions in your content",
    "📊 Use data and statistics to build credibility",
];

const VIRAL_KEYWORDS_NAMED: usize = 3;

/// Up to [`MAX_RECOMMENDATIONS`] lines derived from `insights`.
///
/// Platforms are visited in map order, so on equal values the alphabetically
/// first platform (or keyword) wins.
#[must_use]
pub fn recommendations(insights: &Insights) -> Vec<String> {
    let mut out = Vec::new();

    for (platform, times) in &insights.best_posting_times {
        if !times.best_time_range.is_empty() {
            out.push(format!(
                "📅 Post on {platform} between {} for maximum reach",
                times.best_time_range
            ));
        }
    }

    let viral_keywords = &insights.viral_content_patterns.common_keywords_in_viral;
    if !viral_keywords.is_empty() {
        let named: Vec<&str> = viral_keywords
            .iter()
            .take(VIRAL_KEYWORDS_NAMED)
            .map(String::as_str)
            .collect();
        out.push(format!(
            "🔥 Include these keywords in content: {}",
            named.join(", ")
        ));
    }

    let mut best_platform: Option<(&str, i64)> = None;
    for (platform, block) in &insights.engagement_insights {
        let value = block.headline_average();
        if best_platform.is_none_or(|(_, best)| value > best) {
            best_platform = Some((platform, value));
        }
    }
    if let Some((platform, value)) = best_platform.filter(|&(_, v)| v > 0) {
        out.push(format!(
            "🎯 Focus on {platform} for highest engagement (avg: {})",
            with_thousands(value)
        ));
    }

    for (platform, keywords) in &insights.keyword_performance {
        let mut best: Option<(&str, i64)> = None;
        for (keyword, stats) in keywords {
            if best.is_none_or(|(_, b)| stats.avg_engagement > b) {
                best = Some((keyword, stats.avg_engagement));
            }
        }
        if let Some((keyword, avg)) = best.filter(|&(_, v)| v > 0) {
            out.push(format!(
                "🔑 On {platform}, '{keyword}' performs best ({} avg engagement)",
                with_thousands(avg)
            ));
        }
    }

    if out.is_empty() {
        return GENERIC_RECOMMENDATIONS.iter().map(ToString::to_string).collect();
    }
    out.truncate(MAX_RECOMMENDATIONS);
    out
}

/// `1234567` → `"1,234,567"`.
#[must_use]
pub fn with_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
