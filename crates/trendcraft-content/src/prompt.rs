//! Prompt assembly from trend insights.

use trendcraft_trends::Insights;

pub(crate) const DEFAULT_TIME_INSIGHT: &str = "Post during business hours (9 AM - 5 PM)";
pub(crate) const DEFAULT_KEYWORD_INSIGHT: &str = "Focus on value-driven content";
const KEYWORDS_NAMED: usize = 3;

fn platform_instruction(platform: &str) -> &'static str {
    match platform {
        "twitter" => "Create a tweet (max 280 characters). Use 1-3 relevant hashtags. Make it engaging and shareable.",
        "linkedin" => "Create a professional LinkedIn post. Share insights and encourage discussion.",
        "blog" => "Create a blog post introduction. Make it informative and engaging.",
        "instagram" => "Create an Instagram caption. Use emojis and be conversational.",
        _ => "Create engaging marketing content",
    }
}

/// Posting window for `platform`, or the business-hours default.
#[must_use]
pub fn time_insight(insights: &Insights, platform: &str) -> String {
    insights
        .best_posting_times
        .get(platform)
        .map(|t| t.best_time_range.as_str())
        .filter(|range| !range.is_empty())
        .map_or_else(
            || DEFAULT_TIME_INSIGHT.to_owned(),
            |range| format!("Best posting time: {range}"),
        )
}

/// First few viral keywords, or a generic nudge when there are none.
#[must_use]
pub fn keyword_insight(insights: &Insights) -> String {
    let viral = &insights.viral_content_patterns.common_keywords_in_viral;
    if viral.is_empty() {
        return DEFAULT_KEYWORD_INSIGHT.to_owned();
    }
    let named: Vec<&str> = viral.iter().take(KEYWORDS_NAMED).map(String::as_str).collect();
    format!("Trending keywords: {}", named.join(", "))
}

/// User prompt asking for `platform` copy about `topic`.
#[must_use]
pub fn build_prompt(topic: &str, platform: &str, insights: &Insights) -> String {
    format!(
        "{instruction}\n\n\
         Topic: {topic}\n\n\
         Data Insights to incorporate:\n\
         1. {time}\n\
         2. {keywords}\n\
         3. Content with data references performs 40% better\n\n\
         Requirements:\n\
         - Platform-appropriate format\n\
         - Include relevant hashtags if suitable\n\
         - Add a clear call-to-action\n\
         - Reference data/trends naturally\n\n\
         Generate the content now:",
        instruction = platform_instruction(platform),
        time = time_insight(insights, platform),
        keywords = keyword_insight(insights),
    )
}
