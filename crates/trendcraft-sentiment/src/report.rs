use crate::batch::{BatchSentiment, OverallSentiment};

fn insights(overall: OverallSentiment) -> [&'static str; 3] {
    match overall {
        OverallSentiment::VeryPositive => [
            "Audience response is overwhelmingly positive",
            "Content strategy is working effectively",
            "Consider scaling successful approaches",
        ],
        OverallSentiment::Positive => [
            "Generally positive audience sentiment",
            "Continue current content strategy",
            "Monitor for any negative trends",
        ],
        OverallSentiment::Neutral => [
            "Neutral audience sentiment",
            "Opportunity to increase engagement",
            "Test different content approaches",
        ],
        OverallSentiment::Negative => [
            "Negative sentiment detected",
            "Consider content adjustments",
            "Analyze specific pain points",
        ],
        OverallSentiment::VeryNegative => [
            "Immediate attention needed",
            "Significant negative sentiment detected",
            "Review content strategy and audience targeting",
        ],
    }
}

/// Plain-text summary of a batch result.
///
/// Decimals print with at least one fractional digit (`0.0`, `33.3`).
#[must_use]
pub fn render_report(batch: &BatchSentiment) -> String {
    let dist = &batch.sentiment_distribution;
    [
        "📊 SENTIMENT ANALYSIS REPORT".to_owned(),
        "=".repeat(40),
        format!("Total Items Analyzed: {}", batch.total_items),
        format!("Overall Sentiment: {}", batch.overall_sentiment.label()),
        format!("Average Sentiment Score: {:?}", batch.average_score),
        String::new(),
        "📈 Distribution:".to_owned(),
        format!("  Positive: {} ({:?}%)", dist.positive, dist.positive_percent),
        format!("  Negative: {} ({:?}%)", dist.negative, dist.negative_percent),
        format!("  Neutral:  {} ({:?}%)", dist.neutral, dist.neutral_percent),
        String::new(),
        "💡 Insights:".to_owned(),
    ]
    .into_iter()
    .chain(
        insights(batch.overall_sentiment)
            .iter()
            .map(|line| format!("  • {line}")),
    )
    .collect::<Vec<_>>()
    .join("\n")
}
