//! Aggregate sentiment over a batch of texts.

use serde::{Deserialize, Serialize};

use crate::scorer::{analyze_text, round_to, Sentiment, TextSentiment};

const SAMPLE_SIZE: usize = 3;

/// Overall mood of a batch, derived from the positive and negative shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallSentiment {
    VeryPositive,
    Positive,
    #[default]
    Neutral,
    Negative,
    VeryNegative,
}

impl OverallSentiment {
    /// Human-readable label, e.g. `Very Positive`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryPositive => "Very Positive",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
            Self::VeryNegative => "Very Negative",
        }
    }

    /// Positive share is checked first, so a batch can only be negative when
    /// at most 40% of it is positive.
    fn from_shares(positive_percent: f64, negative_percent: f64) -> Self {
        if positive_percent > 60.0 {
            Self::VeryPositive
        } else if positive_percent > 40.0 {
            Self::Positive
        } else if negative_percent > 60.0 {
            Self::VeryNegative
        } else if negative_percent > 40.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Per-label counts and their share of the batch, one decimal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub neutral_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSentiment {
    pub total_items: usize,
    pub sentiment_distribution: SentimentDistribution,
    pub overall_sentiment: OverallSentiment,
    /// Mean of the per-text scores, three decimals.
    pub average_score: f64,
    /// The first few per-text results.
    pub sample_analysis: Vec<TextSentiment>,
}

/// Score every text and aggregate. An empty batch is neutral with zero counts.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_batch<S: AsRef<str>>(texts: &[S]) -> BatchSentiment {
    if texts.is_empty() {
        return BatchSentiment::default();
    }

    let results: Vec<TextSentiment> = texts.iter().map(|t| analyze_text(t.as_ref())).collect();
    let count = |label: Sentiment| results.iter().filter(|r| r.sentiment == label).count();
    let (positive, negative, neutral) = (
        count(Sentiment::Positive),
        count(Sentiment::Negative),
        count(Sentiment::Neutral),
    );

    let total = results.len() as f64;
    let percent = |n: usize| n as f64 / total * 100.0;
    let overall_sentiment = OverallSentiment::from_shares(percent(positive), percent(negative));
    let average_score = results.iter().map(|r| r.score).sum::<f64>() / total;

    tracing::debug!(
        total = results.len(),
        positive,
        negative,
        neutral,
        overall = overall_sentiment.label(),
        "sentiment batch analyzed"
    );

    BatchSentiment {
        total_items: results.len(),
        sentiment_distribution: SentimentDistribution {
            positive,
            negative,
            neutral,
            positive_percent: round_to(percent(positive), 1),
            negative_percent: round_to(percent(negative), 1),
            neutral_percent: round_to(percent(neutral), 1),
        },
        overall_sentiment,
        average_score: round_to(average_score, 3),
        sample_analysis: results.into_iter().take(SAMPLE_SIZE).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_neutral() {
        let batch = analyze_batch::<&str>(&[]);
        assert_eq!(batch.total_items, 0);
        assert_eq!(batch.overall_sentiment, OverallSentiment::Neutral);
        assert_eq!(batch.average_score, 0.0);
        assert!(batch.sample_analysis.is_empty());
    }

    #[test]
    fn mixed_batch_splits_evenly() {
        let batch = analyze_batch(&[
            "Amazing content, very useful!",
            "It was okay, nothing special",
            "Terrible experience, very disappointed",
        ]);
        let dist = &batch.sentiment_distribution;
        assert_eq!(batch.total_items, 3);
        assert_eq!((dist.positive, dist.negative, dist.neutral), (1, 1, 1));
        assert_eq!(dist.positive_percent, 33.3);
        assert_eq!(batch.overall_sentiment, OverallSentiment::Neutral);
        assert_eq!(batch.average_score, 0.0);
        assert_eq!(batch.sample_analysis.len(), 3);
    }

    #[test]
    fn overall_thresholds() {
        assert_eq!(
            OverallSentiment::from_shares(61.0, 0.0),
            OverallSentiment::VeryPositive
        );
        assert_eq!(
            OverallSentiment::from_shares(60.0, 0.0),
            OverallSentiment::Positive
        );
        assert_eq!(
            OverallSentiment::from_shares(40.0, 60.0),
            OverallSentiment::Negative
        );
        assert_eq!(
            OverallSentiment::from_shares(0.0, 75.0),
            OverallSentiment::VeryNegative
        );
        assert_eq!(
            OverallSentiment::from_shares(40.0, 40.0),
            OverallSentiment::Neutral
        );
    }

    #[test]
    fn mostly_positive_batch() {
        let batch = analyze_batch(&["great", "love it", "awesome", "bad"]);
        assert_eq!(batch.overall_sentiment, OverallSentiment::VeryPositive);
        assert_eq!(batch.sentiment_distribution.positive_percent, 75.0);
        assert_eq!(batch.average_score, 0.5);
        assert_eq!(batch.sample_analysis.len(), 3);
    }

    #[test]
    fn overall_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OverallSentiment::VeryNegative).unwrap(),
            "\"very_negative\""
        );
    }
}
