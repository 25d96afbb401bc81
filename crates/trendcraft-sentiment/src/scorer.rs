//! Single-text sentiment scoring against the word banks.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::{polarity, Polarity};

/// Scores strictly above this are positive; strictly below its negation, negative.
const POLARITY_THRESHOLD: f64 = 0.1;
const MAX_KEYWORDS: usize = 5;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Sentiment of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSentiment {
    pub sentiment: Sentiment,
    /// `(positive - negative) / matched`, in `[-1.0, 1.0]`, three decimals.
    pub score: f64,
    /// Share of words that matched any bank, three decimals.
    pub confidence: f64,
    /// Distinct matched words in order of first appearance, at most five.
    pub keywords: Vec<String>,
}

impl TextSentiment {
    fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            score: 0.0,
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// Score `text` by counting word-bank hits.
///
/// Empty text, or text with no bank words, is neutral with zero score and
/// confidence.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_text(text: &str) -> TextSentiment {
    let lower = text.to_lowercase();
    let words: Vec<&str> = WORD.find_iter(&lower).map(|m| m.as_str()).collect();
    if words.is_empty() {
        return TextSentiment::neutral();
    }

    let (mut positive, mut negative, mut matched) = (0_usize, 0_usize, 0_usize);
    let mut keywords: Vec<String> = Vec::new();
    for word in &words {
        let Some(p) = polarity(word) else { continue };
        matched += 1;
        match p {
            Polarity::Positive => positive += 1,
            Polarity::Negative => negative += 1,
            Polarity::Neutral => {}
        }
        if keywords.len() < MAX_KEYWORDS && !keywords.iter().any(|k| k == word) {
            keywords.push((*word).to_owned());
        }
    }
    if matched == 0 {
        return TextSentiment::neutral();
    }

    let score = (positive as f64 - negative as f64) / matched as f64;
    let sentiment = if score > POLARITY_THRESHOLD {
        Sentiment::Positive
    } else if score < -POLARITY_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    TextSentiment {
        sentiment,
        score: round_to(score, 3),
        confidence: round_to(matched as f64 / words.len() as f64, 3),
        keywords,
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
