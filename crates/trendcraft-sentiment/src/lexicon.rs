//! Word banks for audience sentiment scoring.
//!
//! All entries are lowercase single words. Neutral words count toward the
//! matched total (and so dilute the score) without pushing it either way.

pub(crate) const POSITIVE: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "best",
    "love",
    "like",
    "happy",
    "awesome",
    "fantastic",
    "brilliant",
    "perfect",
    "outstanding",
    "impressive",
    "helpful",
    "useful",
    "valuable",
    "effective",
    "successful",
    "improved",
    "better",
];

pub(crate) const NEGATIVE: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "worst",
    "hate",
    "dislike",
    "unhappy",
    "angry",
    "sad",
    "disappointed",
    "frustrated",
    "useless",
    "waste",
    "broken",
    "failed",
    "problem",
    "issue",
    "difficult",
    "hard",
    "confusing",
];

pub(crate) const NEUTRAL: &[&str] = &[
    "okay", "fine", "average", "normal", "standard", "regular", "usual", "typical", "moderate",
    "neutral",
];

/// Polarity of a single lexicon word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Look up a lowercase word in the banks.
pub(crate) fn polarity(word: &str) -> Option<Polarity> {
    if POSITIVE.contains(&word) {
        Some(Polarity::Positive)
    } else if NEGATIVE.contains(&word) {
        Some(Polarity::Negative)
    } else if NEUTRAL.contains(&word) {
        Some(Polarity::Neutral)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banks_are_disjoint() {
        for word in POSITIVE {
            assert!(!NEGATIVE.contains(word) && !NEUTRAL.contains(word), "{word}");
        }
        for word in NEGATIVE {
            assert!(!NEUTRAL.contains(word), "{word}");
        }
    }

    #[test]
    fn banks_are_lowercase() {
        for word in POSITIVE.iter().chain(NEGATIVE).chain(NEUTRAL) {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn polarity_lookup() {
        assert_eq!(polarity("awesome"), Some(Polarity::Positive));
        assert_eq!(polarity("broken"), Some(Polarity::Negative));
        assert_eq!(polarity("typical"), Some(Polarity::Neutral));
        assert_eq!(polarity("marketing"), None);
    }
}
