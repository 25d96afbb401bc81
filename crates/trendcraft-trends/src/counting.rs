use std::collections::HashMap;

use crate::error::AnalysisError;

/// The `n` most frequent items, most frequent first.
///
/// Items with equal counts keep the order in which they were first seen.
pub(crate) fn most_common<'a, I>(items: I, n: usize) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        if let Some(&slot) = index.get(item) {
            counts[slot].1 += 1;
        } else {
            index.insert(item, counts.len());
            counts.push((item, 1));
        }
    }

    // Stable sort keeps first-seen order among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Sum engagement counters, reporting overflow instead of wrapping.
pub(crate) fn checked_sum<I>(
    values: I,
    stage: &'static str,
    platform: &str,
) -> Result<i64, AnalysisError>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().try_fold(0_i64, |acc, v| {
        acc.checked_add(v).ok_or_else(|| AnalysisError::Overflow {
            stage,
            platform: platform.to_string(),
        })
    })
}

/// Integer mean truncated toward zero; `0` for an empty sample.
pub(crate) fn truncated_mean(total: i64, count: usize) -> i64 {
    match i64::try_from(count) {
        Ok(0) | Err(_) => 0,
        Ok(n) => total / n,
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean_f64(total: i64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// `numerator / denominator`, or `0.0` unless the denominator is positive.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn ratio(numerator: i64, denominator: i64) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_common_breaks_ties_by_first_seen() {
        let words = ["seo", "tips", "guide", "tips", "seo", "ads"];
        let top = most_common(words, 3);
        assert_eq!(top, vec![("seo", 2), ("tips", 2), ("guide", 1)]);
    }

    #[test]
    fn most_common_of_nothing_is_empty() {
        assert!(most_common(std::iter::empty::<&str>(), 5).is_empty());
    }

    #[test]
    fn checked_sum_reports_overflow() {
        let err = checked_sum([i64::MAX, 1], "engagement", "youtube").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Overflow {
                stage: "engagement",
                platform: "youtube".to_string()
            }
        );
    }

    #[test]
    fn truncated_mean_rounds_toward_zero() {
        assert_eq!(truncated_mean(7, 2), 3);
        assert_eq!(truncated_mean(-7, 2), -3);
        assert_eq!(truncated_mean(10, 0), 0);
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert!((ratio(40, 400) - 0.1).abs() < f64::EPSILON);
        assert!(ratio(5, 0).abs() < f64::EPSILON);
    }
}
