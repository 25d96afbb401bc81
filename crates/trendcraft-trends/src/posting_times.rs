//! Hour-of-day histogram per platform.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::Rng;
use trendcraft_core::{Dataset, Record};

use crate::insights::PostingTimes;
use crate::timestamp::{parse_hour, HourParse};

/// Hours drawn from when a record's timestamp cannot be read.
pub(crate) const BUSINESS_HOURS: RangeInclusive<u32> = 9..=17;
const PEAK_COUNT: usize = 3;

/// Posting-time block for every non-empty platform.
pub(crate) fn analyze_posting_times<R: Rng + ?Sized>(
    dataset: &Dataset,
    rng: &mut R,
) -> BTreeMap<String, PostingTimes> {
    dataset
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(platform, records)| {
            let hours = extract_hours(records, rng);
            (platform.clone(), summarize_hours(&hours))
        })
        .collect()
}

/// One hour per record; unparseable timestamps get a random business hour.
fn extract_hours<R: Rng + ?Sized>(records: &[Record], rng: &mut R) -> Vec<u32> {
    let mut fallbacks = 0_usize;
    let hours = records
        .iter()
        .map(|record| match parse_hour(record.published_at()) {
            HourParse::Parsed(hour) => hour,
            HourParse::Unparseable => {
                fallbacks += 1;
                rng.random_range(BUSINESS_HOURS)
            }
        })
        .collect();
    if fallbacks > 0 {
        tracing::debug!(
            fallbacks,
            total = records.len(),
            "substituted business hours for unparseable timestamps"
        );
    }
    hours
}

pub(crate) fn summarize_hours(hours: &[u32]) -> PostingTimes {
    let mut histogram = [0_usize; 24];
    for &hour in hours {
        if let Some(slot) = usize::try_from(hour).ok().and_then(|h| histogram.get_mut(h)) {
            *slot += 1;
        }
    }

    let mut ranked: Vec<(u32, usize)> = (0_u32..24)
        .zip(histogram)
        .filter(|&(_, count)| count > 0)
        .collect();
    if ranked.is_empty() {
        return PostingTimes::fallback();
    }
    // Most frequent first; the earlier hour wins a tie.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let peak_hour = ranked[0].0;
    let mut peak_hours: Vec<u32> = ranked.iter().take(PEAK_COUNT).map(|&(h, _)| h).collect();
    peak_hours.sort_unstable();

    let best_time_range = match (peak_hours.first(), peak_hours.last()) {
        (Some(first), Some(last)) if peak_hours.len() >= 2 => format!("{first}:00 - {last}:00"),
        _ => format!("{peak_hour}:00 - {}:00", (peak_hour + 3) % 24),
    };

    PostingTimes {
        peak_hours,
        best_time_range,
        sample_size: hours.len(),
        peak_hour,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn record_at(published_at: Option<&str>) -> Record {
        Record {
            published_at: published_at.map(ToString::to_string),
            ..Record::default()
        }
    }

    #[test]
    fn top_three_hours_sorted_ascending() {
        let summary = summarize_hours(&[19, 19, 19, 8, 8, 14, 14, 3]);
        assert_eq!(summary.peak_hours, vec![8, 14, 19]);
        assert_eq!(summary.best_time_range, "8:00 - 19:00");
        assert_eq!(summary.sample_size, 8);
        assert_eq!(summary.peak_hour, 19);
    }

    #[test]
    fn ties_prefer_smaller_hours() {
        let summary = summarize_hours(&[22, 5, 12, 7]);
        assert_eq!(summary.peak_hours, vec![5, 7, 12]);
        assert_eq!(summary.peak_hour, 5);
    }

    #[test]
    fn single_distinct_hour_uses_three_hour_window() {
        let summary = summarize_hours(&[22, 22]);
        assert_eq!(summary.peak_hours, vec![22]);
        assert_eq!(summary.best_time_range, "22:00 - 1:00");
        assert_eq!(summary.peak_hour, 22);
    }

    #[test]
    fn no_hours_yields_fallback_window() {
        assert_eq!(summarize_hours(&[]), PostingTimes::fallback());
    }

    #[test]
    fn empty_platforms_are_skipped() {
        let mut dataset = Dataset::new();
        dataset.insert("reddit".to_string(), vec![]);
        dataset.insert(
            "youtube".to_string(),
            vec![record_at(Some("2024-01-15T14:30:00"))],
        );
        let mut rng = StdRng::seed_from_u64(7);
        let times = analyze_posting_times(&dataset, &mut rng);
        assert!(!times.contains_key("reddit"));
        assert_eq!(times["youtube"].peak_hours, vec![14]);
        assert_eq!(times["youtube"].best_time_range, "14:00 - 17:00");
    }

    #[test]
    fn unparseable_timestamps_fall_in_business_hours() {
        let records = vec![
            record_at(Some("not a date")),
            record_at(None),
            record_at(Some("2024-13-45 99:00:00")),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let hours = extract_hours(&records, &mut rng);
        assert_eq!(hours.len(), 3);
        assert!(hours.iter().all(|h| BUSINESS_HOURS.contains(h)));
    }
}
