use std::collections::BTreeMap;

use trendcraft_core::Dataset;

use crate::counting::truncated_mean;
use crate::error::AnalysisError;
use crate::insights::KeywordStats;
use crate::shape::EngagementShape;

const STAGE: &str = "keyword_performance";

#[derive(Default)]
struct Tally {
    count: usize,
    total: i64,
}

/// Per-platform keyword groups with their summed primary metric.
pub(crate) fn analyze_keywords(
    dataset: &Dataset,
) -> Result<BTreeMap<String, BTreeMap<String, KeywordStats>>, AnalysisError> {
    let mut out = BTreeMap::new();
    for (platform, records) in dataset {
        if records.is_empty() {
            continue;
        }
        let shape = EngagementShape::classify(platform);

        let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
        for record in records {
            let tally = tallies.entry(record.keyword_label()).or_default();
            tally.count += 1;
            tally.total = tally
                .total
                .checked_add(shape.primary_metric(&record.engagement_metrics))
                .ok_or_else(|| AnalysisError::Overflow {
                    stage: STAGE,
                    platform: platform.clone(),
                })?;
        }

        let stats = tallies
            .into_iter()
            .map(|(keyword, tally)| {
                (
                    keyword.to_string(),
                    KeywordStats {
                        count: tally.count,
                        total_engagement: tally.total,
                        avg_engagement: truncated_mean(tally.total, tally.count),
                    },
                )
            })
            .collect();
        out.insert(platform.clone(), stats);
    }
    Ok(out)
}
