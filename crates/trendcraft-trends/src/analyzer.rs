//! Entry points tying the five insight stages together.

use rand::Rng;
use trendcraft_core::Dataset;

use crate::engagement::analyze_engagement;
use crate::error::AnalysisError;
use crate::insights::Insights;
use crate::keywords::analyze_keywords;
use crate::platforms::analyze_platforms;
use crate::posting_times::analyze_posting_times;
use crate::viral::analyze_viral_patterns;

/// Analyze a dataset with the thread-local RNG.
///
/// Never fails: an internal fault is logged and yields
/// [`Insights::default()`].
#[must_use]
pub fn analyze(dataset: &Dataset) -> Insights {
    analyze_with_rng(dataset, &mut rand::rng())
}

/// Like [`analyze`], drawing substitute posting hours from `rng`.
pub fn analyze_with_rng<R: Rng + ?Sized>(dataset: &Dataset, rng: &mut R) -> Insights {
    match run_stages(dataset, rng) {
        Ok(insights) => insights,
        Err(e) => {
            tracing::error!(error = %e, "trend analysis failed; returning empty insights");
            Insights::default()
        }
    }
}

/// Run every stage, surfacing the first internal fault.
///
/// # Errors
///
/// Returns [`AnalysisError::Overflow`] when a platform's engagement counters
/// cannot be summed in 64 bits.
pub fn run_stages<R: Rng + ?Sized>(dataset: &Dataset, rng: &mut R) -> Result<Insights, AnalysisError> {
    let record_count: usize = dataset.values().map(Vec::len).sum();
    tracing::info!(
        platforms = dataset.len(),
        records = record_count,
        "analyzing trends"
    );

    let insights = Insights {
        best_posting_times: analyze_posting_times(dataset, rng),
        viral_content_patterns: analyze_viral_patterns(dataset)?,
        engagement_insights: analyze_engagement(dataset)?,
        keyword_performance: analyze_keywords(dataset)?,
        platform_insights: analyze_platforms(dataset)?,
    };

    tracing::info!(
        platforms = insights.platform_insights.len(),
        viral_titles = insights.viral_content_patterns.high_engagement_titles.len(),
        "trend analysis complete"
    );
    Ok(insights)
}
