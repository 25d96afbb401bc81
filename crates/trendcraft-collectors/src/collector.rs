use std::future::Future;

use trendcraft_core::Record;

/// A source of records for one platform.
///
/// `collect` does not fail: live-fetch problems are logged and the shortfall
/// is made up with sample records, so callers always get exactly `limit`
/// records back.
pub trait Collector {
    /// Platform key the records are stored under.
    fn platform(&self) -> &'static str;

    fn collect(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> impl Future<Output = Vec<Record>> + Send;
}

/// Pad `records` with `fill(shortfall)` up to `limit`, then cut to `limit`.
pub(crate) fn top_up<F>(mut records: Vec<Record>, limit: usize, platform: &str, fill: F) -> Vec<Record>
where
    F: FnOnce(usize) -> Vec<Record>,
{
    if records.len() < limit {
        let shortfall = limit - records.len();
        tracing::info!(
            platform,
            live = records.len(),
            samples = shortfall,
            "filling collection with sample records"
        );
        records.extend(fill(shortfall));
    }
    records.truncate(limit);
    records
}
