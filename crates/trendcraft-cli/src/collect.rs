//! `collect` and `analyze` command handlers.
//!
//! Both end the same way: the dataset is analyzed, insights are written next
//! to it, and the recommendations are printed.

use std::path::Path;

use trendcraft_core::{AppConfig, CampaignConfig, Dataset};
use trendcraft_trends::{analyze, recommendations};

use crate::store::{read_json, write_json};

/// Collect from every platform, save the dataset, then analyze it.
///
/// When `dry_run` is `true` the function prints what would be collected and
/// returns without calling any API or writing files.
///
/// # Errors
///
/// Returns an error if the dataset or insights file cannot be written.
/// Collection failures never surface here; collectors fall back to samples.
pub(crate) async fn run_collect(
    config: &AppConfig,
    campaign: &CampaignConfig,
    dry_run: bool,
) -> anyhow::Result<()> {
    if dry_run {
        println!(
            "dry-run: would collect {} items per source for {} keywords: [{}]",
            config.items_per_source,
            campaign.keywords.len(),
            campaign.keywords.join(", ")
        );
        return Ok(());
    }

    let dataset = trendcraft_collectors::collect_all(config, &campaign.keywords).await;
    let path = config.collected_data_path();
    write_json(&path, &dataset)?;
    for (platform, records) in &dataset {
        println!("  {platform}: {} items", records.len());
    }
    println!("data saved to {}", path.display());

    analyze_and_save(config, &dataset)
}

/// Re-run analysis on a stored dataset (`collected_data.json` by default).
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or insights cannot be written.
pub(crate) fn run_analyze(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let default_path = config.collected_data_path();
    let path = input.unwrap_or(&default_path);
    let dataset: Dataset = read_json(path)?;
    tracing::info!(
        path = %path.display(),
        platforms = dataset.len(),
        "loaded dataset"
    );
    analyze_and_save(config, &dataset)
}

fn analyze_and_save(config: &AppConfig, dataset: &Dataset) -> anyhow::Result<()> {
    let insights = analyze(dataset);
    if insights.is_empty() {
        tracing::warn!("analysis produced no insights");
    }
    let path = config.insights_path();
    write_json(&path, &insights)?;

    println!();
    println!("ACTIONABLE INSIGHTS");
    for line in numbered(&recommendations(&insights)) {
        println!("{line}");
    }
    println!();
    println!("analysis saved to {}", path.display());
    Ok(())
}

pub(crate) fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {line}", i + 1))
        .collect()
}
