//! `generate` command handler.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use trendcraft_content::{ContentGenerator, GenerationResult};
use trendcraft_core::{AppConfig, CampaignConfig};

use crate::metrics::{ContentEntry, MetricsStore};
use crate::store::write_json;
use crate::view::load_insights;

/// Generate `platform` copy about `topic` from the stored insights.
///
/// With `save`, the result is written to the results directory and tracked in
/// the metrics log.
///
/// # Errors
///
/// Returns an error if insights are missing, the LLM client cannot be built,
/// or a requested save fails. A model failure is not an error: the template
/// copy is printed with a warning.
pub(crate) async fn run_generate(
    config: &AppConfig,
    campaign: CampaignConfig,
    topic: &str,
    platform: &str,
    save: bool,
) -> anyhow::Result<()> {
    let insights = load_insights(config)?;
    let generator = ContentGenerator::from_config(config, campaign)?;

    println!("generating {platform} content about '{topic}'...");
    let result = generator.generate(topic, platform, &insights).await;

    if let Some(error) = &result.error {
        println!("warning: all models failed ({error}); showing template content");
    }
    println!();
    println!("{}", result.content);
    println!();
    println!(
        "length: {} / {} characters | platform: {} | model: {} | insights used: {}",
        result.length,
        result.max_length,
        result.platform,
        result.model_used,
        result.insights_used.len()
    );

    if save {
        let now = Utc::now();
        let path = save_result(&config.results_dir, &result, now)?;
        println!("saved to {}", path.display());

        let metrics_path = config.metrics_path();
        let mut store = MetricsStore::load(&metrics_path)?;
        store.track(ContentEntry::from_result(&result, now));
        store.save(&metrics_path, now)?;
    }
    Ok(())
}

fn save_result(
    results_dir: &Path,
    result: &GenerationResult,
    now: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    let path = results_dir.join(content_file_name(&result.topic, now));
    write_json(&path, result)?;
    Ok(path)
}

/// `content_<topic>_<YYYYmmdd_HHMMSS>.json`, spaces and path separators
/// replaced with underscores.
fn content_file_name(topic: &str, now: DateTime<Utc>) -> String {
    let slug: String = topic
        .chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("content_{slug}_{}.json", now.format("%Y%m%d_%H%M%S"))
}
