//! `sentiment` command handler.

use std::path::Path;

use serde_json::Value;
use trendcraft_core::{AppConfig, Dataset};
use trendcraft_sentiment::{analyze_batch, render_report, TextSentiment};

/// Score `texts`, the texts in `input`, or (with neither) the titles of the
/// stored dataset, and print the report.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or no texts remain.
pub(crate) fn run_sentiment(
    config: &AppConfig,
    texts: Vec<String>,
    input: Option<&Path>,
) -> anyhow::Result<()> {
    let texts = if !texts.is_empty() {
        texts
    } else if let Some(path) = input {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        texts_from_input(&raw)
    } else {
        let dataset: Dataset = crate::store::read_json(&config.collected_data_path())?;
        dataset_titles(&dataset)
    };

    if texts.is_empty() {
        anyhow::bail!("no text to analyze");
    }
    tracing::info!(count = texts.len(), "scoring sentiment");

    let batch = analyze_batch(&texts);
    println!("{}", render_report(&batch));
    if texts.len() == 1 {
        if let Some(result) = batch.sample_analysis.first() {
            println!();
            println!("{}", describe(result));
        }
    }
    Ok(())
}

fn describe(result: &TextSentiment) -> String {
    format!(
        "score {:?}, confidence {:?}, keywords: [{}]",
        result.score,
        result.confidence,
        result.keywords.join(", ")
    )
}

/// Texts from a JSON array (strings or objects with a `text` field), a JSON
/// dataset (record titles), or else one text per non-blank line.
fn texts_from_input(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Object(map) => map.get("text").and_then(Value::as_str).map(str::to_owned),
                _ => None,
            })
            .collect(),
        Ok(value @ Value::Object(_)) => serde_json::from_value::<Dataset>(value)
            .map(|dataset| dataset_titles(&dataset))
            .unwrap_or_default(),
        _ => raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect(),
    }
}

fn dataset_titles(dataset: &Dataset) -> Vec<String> {
    dataset
        .values()
        .flatten()
        .map(|r| r.title.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
