mod collect;
mod generate;
mod metrics;
mod sentiment;
mod store;
mod view;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use trendcraft_core::{AppConfig, CampaignConfig};

#[derive(Debug, Parser)]
#[command(name = "trendcraft")]
#[command(about = "Collect platform trends, analyze them, and generate marketing copy")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect from every platform, then analyze and save insights
    Collect {
        /// Show what would be collected without calling any API
        #[arg(long)]
        dry_run: bool,
    },
    /// Re-run trend analysis on a stored dataset
    Analyze {
        /// Dataset file; defaults to the collected data file
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Show posting times, viral keywords and engagement from stored insights
    Trends,
    /// Generate platform copy from stored insights
    Generate {
        #[arg(long, default_value = "digital marketing")]
        topic: String,
        #[arg(long, default_value = "twitter")]
        platform: String,
        /// Save the result and track it in the metrics log
        #[arg(long)]
        save: bool,
    },
    /// Score audience sentiment
    Sentiment {
        /// Text to score; repeat for a batch
        #[arg(long, conflicts_with = "input")]
        text: Vec<String>,
        /// File of texts (JSON array, dataset, or one per line)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Show generated-content metrics
    Metrics {
        /// Trend window in days
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Generate a markdown trend report
    Report {
        /// Write the report here instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Campaign file from the config, or the built-in campaign when it is absent.
fn load_campaign(config: &AppConfig) -> anyhow::Result<CampaignConfig> {
    if config.campaign_path.exists() {
        Ok(trendcraft_core::load_campaign(&config.campaign_path)?)
    } else {
        tracing::warn!(
            path = %config.campaign_path.display(),
            "campaign file not found, using default keywords"
        );
        Ok(CampaignConfig::default())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = trendcraft_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Collect { dry_run }) => {
            let campaign = load_campaign(&config)?;
            collect::run_collect(&config, &campaign, dry_run).await?;
        }
        Some(Commands::Analyze { input }) => collect::run_analyze(&config, input.as_deref())?,
        Some(Commands::Trends) => view::run_trends(&config)?,
        Some(Commands::Generate {
            topic,
            platform,
            save,
        }) => {
            let campaign = load_campaign(&config)?;
            generate::run_generate(&config, campaign, &topic, &platform, save).await?;
        }
        Some(Commands::Sentiment { text, input }) => {
            sentiment::run_sentiment(&config, text, input.as_deref())?;
        }
        Some(Commands::Metrics { days }) => metrics::run_metrics(&config.metrics_path(), days)?,
        Some(Commands::Report { output }) => view::run_report(&config, output.as_deref())?,
        None => println!("trendcraft: run `trendcraft --help` for available commands"),
    }

    Ok(())
}
