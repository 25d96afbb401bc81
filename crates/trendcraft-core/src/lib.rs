//! Shared types and configuration for trendcraft.
//!
//! Holds the collected-record data model every other crate exchanges, the
//! environment-driven application config, and the campaign file loader.

pub mod app_config;
pub mod campaign;
pub mod config;
pub mod error;
pub mod record;

pub use app_config::{AppConfig, Environment};
pub use campaign::{load_campaign, CampaignConfig};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use record::{Dataset, EngagementMetrics, Record, UNKNOWN_KEYWORD};
