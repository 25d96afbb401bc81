use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding `collected_data.json`, `trend_insights.json` and the metrics log.
    pub data_dir: PathBuf,
    /// Directory generated content is saved into.
    pub results_dir: PathBuf,
    pub campaign_path: PathBuf,
    pub items_per_source: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub youtube_api_key: Option<String>,
    pub news_api_key: Option<String>,
    pub llm_api_key: Option<String>,
    pub llm_base_url: String,
    /// Chat models tried in order until one succeeds.
    pub llm_models: Vec<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("data_dir", &self.data_dir)
            .field("results_dir", &self.results_dir)
            .field("campaign_path", &self.campaign_path)
            .field("items_per_source", &self.items_per_source)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "llm_api_key",
                &self.llm_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_models", &self.llm_models)
            .finish()
    }
}

impl AppConfig {
    #[must_use]
    pub fn collected_data_path(&self) -> PathBuf {
        self.data_dir.join("collected_data.json")
    }

    #[must_use]
    pub fn insights_path(&self) -> PathBuf {
        self.data_dir.join("trend_insights.json")
    }

    #[must_use]
    pub fn metrics_path(&self) -> PathBuf {
        self.data_dir.join("performance_metrics.json")
    }
}
