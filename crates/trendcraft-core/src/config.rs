use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub(crate) const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub(crate) const DEFAULT_LLM_MODELS: &str =
    "llama-3.3-70b-versatile,llama-3.1-8b-instant,gemma2-9b-it";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. API keys that are unset or blank become `None` and the collectors
/// and generator fall back to sample/template output.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("TRENDCRAFT_ENV", "development"))?;
    let log_level = or_default("TRENDCRAFT_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("TRENDCRAFT_DATA_DIR", "./data"));
    let results_dir = PathBuf::from(or_default("TRENDCRAFT_RESULTS_DIR", "./results"));
    let campaign_path = PathBuf::from(or_default(
        "TRENDCRAFT_CAMPAIGN_PATH",
        "./config/campaign.yaml",
    ));

    let items_per_source = parse_usize("TRENDCRAFT_ITEMS_PER_SOURCE", "50")?;
    if items_per_source == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDCRAFT_ITEMS_PER_SOURCE".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("TRENDCRAFT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TRENDCRAFT_USER_AGENT", "trendcraft/0.1 (trend-analysis)");
    let max_retries = parse_u32("TRENDCRAFT_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("TRENDCRAFT_RETRY_BACKOFF_BASE_MS", "1000")?;

    let youtube_api_key = optional("YOUTUBE_API_KEY");
    let news_api_key = optional("NEWS_API_KEY");
    let llm_api_key = optional("GROQ_API_KEY");
    let llm_base_url = or_default("TRENDCRAFT_LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
    let llm_models = parse_list(&or_default("TRENDCRAFT_LLM_MODELS", DEFAULT_LLM_MODELS));
    if llm_models.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDCRAFT_LLM_MODELS".to_string(),
            reason: "at least one model name is required".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        results_dir,
        campaign_path,
        items_per_source,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        youtube_api_key,
        news_api_key,
        llm_api_key,
        llm_base_url,
        llm_models,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRENDCRAFT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
