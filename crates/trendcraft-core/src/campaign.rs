use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Output length budget used when a platform has no configured limit.
pub const DEFAULT_PLATFORM_LIMIT: u32 = 300;

const DEFAULT_KEYWORDS: &[&str] = &[
    "digital marketing",
    "AI marketing",
    "social media",
    "content marketing",
    "SEO",
];

const DEFAULT_PLATFORM_LIMITS: &[(&str, u32)] = &[
    ("twitter", 280),
    ("linkedin", 3000),
    ("instagram", 2200),
    ("blog", 2000),
];

/// Search keywords and per-platform output limits for a collection campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub keywords: Vec<String>,
    #[serde(default = "default_platform_limits")]
    pub platform_limits: BTreeMap<String, u32>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect(),
            platform_limits: default_platform_limits(),
        }
    }
}

impl CampaignConfig {
    /// Maximum output length for generated copy on `platform`.
    #[must_use]
    pub fn limit_for(&self, platform: &str) -> u32 {
        self.platform_limits
            .get(platform)
            .copied()
            .unwrap_or(DEFAULT_PLATFORM_LIMIT)
    }
}

fn default_platform_limits() -> BTreeMap<String, u32> {
    DEFAULT_PLATFORM_LIMITS
        .iter()
        .map(|(name, limit)| ((*name).to_string(), *limit))
        .collect()
}

/// Load and validate the campaign configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_campaign(path: &Path) -> Result<CampaignConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CampaignFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let campaign: CampaignConfig = serde_yaml::from_str(&content)?;
    validate_campaign(&campaign)?;

    Ok(campaign)
}

fn validate_campaign(campaign: &CampaignConfig) -> Result<(), ConfigError> {
    if campaign.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for keyword in &campaign.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords must be non-empty".to_string(),
            ));
        }
        if !seen.insert(keyword.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword: '{keyword}'"
            )));
        }
    }

    for (platform, limit) in &campaign.platform_limits {
        if *limit == 0 {
            return Err(ConfigError::Validation(format!(
                "platform '{platform}' has a zero length limit"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn campaign(keywords: &[&str]) -> CampaignConfig {
        CampaignConfig {
            keywords: keywords.iter().map(ToString::to_string).collect(),
            platform_limits: default_platform_limits(),
        }
    }

    #[test]
    fn default_campaign_is_valid() {
        assert!(validate_campaign(&CampaignConfig::default()).is_ok());
    }

    #[test]
    fn limit_for_known_and_unknown_platforms() {
        let cfg = CampaignConfig::default();
        assert_eq!(cfg.limit_for("twitter"), 280);
        assert_eq!(cfg.limit_for("linkedin"), 3000);
        assert_eq!(cfg.limit_for("mastodon"), DEFAULT_PLATFORM_LIMIT);
    }

    #[test]
    fn validate_rejects_empty_keyword_list() {
        let err = validate_campaign(&campaign(&[])).unwrap_err();
        assert!(err.to_string().contains("at least one keyword"));
    }

    #[test]
    fn validate_rejects_blank_keyword() {
        let err = validate_campaign(&campaign(&["seo", "  "])).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_keyword_case_insensitive() {
        let err = validate_campaign(&campaign(&["SEO", "seo"])).unwrap_err();
        assert!(err.to_string().contains("duplicate keyword"));
    }

    #[test]
    fn validate_rejects_zero_limit() {
        let mut cfg = campaign(&["seo"]);
        cfg.platform_limits.insert("twitter".to_string(), 0);
        let err = validate_campaign(&cfg).unwrap_err();
        assert!(err.to_string().contains("zero length limit"));
    }

    #[test]
    fn load_campaign_fills_default_limits() {
        let path = std::env::temp_dir().join(format!(
            "trendcraft-campaign-{}.yaml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "keywords:\n  - growth hacking\n  - email marketing").unwrap();
        drop(file);

        let cfg = load_campaign(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.keywords, vec!["growth hacking", "email marketing"]);
        assert_eq!(cfg.limit_for("instagram"), 2200);
    }

    #[test]
    fn load_campaign_missing_file_is_io_error() {
        let err = load_campaign(Path::new("/nonexistent/campaign.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CampaignFileIo { .. }));
    }
}
