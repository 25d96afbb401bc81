use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read campaign file {path}: {source}")]
    CampaignFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse campaign file: {0}")]
    CampaignFileParse(#[from] serde_yaml::Error),

    #[error("campaign validation failed: {0}")]
    Validation(String),
}
