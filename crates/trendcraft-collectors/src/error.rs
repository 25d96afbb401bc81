use thiserror::Error;

/// Errors from the live platform APIs.
///
/// Collectors never surface these to their callers; they are logged and the
/// missing records are replaced with sample data.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{context} returned HTTP {status}")]
    Status { context: String, status: u16 },

    /// The API returned an error envelope with a message.
    #[error("{platform} API error: {message}")]
    Api {
        platform: &'static str,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
