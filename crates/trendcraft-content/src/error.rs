use thiserror::Error;

/// Errors from the chat-completions endpoint.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the API's error text when it sent one.
    #[error("model {model} returned HTTP {status}: {message}")]
    Status {
        model: String,
        status: u16,
        message: String,
    },

    #[error("model {model} returned no content")]
    EmptyCompletion { model: String },

    #[error("JSON deserialization error for model {model}: {source}")]
    Deserialize {
        model: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("no LLM API key configured")]
    MissingApiKey,

    #[error("no models configured")]
    NoModels,
}
