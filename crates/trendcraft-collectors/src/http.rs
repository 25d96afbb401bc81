//! Shared HTTP plumbing for the key-authenticated platform APIs.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CollectorError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// A `reqwest` client bound to one API's base URL and key.
pub(crate) struct ApiEndpoint {
    client: Client,
    base_url: Url,
    api_key: String,
    key_param: &'static str,
}

impl ApiEndpoint {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`CollectorError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub(crate) fn new(
        api_key: &str,
        key_param: &'static str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CollectorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CollectorError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_owned(),
            key_param,
        })
    }

    pub(crate) fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CollectorError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CollectorError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair(self.key_param, &self.api_key);
        }
        Ok(url)
    }

    /// GET `url`, require a 2xx status, and parse the body as `T`.
    ///
    /// `context` names the call in errors; the URL itself is not used because
    /// it carries the API key.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, CollectorError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollectorError::Status {
                context: context.to_owned(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}
