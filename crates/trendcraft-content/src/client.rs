//! Minimal client for OpenAI-compatible `chat/completions` endpoints.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// One chat completion request.
#[derive(Debug, Clone, Copy)]
pub struct Completion<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

pub struct ChatClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl ChatClient {
    /// `base_url` is the API root, e.g. `https://api.groq.com/openai/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the HTTP client cannot be built, or
    /// [`ContentError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        let invalid = |reason: String| ContentError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let endpoint = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .and_then(|base| base.join("chat/completions"))
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Send one completion request and return the trimmed reply text.
    ///
    /// # Errors
    ///
    /// - [`ContentError::Http`] on network failure.
    /// - [`ContentError::Status`] on a non-2xx response.
    /// - [`ContentError::Deserialize`] if the body is not a chat response.
    /// - [`ContentError::EmptyCompletion`] if the reply has no text.
    pub async fn complete(&self, request: Completion<'_>) -> Result<String, ContentError> {
        let body = ChatRequest {
            model: request.model,
            messages: [
                Message {
                    role: "system",
                    content: request.system,
                },
                Message {
                    role: "user",
                    content: request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| text.chars().take(200).collect());
            return Err(ContentError::Status {
                model: request.model.to_owned(),
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| ContentError::Deserialize {
                model: request.model.to_owned(),
                source: e,
            })?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ContentError::EmptyCompletion {
                model: request.model.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_chat_completions() {
        let client = ChatClient::new("k", "https://api.groq.com/openai/v1/", 5, "ua").unwrap();
        assert_eq!(
            client.endpoint.as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            ChatClient::new("k", "::nope::", 5, "ua"),
            Err(ContentError::InvalidBaseUrl { .. })
        ));
    }
}
