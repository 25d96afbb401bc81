//! Model-backed content generation with a template fallback.

use serde::{Deserialize, Serialize};
use trendcraft_core::{AppConfig, CampaignConfig};
use trendcraft_trends::Insights;

use crate::client::{ChatClient, Completion};
use crate::error::ContentError;
use crate::prompt::{build_prompt, keyword_insight, time_insight};
use crate::template::template_content;

const SYSTEM_PROMPT: &str = "You are an expert marketing content creator.";
const TEMPERATURE: f32 = 0.7;
/// `model_used` when the content came from [`template_content`].
pub const TEMPLATE_MODEL: &str = "template";

/// Outcome of one [`ContentGenerator::generate`] call.
///
/// `success` is `false` when every model failed and `content` holds template
/// copy instead; `error` then carries the last model's failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub content: String,
    pub topic: String,
    pub platform: String,
    pub model_used: String,
    /// Characters in `content`.
    pub length: usize,
    pub max_length: u32,
    pub insights_used: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct ContentGenerator {
    client: Option<ChatClient>,
    models: Vec<String>,
    campaign: CampaignConfig,
}

impl ContentGenerator {
    /// Generator for the configured LLM endpoint; template-only without a key.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if a key is set but the HTTP client cannot be
    /// built for `llm_base_url`.
    pub fn from_config(config: &AppConfig, campaign: CampaignConfig) -> Result<Self, ContentError> {
        let client = match config.llm_api_key.as_deref() {
            Some(key) => Some(ChatClient::new(
                key,
                &config.llm_base_url,
                config.request_timeout_secs,
                &config.user_agent,
            )?),
            None => {
                tracing::warn!("no LLM API key configured, generated content will use templates");
                None
            }
        };
        Ok(Self::new(client, config.llm_models.clone(), campaign))
    }

    #[must_use]
    pub fn new(client: Option<ChatClient>, models: Vec<String>, campaign: CampaignConfig) -> Self {
        Self {
            client,
            models,
            campaign,
        }
    }

    /// Generate `platform` copy about `topic`, trying each model in order.
    pub async fn generate(&self, topic: &str, platform: &str, insights: &Insights) -> GenerationResult {
        let max_length = self.campaign.limit_for(platform);
        let prompt = build_prompt(topic, platform, insights);
        let insights_used = vec![time_insight(insights, platform), keyword_insight(insights)];
        tracing::info!(topic, platform, prompt_chars = prompt.len(), "generating content");

        let failure = match &self.client {
            Some(client) => match self.try_models(client, &prompt, max_length).await {
                Ok((model, content)) => {
                    tracing::info!(model = %model, chars = content.chars().count(), "content generated");
                    return GenerationResult {
                        success: true,
                        length: content.chars().count(),
                        content,
                        topic: topic.to_owned(),
                        platform: platform.to_owned(),
                        model_used: model,
                        max_length,
                        insights_used,
                        error: None,
                    };
                }
                Err(e) => e,
            },
            None => ContentError::MissingApiKey,
        };

        tracing::warn!(error = %failure, "falling back to template content");
        let content = template_content(topic, platform, insights);
        GenerationResult {
            success: false,
            length: content.chars().count(),
            content,
            topic: topic.to_owned(),
            platform: platform.to_owned(),
            model_used: TEMPLATE_MODEL.to_owned(),
            max_length,
            insights_used,
            error: Some(failure.to_string()),
        }
    }

    /// First model that answers wins; otherwise the last error.
    async fn try_models(
        &self,
        client: &ChatClient,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<(String, String), ContentError> {
        let mut last_error = ContentError::NoModels;
        for model in &self.models {
            let request = Completion {
                model,
                system: SYSTEM_PROMPT,
                user: prompt,
                max_tokens,
                temperature: TEMPERATURE,
            };
            match client.complete(request).await {
                Ok(content) => return Ok((model.clone(), content)),
                Err(e) => {
                    tracing::warn!(model = %model, error = %e, "model failed, trying next");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}
