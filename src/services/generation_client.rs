use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    constants::form_prompt::{build_form_prompt, SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::dto::request::GenerationRequest,
};

/// Source of raw question-set text. The output is untrusted and decoded
/// separately.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    choices: Vec<ChatChoiceBody>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceBody {
    message: ChatMessageBody,
}

#[derive(Debug, Deserialize)]
struct ChatMessageBody {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint; by default
/// Gemini's compatibility layer.
pub struct OpenAiCompatGenerationClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompatGenerationClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.generation_api_base.clone())
            .with_api_key(config.generation_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model: config.generation_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": build_form_prompt(request)}
            ]
        })
    }
}

#[async_trait]
impl GenerationClient for OpenAiCompatGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        log::info!(
            "Requesting {} question(s) about '{}' from {}",
            request.amount,
            request.topic,
            self.model
        );

        let response: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(self.request_body(request))
            .await
            .map_err(|e| {
                log::error!("Generation request failed: {}", e);
                AppError::from(e)
            })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                AppError::UpstreamError("generation service returned no content".to_string())
            })
    }
}
