use crate::chat_completion::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{AiError, CompletionClient, Result as AiErrorResult};

use folio_config::AiConfig;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// HTTP client for an OpenAI-compatible chat-completions API
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root including the version segment (e.g., "https://api.openai.com/v1")
    /// * `model` - Model name sent with every request
    /// * `api_key` - Bearer token; requests fail fast with `MissingApiKey` when absent
    pub fn new(base_url: &str, model: &str, api_key: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()).map(String::from),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(&config.base_url, &config.model, config.api_key.as_deref())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete_json(&self, prompt: &str) -> AiErrorResult<Option<String>> {
        let api_key = self.api_key.as_deref().ok_or_else(AiError::missing_api_key)?;

        let body = ChatCompletionRequest::json_object(&self.model, prompt);
        debug!("Requesting completion from {} (model {})", self.endpoint(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AiError::status(status.as_u16(), text));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(AiError::no_choices)?;

        Ok(choice.message.content)
    }
}
