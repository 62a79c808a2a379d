use crate::{ConfigError, ConfigErrorResult, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL, DEFAULT_DEMO_MODE};

use serde::Deserialize;

/// Settings for the chat-completion API used to write project descriptions
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL, without the `/chat/completions` suffix
    pub base_url: String,
    pub model: String,
    /// Serve canned descriptions instead of calling the API
    pub demo_mode: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_AI_BASE_URL),
            model: String::from(DEFAULT_AI_MODEL),
            demo_mode: DEFAULT_DEMO_MODE,
        }
    }
}

impl AiConfig {
    /// A non-blank key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Demo mode as the server should start with it.
    /// Without a key every live call would fail, so demo mode is forced on.
    pub fn effective_demo_mode(&self) -> bool {
        self.demo_mode || !self.has_api_key()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::ai(format!(
                "ai.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::ai("ai.model cannot be empty"));
        }

        Ok(())
    }
}

// Hand-written so the key never ends up in logs
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("demo_mode", &self.demo_mode)
            .finish()
    }
}
