//! The fallback chain behind every generated description.
//!
//! Demo mode short-circuits to canned text. Otherwise the completion API is
//! asked once; when that fails the caller still gets canned text for a known
//! type or templated text for anything else.

use crate::{
    CompletionClient, Result as AiErrorResult, RuntimeSettings, build_prompt, canned_for,
    canned_or_default, templated_description,
};

use folio_core::{DescriptionPair, DescriptionRequest, Generation};

use std::sync::Arc;

use log::{error, info};
use serde_json::Value;

/// Substituted when the model omits `shortDescription`
pub const MISSING_SHORT_DESCRIPTION: &str = "Failed to generate short description";

/// Substituted when the model omits `description`
pub const MISSING_DESCRIPTION: &str = "Failed to generate detailed description";

const EMPTY_OBJECT: &str = "{}";

pub struct DescriptionGenerator {
    client: Arc<dyn CompletionClient>,
    settings: RuntimeSettings,
}

impl DescriptionGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, settings: RuntimeSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &RuntimeSettings {
        &self.settings
    }

    /// Produce a description pair for the request. Never fails.
    pub async fn generate(&self, request: &DescriptionRequest) -> Generation {
        if self.settings.demo_mode() {
            info!(
                "Demo mode: serving canned description for type '{}'",
                request.project_type
            );
            return Generation::canned(canned_or_default(&request.project_type));
        }

        match self.request_completion(request).await {
            Ok(pair) => Generation::generated(pair),
            Err(e) => {
                error!(
                    "Description generation failed for '{}': {}",
                    request.project_title, e
                );
                match canned_for(&request.project_type) {
                    Some(pair) => Generation::canned(pair),
                    None => Generation::templated(templated_description(request)),
                }
            }
        }
    }

    async fn request_completion(&self, request: &DescriptionRequest) -> AiErrorResult<DescriptionPair> {
        let prompt = build_prompt(request);
        let content = self.client.complete_json(&prompt).await?;
        let payload: Value = serde_json::from_str(content.as_deref().unwrap_or(EMPTY_OBJECT))?;

        Ok(DescriptionPair::new(
            Self::text_field(&payload, "shortDescription", MISSING_SHORT_DESCRIPTION),
            Self::text_field(&payload, "description", MISSING_DESCRIPTION),
        ))
    }

    /// Non-empty string at `key`, else the placeholder
    fn text_field(payload: &Value, key: &str, placeholder: &str) -> String {
        payload
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(placeholder)
            .to_string()
    }
}
