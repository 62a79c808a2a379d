//! Wire types for the OpenAI-compatible chat-completions endpoint.
//! Only the fields this crate reads or writes are modelled.

use serde::{Deserialize, Serialize};

const USER_ROLE: &str = "user";
const JSON_OBJECT_FORMAT: &str = "json_object";

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub response_format: ResponseFormat,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Single user turn, JSON-object output
    pub fn json_object(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: vec![ChatMessage {
                role: USER_ROLE,
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: JSON_OBJECT_FORMAT,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
