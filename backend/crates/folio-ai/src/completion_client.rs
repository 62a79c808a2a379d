use crate::Result as AiErrorResult;

use async_trait::async_trait;

/// Seam between the generator and the chat-completion transport.
///
/// Implemented by [`OpenAiClient`](crate::OpenAiClient); tests substitute
/// stubs that return fixed content or errors.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one user prompt asking for a JSON object.
    ///
    /// Returns the first choice's message content, or `None` when the API
    /// answered without any content.
    async fn complete_json(&self, prompt: &str) -> AiErrorResult<Option<String>>;
}
