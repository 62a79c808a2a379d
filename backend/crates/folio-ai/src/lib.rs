//! Project description generation.
//!
//! [`DescriptionGenerator`] turns a [`DescriptionRequest`](folio_core::DescriptionRequest)
//! into text for a project card. It asks a chat-completion API when it can and
//! substitutes pre-authored or templated text when it cannot, so callers always
//! get two non-empty strings back.

pub mod canned;
pub mod chat_completion;
pub mod completion_client;
pub mod description_generator;
pub mod error;
pub mod fallback;
pub mod openai_client;
pub mod prompt;
pub mod runtime_settings;


pub use canned::{CANNED_RESPONSES, CannedResponse, canned_for, canned_or_default};
pub use completion_client::CompletionClient;
pub use description_generator::{
    DescriptionGenerator, MISSING_DESCRIPTION, MISSING_SHORT_DESCRIPTION,
};
pub use error::{AiError, Result};
pub use fallback::templated_description;
pub use openai_client::OpenAiClient;
pub use prompt::{FEATURES_PLACEHOLDER, build_prompt};
pub use runtime_settings::RuntimeSettings;
