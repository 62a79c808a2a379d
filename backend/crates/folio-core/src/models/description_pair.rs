use serde::{Deserialize, Serialize};

/// The two pieces of text shown on a project card.
///
/// This is the flat wire shape of the generate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionPair {
    /// One sentence summary
    pub short_description: String,
    /// Three paragraphs: purpose, technical approach, outcomes
    pub description: String,
}

impl DescriptionPair {
    pub fn new(short_description: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            description: description.into(),
        }
    }

    /// Both fields carry text
    pub fn is_complete(&self) -> bool {
        !self.short_description.trim().is_empty() && !self.description.trim().is_empty()
    }
}
