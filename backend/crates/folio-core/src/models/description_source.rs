use serde::{Deserialize, Serialize};

/// Which branch of the generation chain produced a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionSource {
    /// Parsed from a completion API response
    Generated,
    /// Pre-authored text for the project type
    Canned,
    /// Generic template filled with the raw request values
    Templated,
}

impl DescriptionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Canned => "canned",
            Self::Templated => "templated",
        }
    }
}

impl std::fmt::Display for DescriptionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
