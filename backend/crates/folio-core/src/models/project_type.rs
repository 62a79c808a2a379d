//! Project category labels.
//!
//! The catalogue knows four categories, but callers send free-form strings, so
//! unknown labels are carried through verbatim instead of being rejected.

use serde::{Deserialize, Serialize};

/// Kind of project being described
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    /// Web applications and sites (`web`)
    Web,
    /// Machine learning models and pipelines (`ml`)
    MachineLearning,
    /// Data analysis and visualisation (`data`)
    DataAnalysis,
    /// Scripts, bots and workflow automation (`auto`)
    Automation,
    /// Any other label, kept exactly as received
    Other(String),
}

impl ProjectType {
    /// Wire/database key
    pub fn as_str(&self) -> &str {
        match self {
            Self::Web => "web",
            Self::MachineLearning => "ml",
            Self::DataAnalysis => "data",
            Self::Automation => "auto",
            Self::Other(raw) => raw,
        }
    }

    /// Human readable name used in prompts. Unknown labels pass through as-is.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Web => "web development",
            Self::MachineLearning => "machine learning",
            Self::DataAnalysis => "data analysis",
            Self::Automation => "automation",
            Self::Other(raw) => raw,
        }
    }

    /// True for one of the four catalogue categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ProjectType {
    fn from(s: &str) -> Self {
        match s {
            "web" => Self::Web,
            "ml" => Self::MachineLearning,
            "data" => Self::DataAnalysis,
            "auto" => Self::Automation,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProjectType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "web" | "ml" | "data" | "auto" => Self::from(s.as_str()),
            _ => Self::Other(s),
        }
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
