//! Stored AI generated descriptions.

use crate::{DescriptionPair, DescriptionRequest};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A description that a visitor chose to keep.
/// Only the `saved` flag changes after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDescription {
    pub id: i64,
    pub short_description: String,
    pub description: String,
    pub project_title: String,
    pub project_type: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    /// Owning user, if the visitor was signed in
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub saved: bool,
}

/// Insert payload for [`GeneratedDescription`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGeneratedDescription {
    pub short_description: String,
    pub description: String,
    pub project_title: String,
    pub project_type: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub user_id: Option<i64>,
    pub saved: bool,
}

impl NewGeneratedDescription {
    /// Build a saved record from the text and the request that produced it
    pub fn saved(pair: DescriptionPair, request: DescriptionRequest, user_id: Option<i64>) -> Self {
        Self {
            short_description: pair.short_description,
            description: pair.description,
            project_title: request.project_title,
            project_type: request.project_type.as_str().to_string(),
            technologies: request.technologies,
            features: request.features,
            user_id,
            saved: true,
        }
    }
}
