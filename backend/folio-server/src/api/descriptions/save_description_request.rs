use crate::ApiError;

use folio_core::{DescriptionPair, DescriptionRequest, NewGeneratedDescription};

use serde::Deserialize;

const REQUIRED_FIELDS_MESSAGE: &str = "Missing required fields: shortDescription, description, projectTitle, projectType, and technologies are required";

/// Body of `POST /api/save-generated-description`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveDescriptionRequest {
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub project_title: Option<String>,
    pub project_type: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub user_id: Option<i64>,
}

impl SaveDescriptionRequest {
    #[track_caller]
    pub fn into_new_description(self) -> Result<NewGeneratedDescription, ApiError> {
        let short_description = required(self.short_description, "shortDescription")?;
        let description = required(self.description, "description")?;
        let project_title = required(self.project_title, "projectTitle")?;
        let project_type = required(self.project_type, "projectType")?;
        let technologies = self
            .technologies
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::validation("technologies", REQUIRED_FIELDS_MESSAGE))?;

        Ok(NewGeneratedDescription::saved(
            DescriptionPair::new(short_description, description),
            DescriptionRequest::new(
                project_title,
                project_type,
                technologies,
                self.features.unwrap_or_default(),
            ),
            self.user_id,
        ))
    }
}

#[track_caller]
fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::validation(field, REQUIRED_FIELDS_MESSAGE))
}
