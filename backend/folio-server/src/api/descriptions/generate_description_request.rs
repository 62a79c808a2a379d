use crate::ApiError;

use folio_core::DescriptionRequest;

use serde::Deserialize;

/// Body of `POST /api/generate-description`.
///
/// Fields are optional here so that missing and empty values produce the
/// same validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateDescriptionRequest {
    pub project_title: Option<String>,
    pub project_type: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
}

impl GenerateDescriptionRequest {
    /// Reject absent or empty required fields
    #[track_caller]
    pub fn into_request(self) -> Result<DescriptionRequest, ApiError> {
        let project_title = non_empty(self.project_title);
        let project_type = non_empty(self.project_type);
        let technologies = self.technologies.filter(|t| !t.is_empty());

        match (project_title, project_type, technologies) {
            (Some(title), Some(project_type), Some(technologies)) => Ok(DescriptionRequest::new(
                title,
                project_type,
                technologies,
                self.features.unwrap_or_default(),
            )),
            (title, project_type, _) => {
                let field = if title.is_none() {
                    "projectTitle"
                } else if project_type.is_none() {
                    "projectType"
                } else {
                    "technologies"
                };
                Err(ApiError::validation(
                    field,
                    "Missing required fields: projectTitle, projectType, and technologies are required",
                ))
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
