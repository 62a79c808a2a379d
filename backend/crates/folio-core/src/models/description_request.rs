use crate::ProjectType;

/// Validated input of the description generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRequest {
    pub project_title: String,
    pub project_type: ProjectType,
    /// Never empty once the request handler has accepted it
    pub technologies: Vec<String>,
    /// May be empty
    pub features: Vec<String>,
}

impl DescriptionRequest {
    pub fn new(
        project_title: impl Into<String>,
        project_type: impl Into<ProjectType>,
        technologies: Vec<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            project_title: project_title.into(),
            project_type: project_type.into(),
            technologies,
            features,
        }
    }
}
