use folio_core::Project;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub project_type: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub categories: Vec<String>,
    pub image_url: Option<String>,
    pub user_id: Option<i64>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub deadline: Option<String>,
    pub urgent: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            short_description: p.short_description,
            description: p.description,
            project_type: p.project_type,
            technologies: p.technologies,
            features: p.features,
            categories: p.categories,
            image_url: p.image_url,
            user_id: p.user_id,
            contact_name: p.contact_name,
            contact_email: p.contact_email,
            deadline: p.deadline,
            urgent: p.urgent,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}
