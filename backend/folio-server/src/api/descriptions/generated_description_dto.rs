use folio_core::GeneratedDescription;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDescriptionDto {
    pub id: i64,
    pub short_description: String,
    pub description: String,
    pub project_title: String,
    pub project_type: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub user_id: Option<i64>,
    /// RFC 3339
    pub created_at: String,
    pub saved: bool,
}

impl From<GeneratedDescription> for GeneratedDescriptionDto {
    fn from(d: GeneratedDescription) -> Self {
        Self {
            id: d.id,
            short_description: d.short_description,
            description: d.description,
            project_title: d.project_title,
            project_type: d.project_type,
            technologies: d.technologies,
            features: d.features,
            user_id: d.user_id,
            created_at: d.created_at.to_rfc3339(),
            saved: d.saved,
        }
    }
}
