//! Portfolio projects and incoming project requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project shown in the portfolio or requested through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    pub description: String,
    /// web, ml, data, auto or a free-form label
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Check if the project came in through the contact form
    pub fn is_inquiry(&self) -> bool {
        self.contact_email.is_some()
    }
}

/// Insert payload for [`Project`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
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
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub project_type: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl ProjectUpdate {
    /// Apply the present fields onto an existing project
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(short_description) = self.short_description {
            project.short_description = short_description;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(project_type) = self.project_type {
            project.project_type = project_type;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(features) = self.features {
            project.features = features;
        }
        if let Some(categories) = self.categories {
            project.categories = categories;
        }
        if let Some(image_url) = self.image_url {
            project.image_url = Some(image_url);
        }
    }
}
