use folio_core::{NewGeneratedDescription, NewProject};

/// A saved description with sensible defaults
pub fn new_test_description(user_id: Option<i64>) -> NewGeneratedDescription {
    NewGeneratedDescription {
        short_description: "Neural net jacked into the campus grid.".to_string(),
        description: "Purpose.\n\nApproach.\n\nOutcome.".to_string(),
        project_title: "Synapse Scanner".to_string(),
        project_type: "ml".to_string(),
        technologies: vec!["Python".to_string(), "PyTorch".to_string()],
        features: vec!["Live inference".to_string()],
        user_id,
        saved: true,
    }
}

/// A portfolio project with sensible defaults
pub fn new_test_project(project_type: &str, categories: &[&str]) -> NewProject {
    NewProject {
        title: format!("Test {project_type} project"),
        short_description: "Short".to_string(),
        description: "Long".to_string(),
        project_type: project_type.to_string(),
        technologies: vec!["Rust".to_string()],
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ..NewProject::default()
    }
}
