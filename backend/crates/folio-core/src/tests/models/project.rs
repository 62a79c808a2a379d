use crate::{Project, ProjectUpdate};

use chrono::Utc;

fn sample_project() -> Project {
    let now = Utc::now();
    Project {
        id: 1,
        title: "Grid Runner".into(),
        short_description: "short".into(),
        description: "long".into(),
        project_type: "web".into(),
        technologies: vec!["React".into()],
        features: vec![],
        categories: vec![],
        image_url: None,
        user_id: None,
        contact_name: None,
        contact_email: None,
        deadline: None,
        urgent: false,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_project_update_only_touches_present_fields() {
    let mut project = sample_project();

    ProjectUpdate {
        title: Some("Grid Runner 2".into()),
        categories: Some(vec!["featured".into()]),
        ..Default::default()
    }
    .apply_to(&mut project);

    assert_eq!(project.title, "Grid Runner 2");
    assert_eq!(project.categories, vec!["featured"]);
    assert_eq!(project.description, "long");
    assert_eq!(project.technologies, vec!["React"]);
}

#[test]
fn test_project_is_inquiry() {
    let mut project = sample_project();
    assert!(!project.is_inquiry());

    project.contact_email = Some("a@b.io".into());
    assert!(project.is_inquiry());
}
