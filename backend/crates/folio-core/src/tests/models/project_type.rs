use crate::ProjectType;

#[test]
fn test_project_type_from_known_keys() {
    assert_eq!(ProjectType::from("web"), ProjectType::Web);
    assert_eq!(ProjectType::from("ml"), ProjectType::MachineLearning);
    assert_eq!(ProjectType::from("data"), ProjectType::DataAnalysis);
    assert_eq!(ProjectType::from("auto"), ProjectType::Automation);
}

#[test]
fn test_project_type_unknown_is_kept_verbatim() {
    let project_type = ProjectType::from("quantum");

    assert_eq!(project_type, ProjectType::Other("quantum".to_string()));
    assert_eq!(project_type.as_str(), "quantum");
    assert_eq!(project_type.display_name(), "quantum");
    assert!(!project_type.is_known());
}

#[test]
fn test_project_type_keys_are_case_sensitive() {
    assert_eq!(ProjectType::from("ML"), ProjectType::Other("ML".to_string()));
}

#[test]
fn test_project_type_display_names() {
    assert_eq!(ProjectType::Web.display_name(), "web development");
    assert_eq!(ProjectType::MachineLearning.display_name(), "machine learning");
    assert_eq!(ProjectType::DataAnalysis.display_name(), "data analysis");
    assert_eq!(ProjectType::Automation.display_name(), "automation");
}

#[test]
fn test_project_type_from_owned_string_matches_borrowed() {
    for key in ["web", "ml", "data", "auto", "blockchain"] {
        assert_eq!(ProjectType::from(key.to_string()), ProjectType::from(key));
    }
}

#[test]
fn test_project_type_display_uses_key() {
    assert_eq!(ProjectType::MachineLearning.to_string(), "ml");
    assert_eq!(String::from(ProjectType::Automation), "auto");
}
