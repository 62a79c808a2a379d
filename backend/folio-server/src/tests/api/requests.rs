use crate::{
    ApiError, GenerateDescriptionRequest, ListDescriptionsQuery, ListProjectsQuery,
    MAX_PROJECT_LIMIT, SaveDescriptionRequest, ToggleDemoModeRequest,
};

use folio_core::ProjectType;
use folio_db::DEFAULT_PROJECT_LIMIT;

use serde_json::json;

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_generate_request_defaults_features() {
    let req: GenerateDescriptionRequest = serde_json::from_value(json!({
        "projectTitle": "Tracker",
        "projectType": "ml",
        "technologies": ["Python"]
    }))
    .unwrap();

    let request = req.into_request().unwrap();

    assert_eq!(request.project_type, ProjectType::MachineLearning);
    assert!(request.features.is_empty());
}

#[test]
fn test_generate_request_rejects_missing_technologies() {
    let req: GenerateDescriptionRequest = serde_json::from_value(json!({
        "projectTitle": "Tracker",
        "projectType": "web"
    }))
    .unwrap();

    assert_eq!(field_of(req.into_request().unwrap_err()).as_deref(), Some("technologies"));
}

#[test]
fn test_generate_request_treats_empty_values_as_missing() {
    let cases = [
        (json!({"projectTitle": "", "projectType": "web", "technologies": ["Rust"]}), "projectTitle"),
        (json!({"projectTitle": "T", "projectType": null, "technologies": ["Rust"]}), "projectType"),
        (json!({"projectTitle": "T", "projectType": "web", "technologies": []}), "technologies"),
    ];

    for (body, field) in cases {
        let req: GenerateDescriptionRequest = serde_json::from_value(body).unwrap();
        assert_eq!(field_of(req.into_request().unwrap_err()).as_deref(), Some(field));
    }
}

#[test]
fn test_save_request_builds_saved_record() {
    let req: SaveDescriptionRequest = serde_json::from_value(json!({
        "shortDescription": "Short.",
        "description": "Long.",
        "projectTitle": "Tracker",
        "projectType": "quantum",
        "technologies": ["Qiskit"],
        "userId": 7
    }))
    .unwrap();

    let new_description = req.into_new_description().unwrap();

    assert!(new_description.saved);
    assert_eq!(new_description.project_type, "quantum");
    assert_eq!(new_description.user_id, Some(7));
    assert!(new_description.features.is_empty());
}

#[test]
fn test_save_request_reports_first_missing_field() {
    let req: SaveDescriptionRequest = serde_json::from_value(json!({
        "shortDescription": "Short.",
        "projectTitle": "Tracker",
        "projectType": "web",
        "technologies": ["Rust"]
    }))
    .unwrap();

    assert_eq!(field_of(req.into_new_description().unwrap_err()).as_deref(), Some("description"));
}

#[test]
fn test_list_query_user_id() {
    let none = ListDescriptionsQuery { user_id: None };
    let blank = ListDescriptionsQuery { user_id: Some(" ".into()) };
    let valid = ListDescriptionsQuery { user_id: Some("42".into()) };
    let invalid = ListDescriptionsQuery { user_id: Some("abc".into()) };

    assert_eq!(none.user_id().unwrap(), None);
    assert_eq!(blank.user_id().unwrap(), None);
    assert_eq!(valid.user_id().unwrap(), Some(42));
    assert_eq!(field_of(invalid.user_id().unwrap_err()).as_deref(), Some("userId"));
}

#[test]
fn test_projects_query_limit() {
    let query = |limit: Option<&str>| ListProjectsQuery {
        limit: limit.map(String::from),
        ..Default::default()
    };

    assert_eq!(query(None).limit().unwrap(), DEFAULT_PROJECT_LIMIT);
    assert_eq!(query(Some("5")).limit().unwrap(), 5);
    assert_eq!(query(Some("10000")).limit().unwrap(), MAX_PROJECT_LIMIT);
    assert!(query(Some("0")).limit().is_err());
    assert!(query(Some("ten")).limit().is_err());
}

#[test]
fn test_toggle_request_requires_boolean() {
    let parse = |body| serde_json::from_value::<ToggleDemoModeRequest>(body).unwrap();

    assert!(parse(json!({"enabled": true})).enabled().unwrap());
    assert!(!parse(json!({"enabled": false})).enabled().unwrap());
    assert!(parse(json!({"enabled": "yes"})).enabled().is_err());
    assert!(parse(json!({"enabled": 1})).enabled().is_err());
    assert!(parse(json!({})).enabled().is_err());
}
