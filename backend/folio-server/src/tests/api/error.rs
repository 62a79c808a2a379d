use crate::ApiError;

use folio_core::CoreError;
use folio_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response = ApiError::validation("projectTitle", "Title is required").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "projectTitle");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let response = ApiError::internal("boom").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = ApiError::bad_request("not json").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "not json");
}

#[test]
fn test_row_not_found_maps_to_not_found() {
    let error = ApiError::from(DbError::from(sqlx::Error::RowNotFound));

    assert!(matches!(error, ApiError::NotFound { .. }));
}

#[test]
fn test_other_db_errors_map_to_internal() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    assert!(matches!(error, ApiError::Internal { .. }));
}

#[test]
fn test_core_validation_keeps_field() {
    let error = ApiError::from(CoreError::field("email", "Invalid email"));

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("email"));
            assert_eq!(message, "Invalid email");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_id_maps_to_validation() {
    let parse_error = "abc".parse::<i64>().unwrap_err();

    assert!(matches!(ApiError::from(parse_error), ApiError::Validation { .. }));
}
