use crate::{ApiError, ApiJson};

use axum::body::Body;
use axum::extract::FromRequest;
use http::Request;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Payload {
    name: String,
}

fn json_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_valid_body_is_extracted() {
    let ApiJson(payload) = ApiJson::<Payload>::from_request(json_request(r#"{"name":"Ada"}"#), &())
        .await
        .unwrap();

    assert_eq!(payload.name, "Ada");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let result = ApiJson::<Payload>::from_request(json_request("{not json"), &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"name":"Ada"}"#))
        .unwrap();

    let result = ApiJson::<Payload>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
