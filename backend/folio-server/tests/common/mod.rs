#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_ai::{AiError, CompletionClient, DescriptionGenerator, Result as AiErrorResult, RuntimeSettings};
use folio_core::NewUser;
use folio_db::UserRepository;
use folio_server::AppState;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Completion client with a fixed answer that counts its calls
pub struct StubClient {
    content: Option<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubClient {
    pub fn answering(short_description: &str, description: &str) -> Self {
        let content = serde_json::json!({
            "shortDescription": short_description,
            "description": description,
        })
        .to_string();

        Self {
            content: Some(content),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            content: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete_json(&self, _prompt: &str) -> AiErrorResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AiError::status(500, "stub failure".to_string()));
        }
        Ok(self.content.clone())
    }
}

/// Completion client that panics inside the generator task
pub struct PanickingClient;

#[async_trait]
impl CompletionClient for PanickingClient {
    async fn complete_json(&self, _prompt: &str) -> AiErrorResult<Option<String>> {
        panic!("completion client exploded");
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state(
    client: Arc<dyn CompletionClient>,
    demo_mode: bool,
) -> AppState {
    let pool = create_test_pool().await;
    let generator = DescriptionGenerator::new(client, RuntimeSettings::new(demo_mode));
    AppState::new(pool, generator)
}

/// AppState in live mode with a client that answers "Stub short." / "Stub long."
pub async fn create_default_app_state() -> AppState {
    create_test_app_state(Arc::new(StubClient::answering("Stub short.", "Stub long.")), false).await
}

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> i64 {
    UserRepository::new(pool.clone())
        .create(&NewUser {
            username: username.to_string(),
            password: "secret".to_string(),
        })
        .await
        .expect("Failed to create test user")
        .id
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
