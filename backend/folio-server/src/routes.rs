use crate::{
    ApiError, AppState, generate_description, get_demo_mode, get_generated_description,
    get_project, health, list_generated_descriptions, list_projects, save_generated_description,
    submit_contact, toggle_demo_mode,
};

use axum::{
    Router,
    http::Uri,
    routing::{any, get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

const INDEX_FILE: &str = "index.html";

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    build_router_with_static(state, None)
}

/// Build the router, serving the single-page app from `static_dir` when given.
/// Unknown non-API paths fall back to its `index.html`.
pub fn build_router_with_static(state: AppState, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Description generator
        .route("/api/generate-description", post(generate_description))
        .route(
            "/api/save-generated-description",
            post(save_generated_description),
        )
        .route(
            "/api/generated-descriptions",
            get(list_generated_descriptions),
        )
        .route(
            "/api/generated-descriptions/{id}",
            get(get_generated_description),
        )
        // Demo mode
        .route("/api/toggle-demo-mode", post(toggle_demo_mode))
        .route("/api/demo-mode", get(get_demo_mode))
        // Contact form and portfolio
        .route("/api/contact", post(submit_contact))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        // Unknown API paths never reach the static fallback
        .route("/api/{*rest}", any(api_not_found))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => {
            let index = std::path::Path::new(dir).join(INDEX_FILE);
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No API route for {}", uri.path()))
}
