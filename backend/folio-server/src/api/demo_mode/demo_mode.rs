//! Demo mode REST API handlers
//!
//! The flag lives in the shared `RuntimeSettings`; the generator sees a
//! toggle on its next call.

use crate::{
    ApiJson, ApiResult, AppState, DemoModeResponse, ToggleDemoModeRequest, ToggleDemoModeResponse,
};

use axum::{Json, extract::State};

/// POST /api/toggle-demo-mode
pub async fn toggle_demo_mode(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ToggleDemoModeRequest>,
) -> ApiResult<Json<ToggleDemoModeResponse>> {
    let enabled = req.enabled()?;
    let previous = state.settings.set_demo_mode(enabled);

    let status = if enabled { "enabled" } else { "disabled" };
    if previous != enabled {
        log::info!("Demo mode {}", status);
    }

    Ok(Json(ToggleDemoModeResponse {
        success: true,
        demo_mode: enabled,
        message: format!("Demo mode {}", status),
    }))
}

/// GET /api/demo-mode
pub async fn get_demo_mode(State(state): State<AppState>) -> Json<DemoModeResponse> {
    Json(DemoModeResponse {
        demo_mode: state.settings.demo_mode(),
    })
}
