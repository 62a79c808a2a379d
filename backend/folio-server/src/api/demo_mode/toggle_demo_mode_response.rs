use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleDemoModeResponse {
    pub success: bool,
    pub demo_mode: bool,
    pub message: String,
}
