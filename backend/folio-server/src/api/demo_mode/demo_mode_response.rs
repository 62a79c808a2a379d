use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoModeResponse {
    pub demo_mode: bool,
}
