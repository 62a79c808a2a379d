use crate::ApiError;

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/toggle-demo-mode`.
/// `enabled` is checked by hand so a wrong type is a validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ToggleDemoModeRequest {
    pub enabled: Option<Value>,
}

impl ToggleDemoModeRequest {
    #[track_caller]
    pub fn enabled(&self) -> Result<bool, ApiError> {
        self.enabled
            .as_ref()
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                ApiError::validation("enabled", "Invalid request: 'enabled' must be a boolean")
            })
    }
}
