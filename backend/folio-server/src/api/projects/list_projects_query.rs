use crate::ApiError;

use folio_db::DEFAULT_PROJECT_LIMIT;

use serde::Deserialize;

/// Largest page a caller may ask for
pub const MAX_PROJECT_LIMIT: i64 = 200;

/// Query of `GET /api/projects`
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
}

impl ListProjectsQuery {
    /// Requested page size, clamped to [`MAX_PROJECT_LIMIT`]
    #[track_caller]
    pub fn limit(&self) -> Result<i64, ApiError> {
        let Some(raw) = self.limit.as_deref() else {
            return Ok(DEFAULT_PROJECT_LIMIT);
        };

        match raw.trim().parse::<i64>() {
            Ok(limit) if limit >= 1 => Ok(limit.min(MAX_PROJECT_LIMIT)),
            _ => Err(ApiError::validation(
                "limit",
                format!("limit must be a positive integer, got '{raw}'"),
            )),
        }
    }
}
