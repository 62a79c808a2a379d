use crate::ApiError;

use serde::Deserialize;

/// Query of `GET /api/generated-descriptions`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDescriptionsQuery {
    /// Kept as text so a non-numeric id yields a JSON validation error
    pub user_id: Option<String>,
}

impl ListDescriptionsQuery {
    /// None when no user was given
    #[track_caller]
    pub fn user_id(&self) -> Result<Option<i64>, ApiError> {
        match self.user_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
                ApiError::validation("userId", format!("Invalid userId: {raw}"))
            }),
        }
    }
}
