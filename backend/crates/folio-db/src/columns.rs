//! Column codecs shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};

/// Encode a string list as a JSON array
pub(crate) fn encode_list(table: &'static str, values: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(values)
        .map_err(|e| DbError::decode(table, format!("Cannot encode list column: {}", e)))
}

/// Decode a JSON array column. NULL and empty text read as an empty list.
pub(crate) fn decode_list(table: &'static str, raw: Option<String>) -> DbErrorResult<Vec<String>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(text) => serde_json::from_str(text)
            .map_err(|e| DbError::decode(table, format!("Invalid JSON list column: {}", e))),
    }
}

pub(crate) fn decode_timestamp(
    table: &'static str,
    column: &str,
    ts: i64,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| DbError::decode(table, format!("Invalid timestamp in {}", column)))
}
