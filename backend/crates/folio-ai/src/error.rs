use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures talking to the completion API.
/// The generator recovers from all of them by substituting text.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("No API key configured {location}")]
    MissingApiKey { location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Completion API returned status {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Completion API returned no choices {location}")]
    NoChoices { location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl AiError {
    #[track_caller]
    pub fn missing_api_key() -> Self {
        AiError::MissingApiKey {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status: u16, body: String) -> Self {
        AiError::Status {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_choices() -> Self {
        AiError::NoChoices {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AiError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AiError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AiError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        AiError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
