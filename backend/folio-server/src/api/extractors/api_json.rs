//! JSON body extractor with API-shaped rejections

use crate::ApiError;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

/// Like [`axum::Json`], but a bad body becomes a 400 `BAD_REQUEST` JSON error
/// instead of axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}
