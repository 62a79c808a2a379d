//! Contact form REST API handler

use crate::{ApiJson, ApiResult, AppState, ContactResponse};

use folio_core::ContactInquiry;
use folio_db::ProjectRepository;

use axum::{Json, extract::State};

/// POST /api/contact
///
/// Validates the inquiry and stores it as a project request.
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(inquiry): ApiJson<ContactInquiry>,
) -> ApiResult<Json<ContactResponse>> {
    inquiry.validate()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.create(&inquiry.into_project()).await?;

    log::info!(
        "Received project request {} (urgent: {})",
        project.id,
        project.urgent
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you! Your project request has been received.".to_string(),
        project_id: project.id,
    }))
}
