//! Description generator REST API handlers

use crate::{
    ApiError, ApiJson, ApiResult, AppState, DescriptionPairDto, GenerateDescriptionRequest,
    GeneratedDescriptionDto, GeneratedDescriptionResponse, ListDescriptionsQuery,
    SaveDescriptionRequest, SaveDescriptionResponse,
};

use folio_db::GeneratedDescriptionRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

/// Response header naming the branch that produced a generated description
pub const DESCRIPTION_SOURCE_HEADER: &str = "x-description-source";

/// POST /api/generate-description
///
/// Always answers with two non-empty strings once the input is valid; the
/// generator substitutes canned or templated text when the model is unusable.
pub async fn generate_description(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<GenerateDescriptionRequest>,
) -> ApiResult<impl IntoResponse> {
    let request = req.into_request()?;
    let title = request.project_title.clone();

    let generator = state.generator.clone();
    let generation = tokio::spawn(async move { generator.generate(&request).await })
        .await
        .map_err(|e| {
            log::error!("Description generation task failed: {}", e);
            ApiError::internal("Failed to generate description")
        })?;

    log::info!(
        "Generated description for '{}' (source: {})",
        title,
        generation.source
    );

    Ok((
        [(DESCRIPTION_SOURCE_HEADER, generation.source.as_str())],
        Json(DescriptionPairDto::from(generation.into_pair())),
    ))
}

/// POST /api/save-generated-description
pub async fn save_generated_description(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SaveDescriptionRequest>,
) -> ApiResult<Json<SaveDescriptionResponse>> {
    let new_description = req.into_new_description()?;

    let repo = GeneratedDescriptionRepository::new(state.pool.clone());
    let saved = repo.create(&new_description).await?;

    log::info!(
        "Saved generated description {} for '{}'",
        saved.id,
        saved.project_title
    );

    Ok(Json(SaveDescriptionResponse {
        success: true,
        description: saved.into(),
        message: "Description saved successfully".to_string(),
    }))
}

/// GET /api/generated-descriptions?userId=
///
/// Saved descriptions of one user, newest first. No user means no results.
pub async fn list_generated_descriptions(
    State(state): State<AppState>,
    Query(query): Query<ListDescriptionsQuery>,
) -> ApiResult<Json<Vec<GeneratedDescriptionDto>>> {
    let Some(user_id) = query.user_id()? else {
        return Ok(Json(Vec::new()));
    };

    let repo = GeneratedDescriptionRepository::new(state.pool.clone());
    let descriptions = repo.find_saved_by_user(user_id).await?;

    Ok(Json(
        descriptions
            .into_iter()
            .map(GeneratedDescriptionDto::from)
            .collect(),
    ))
}

/// GET /api/generated-descriptions/{id}
pub async fn get_generated_description(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GeneratedDescriptionResponse>> {
    let id: i64 = id.parse()?;

    let repo = GeneratedDescriptionRepository::new(state.pool.clone());
    let description = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Generated description {} not found", id)))?;

    Ok(Json(GeneratedDescriptionResponse {
        description: description.into(),
    }))
}
