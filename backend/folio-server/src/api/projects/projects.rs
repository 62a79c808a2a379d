//! Project REST API handlers
//!
//! Read-only handlers for listing and retrieving projects.

use crate::{
    ApiError, ApiResult, AppState, ListProjectsQuery, ProjectDto, ProjectListResponse,
    ProjectResponse,
};

use folio_db::ProjectRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
};

/// GET /api/projects?type=&category=&limit=
///
/// Newest first. Filters combine.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResult<Json<ProjectListResponse>> {
    let limit = query.limit()?;
    let repo = ProjectRepository::new(state.pool.clone());

    let projects = match (query.category.as_deref(), query.project_type.as_deref()) {
        (Some(category), Some(project_type)) => {
            repo.find_by_category_and_type(category, project_type, limit)
                .await?
        }
        (Some(category), None) => repo.find_by_category(category, limit).await?,
        (None, Some(project_type)) => repo.find_by_type(project_type, limit).await?,
        (None, None) => repo.find_all(limit).await?,
    };

    Ok(Json(ProjectListResponse {
        projects: projects.into_iter().map(ProjectDto::from).collect(),
    }))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id: i64 = id.parse()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}
