pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    contact::{contact::submit_contact, contact_response::ContactResponse},
    demo_mode::{
        demo_mode::{get_demo_mode, toggle_demo_mode},
        demo_mode_response::DemoModeResponse,
        toggle_demo_mode_request::ToggleDemoModeRequest,
        toggle_demo_mode_response::ToggleDemoModeResponse,
    },
    descriptions::{
        description_pair_dto::DescriptionPairDto,
        descriptions::{
            DESCRIPTION_SOURCE_HEADER, generate_description, get_generated_description,
            list_generated_descriptions, save_generated_description,
        },
        generate_description_request::GenerateDescriptionRequest,
        generated_description_dto::GeneratedDescriptionDto,
        generated_description_response::GeneratedDescriptionResponse,
        list_descriptions_query::ListDescriptionsQuery,
        save_description_request::SaveDescriptionRequest,
        save_description_response::SaveDescriptionResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    projects::{
        list_projects_query::{ListProjectsQuery, MAX_PROJECT_LIMIT},
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{get_project, list_projects},
    },
};
pub use app_state::AppState;

pub use crate::routes::{build_router, build_router_with_static};
