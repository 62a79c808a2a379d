pub mod list_projects_query;
pub mod project_dto;
pub mod project_list_response;
pub mod project_response;
#[allow(clippy::module_inception)]
pub mod projects;
