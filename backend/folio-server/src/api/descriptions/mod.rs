pub mod description_pair_dto;
#[allow(clippy::module_inception)]
pub mod descriptions;
pub mod generate_description_request;
pub mod generated_description_dto;
pub mod generated_description_response;
pub mod list_descriptions_query;
pub mod save_description_request;
pub mod save_description_response;
