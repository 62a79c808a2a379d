pub mod contact_inquiry;
pub mod description_pair;
pub mod description_request;
pub mod description_source;
pub mod generated_description;
pub mod generation;
pub mod project;
pub mod project_type;
pub mod user;
