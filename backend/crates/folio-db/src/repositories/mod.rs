pub mod generated_description_repository;
pub mod project_repository;
pub mod user_repository;
