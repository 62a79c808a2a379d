pub mod contact;
pub mod demo_mode;
pub mod descriptions;
pub mod error;
pub mod extractors;
pub mod projects;
