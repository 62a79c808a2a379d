pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::contact_inquiry::ContactInquiry;
pub use models::description_pair::DescriptionPair;
pub use models::description_request::DescriptionRequest;
pub use models::description_source::DescriptionSource;
pub use models::generated_description::{GeneratedDescription, NewGeneratedDescription};
pub use models::generation::Generation;
pub use models::project::{NewProject, Project, ProjectUpdate};
pub use models::project_type::ProjectType;
pub use models::user::{NewUser, User};

pub use error_location::ErrorLocation;

/// Soft cap the prompt asks the model to respect for the one-line summary
pub const SHORT_DESCRIPTION_TARGET_CHARS: usize = 150;
/// Soft cap the prompt asks the model to respect for the three-paragraph body
pub const DESCRIPTION_TARGET_CHARS: usize = 600;
