//! Last-resort text for project types without a canned entry.

use folio_core::{DescriptionPair, DescriptionRequest};

/// Technologies mentioned in templated text
const MAX_TEMPLATED_TECHNOLOGIES: usize = 3;

const TECHNOLOGIES_PLACEHOLDER: &str = "modern technologies";

/// Build a description from the request alone.
///
/// Uses the raw project type key, not its display name, and at most the first
/// three technologies.
pub fn templated_description(request: &DescriptionRequest) -> DescriptionPair {
    let project_type = request.project_type.as_str();
    let technologies = if request.technologies.is_empty() {
        TECHNOLOGIES_PLACEHOLDER.to_string()
    } else {
        request
            .technologies
            .iter()
            .take(MAX_TEMPLATED_TECHNOLOGIES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let short_description =
        format!("A cutting-edge {project_type} project built with {technologies}.");
    let description = format!(
        "This {project_type} project leverages {technologies} to create an innovative solution that pushes the boundaries of what's possible.\n\n\
The implementation focuses on clean architecture, solid performance and a maintainable codebase that can grow with new requirements.\n\n\
Users benefit from a reliable, well-documented system delivered on schedule and ready to impress."
    );

    DescriptionPair::new(short_description, description)
}
