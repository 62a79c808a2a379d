//! Prompt text for the description model.

use folio_core::{DESCRIPTION_TARGET_CHARS, DescriptionRequest, SHORT_DESCRIPTION_TARGET_CHARS};

/// Stand-in for an empty feature list
pub const FEATURES_PLACEHOLDER: &str = "innovative features";

const LIST_DELIMITER: &str = ", ";

/// Build the instruction sent to the model.
///
/// Asks for a JSON object with `shortDescription` and `description` keys
/// written in a cyberpunk voice. Pure function of its input.
pub fn build_prompt(request: &DescriptionRequest) -> String {
    let project_type = request.project_type.display_name();
    let technologies = request.technologies.join(LIST_DELIMITER);
    let features = if request.features.is_empty() {
        FEATURES_PLACEHOLDER.to_string()
    } else {
        request.features.join(LIST_DELIMITER)
    };

    format!(
        r#"Generate two project descriptions for a {project_type} project titled "{title}"
that uses technologies: {technologies}.
The project includes features such as {features}.

Format as JSON with these two elements:
1. "shortDescription": A concise single-sentence overview (max {short_max} characters) with cyberpunk flair
2. "description": A detailed professional 3-paragraph description (max {long_max} chars total)
  - First paragraph: Overview of project purpose and goals
  - Second paragraph: Technical details and implementation highlights
  - Third paragraph: Benefits and outcomes for users

Use cyberpunk terminology and futuristic language throughout."#,
        title = request.project_title,
        short_max = SHORT_DESCRIPTION_TARGET_CHARS,
        long_max = DESCRIPTION_TARGET_CHARS,
    )
}
