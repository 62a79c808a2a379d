//! Contact form submissions.
//!
//! A submission is stored as a [`NewProject`] carrying the contact fields, so
//! requests show up next to the portfolio entries they may become.

use crate::{CoreError, NewProject, Result as CoreErrorResult, SHORT_DESCRIPTION_TARGET_CHARS};

use serde::Deserialize;

const MIN_NAME_CHARS: usize = 2;
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Body of the contact form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub course: Option<String>,
    /// Free-form date string as sent by the form
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub urgent: bool,
}

impl ContactInquiry {
    /// Same rules the form applies client side
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(CoreError::field(
                "name",
                format!("Name must be at least {MIN_NAME_CHARS} characters"),
            ));
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(CoreError::field("email", "Invalid email address"));
        }

        if self.project_type.trim().is_empty() {
            return Err(CoreError::field("projectType", "Please select a project type"));
        }

        if self.description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(CoreError::field(
                "description",
                format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"),
            ));
        }

        Ok(())
    }

    /// Convert into a project record. Call after [`validate`](Self::validate).
    pub fn into_project(self) -> NewProject {
        let name = self.name.trim().to_string();
        let description = self.description.trim().to_string();

        let title = match self.course.as_deref().map(str::trim) {
            Some(course) if !course.is_empty() => format!("{course} project for {name}"),
            _ => format!("Project request from {name}"),
        };

        let short_description = truncate_chars(&description, SHORT_DESCRIPTION_TARGET_CHARS);

        NewProject {
            title,
            short_description,
            description,
            project_type: self.project_type.trim().to_string(),
            contact_name: Some(name),
            contact_email: Some(self.email.trim().to_string()),
            deadline: self.deadline.filter(|d| !d.trim().is_empty()),
            urgent: self.urgent,
            ..NewProject::default()
        }
    }
}

/// One `@` with a non-empty local part and a dotted domain
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}
