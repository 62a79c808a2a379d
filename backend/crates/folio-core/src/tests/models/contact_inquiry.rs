use crate::{ContactInquiry, CoreError};

use googletest::prelude::*;

fn valid_inquiry() -> ContactInquiry {
    ContactInquiry {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        course: Some("CS101".into()),
        deadline: Some("2026-12-01".into()),
        project_type: "ml".into(),
        description: "Need a sentiment classifier for my thesis".into(),
        urgent: true,
    }
}

fn field_of(err: CoreError) -> Option<String> {
    match err {
        CoreError::Validation { field, .. } => field,
    }
}

#[test]
fn given_valid_inquiry_when_validated_then_ok() {
    assert_that!(valid_inquiry().validate(), ok(anything()));
}

#[test]
fn given_short_name_when_validated_then_name_field_error() {
    let inquiry = ContactInquiry {
        name: "A".into(),
        ..valid_inquiry()
    };

    let err = inquiry.validate().unwrap_err();
    assert_that!(field_of(err), some(eq("name")));
}

#[test]
fn given_bad_emails_when_validated_then_email_field_error() {
    for email in ["", "ada", "ada@", "@example.com", "ada@example", "ada@@example.com", "a da@example.com"] {
        let inquiry = ContactInquiry {
            email: email.into(),
            ..valid_inquiry()
        };

        let err = inquiry.validate().unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("email"), "email: {email}");
    }
}

#[test]
fn given_missing_project_type_when_validated_then_project_type_field_error() {
    let inquiry = ContactInquiry {
        project_type: " ".into(),
        ..valid_inquiry()
    };

    let err = inquiry.validate().unwrap_err();
    assert_that!(field_of(err), some(eq("projectType")));
}

#[test]
fn given_short_description_when_validated_then_description_field_error() {
    let inquiry = ContactInquiry {
        description: "too short".into(),
        ..valid_inquiry()
    };

    let err = inquiry.validate().unwrap_err();
    assert_that!(field_of(err), some(eq("description")));
}

#[test]
fn given_course_when_converted_then_title_mentions_course_and_contact_fields_set() {
    let project = valid_inquiry().into_project();

    assert_that!(project.title, eq("CS101 project for Ada"));
    assert_that!(project.contact_name, some(eq("Ada")));
    assert_that!(project.contact_email, some(eq("ada@example.com")));
    assert_that!(project.project_type, eq("ml"));
    assert!(project.urgent);
    assert_that!(project.technologies, is_empty());
}

#[test]
fn given_no_course_when_converted_then_generic_title() {
    let inquiry = ContactInquiry {
        course: None,
        ..valid_inquiry()
    };

    assert_that!(inquiry.into_project().title, eq("Project request from Ada"));
}

#[test]
fn given_long_description_when_converted_then_short_description_is_capped() {
    let inquiry = ContactInquiry {
        description: "x".repeat(400),
        ..valid_inquiry()
    };

    let project = inquiry.into_project();
    assert_eq!(project.short_description.chars().count(), 150);
    assert_that!(project.short_description, ends_with("..."));
    assert_eq!(project.description.len(), 400);
}
