//! Built-in form definitions for the four enquiry flows.
//!
//! Each form keeps its own registry ordering and default dial code; the
//! differences between forms live entirely in this configuration.

use crate::definition::{
    AttachmentPolicy, FieldDef, FieldRule, FixedAnswerCaptcha, FormDefinition, StepDef,
};
use dialcode::Registry;
use std::sync::Arc;

/// Enquiry about a scheduled public course.
pub fn course_enquiry() -> Arc<FormDefinition> {
    Arc::new(FormDefinition {
        name: "course-enquiry",
        steps: vec![
            StepDef::new(vec![
                FieldDef::new("first_name", "First name", FieldRule::Required),
                FieldDef::new("last_name", "Last name", FieldRule::Required),
                FieldDef::new("email", "Email", FieldRule::Email),
                FieldDef::new("phone", "Phone number", FieldRule::Phone),
            ]),
            StepDef::new(vec![
                FieldDef::new("course_id", "Course", FieldRule::Required),
                FieldDef::new("course_title", "Course title", FieldRule::Required),
                FieldDef::new("schedule_preference", "Preferred schedule", FieldRule::Required),
                FieldDef::new("participants", "Number of participants", FieldRule::NumericMin(1.0)),
            ]),
            StepDef::new(vec![
                FieldDef::new("message", "Message", FieldRule::Optional),
                FieldDef::new("privacy_policy", "Privacy policy", FieldRule::Consent),
            ]),
        ],
        registry: Registry::gulf_first(),
        default_dial_code: "+971",
        endpoint: "/v1/enquiries",
        invoice_endpoint: None,
        payment_field: None,
    })
}

/// Request to run a course in-house at the client's premises.
pub fn in_house_request() -> Arc<FormDefinition> {
    Arc::new(FormDefinition {
        name: "in-house-request",
        steps: vec![
            StepDef::new(vec![
                FieldDef::new("company", "Company name", FieldRule::Required),
                FieldDef::new("contact_name", "Contact name", FieldRule::Required),
                FieldDef::new("email", "Email", FieldRule::Email),
                FieldDef::new("phone", "Phone number", FieldRule::Phone),
            ]),
            StepDef::new(vec![
                FieldDef::new("course_title", "Course title", FieldRule::Required),
                FieldDef::new("participants", "Number of participants", FieldRule::NumericMin(1.0)),
                FieldDef::new("address", "Address", FieldRule::Required),
                FieldDef::new("city", "City", FieldRule::Required),
                FieldDef::new("country", "Country", FieldRule::Required),
            ]),
            StepDef::new(vec![
                FieldDef::new("preferred_dates", "Preferred dates", FieldRule::Optional),
                FieldDef::new("privacy_policy", "Privacy policy", FieldRule::Consent),
                FieldDef::new(
                    "captcha",
                    "Verification answer",
                    FieldRule::Captcha(Arc::new(FixedAnswerCaptcha::new("What is 600 + 49?", "649"))),
                ),
            ]),
        ],
        registry: Registry::gulf_first(),
        default_dial_code: "+971",
        endpoint: "/v1/in-house-requests",
        invoice_endpoint: None,
        payment_field: None,
    })
}

/// Trainer/staff application with a CV upload.
pub fn career_application() -> Arc<FormDefinition> {
    Arc::new(FormDefinition {
        name: "career-application",
        steps: vec![
            StepDef::new(vec![
                FieldDef::new("full_name", "Full name", FieldRule::Required),
                FieldDef::new("email", "Email", FieldRule::Email),
                FieldDef::new("phone", "Phone number", FieldRule::Phone),
            ]),
            StepDef::new(vec![
                FieldDef::new("area_of_expertise", "Area of expertise", FieldRule::Required),
                FieldDef::new("cover_note", "Cover note", FieldRule::Optional),
                FieldDef::new("cv_file", "CV", FieldRule::Attachment(AttachmentPolicy::cv_documents())),
                FieldDef::new("privacy_policy", "Privacy policy", FieldRule::Consent),
            ]),
        ],
        // The career form lists countries alphabetically
        registry: Registry::alphabetical(),
        default_dial_code: "+971",
        endpoint: "/v1/career-applications",
        invoice_endpoint: None,
        payment_field: None,
    })
}

/// Registration for a scheduled course, with an invoice-request branch.
pub fn course_registration() -> Arc<FormDefinition> {
    Arc::new(FormDefinition {
        name: "course-registration",
        steps: vec![
            StepDef::new(vec![
                FieldDef::new("first_name", "First name", FieldRule::Required),
                FieldDef::new("last_name", "Last name", FieldRule::Required),
                FieldDef::new("email", "Email", FieldRule::Email),
                FieldDef::new("phone", "Phone number", FieldRule::Phone),
            ]),
            StepDef::new(vec![
                FieldDef::new("course_id", "Course", FieldRule::Required),
                FieldDef::new("schedule_id", "Schedule", FieldRule::Required),
                FieldDef::new("participants", "Number of participants", FieldRule::NumericMin(1.0)),
            ]),
            StepDef::new(vec![
                FieldDef::new("payment_method", "Payment method", FieldRule::Required),
                FieldDef::new("billing_address", "Billing address", FieldRule::Optional),
                FieldDef::new("privacy_policy", "Privacy policy", FieldRule::Consent),
            ]),
        ],
        registry: Registry::gulf_first(),
        default_dial_code: "+971",
        endpoint: "/v1/registrations",
        invoice_endpoint: Some("/v1/invoice-requests"),
        payment_field: Some("payment_method"),
    })
}
