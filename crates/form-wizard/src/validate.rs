//! Per-step field validation.

use crate::definition::{FieldDef, FieldRule, StepDef};
use crate::wizard::FormData;
use std::collections::BTreeMap;

/// Field name -> error message. An absent key means the field is valid.
pub type ValidationErrors = BTreeMap<String, String>;

/// Validate every field declared on a step.
///
/// Always returns a freshly built map: callers replace their previous result
/// wholesale, so errors for since-corrected fields never linger.
pub fn validate_step(step: &StepDef, data: &FormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in &step.fields {
        if let Some(message) = check_field(field, data) {
            errors.insert(field.name.to_string(), message);
        }
    }

    errors
}

fn check_field(field: &FieldDef, data: &FormData) -> Option<String> {
    let text = data.text(field.name);
    let trimmed = text.trim();

    match &field.rule {
        FieldRule::Optional => None,

        FieldRule::Required | FieldRule::Phone => {
            trimmed.is_empty().then(|| required(field.label))
        }

        FieldRule::Email => {
            if trimmed.is_empty() {
                Some(required(field.label))
            } else if !looks_like_email(trimmed) {
                Some("Please enter a valid email address".to_string())
            } else {
                None
            }
        }

        FieldRule::NumericMin(min) => {
            if trimmed.is_empty() {
                Some(required(field.label))
            } else {
                match trimmed.parse::<f64>() {
                    Ok(n) if n >= *min => None,
                    Ok(_) => Some(format!("{} must be at least {}", field.label, min)),
                    Err(_) => Some(format!("{} must be a number", field.label)),
                }
            }
        }

        FieldRule::Consent => (!data.flag(field.name)).then(|| required(field.label)),

        FieldRule::Captcha(check) => {
            if trimmed.is_empty() {
                Some(required(field.label))
            } else if !check.verify(trimmed) {
                Some("CAPTCHA verification failed".to_string())
            } else {
                None
            }
        }

        // Type and size are enforced at selection time; here only presence
        FieldRule::Attachment(_) => data.attachment().is_none().then(|| required(field.label)),
    }
}

fn required(label: &str) -> String {
    format!("{} is required", label)
}

/// Permissive email shape: one "@" with a non-empty local part, and a "."
/// somewhere after the "@" with characters on both sides of it.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(i) => i > 0 && i + 1 < domain.len(),
        None => false,
    }
}
