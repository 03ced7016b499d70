//! Form definitions: the configuration a wizard instance is built from.

use dialcode::Registry;
use std::sync::Arc;

/// A complete form definition: ordered steps, the dial-code registry and
/// default code for its phone fields, and where submissions go.
pub struct FormDefinition {
    /// Stable identifier, e.g. "course-enquiry"
    pub name: &'static str,

    /// Steps in order; step indices are 1-based positions in this list
    pub steps: Vec<StepDef>,

    /// Dial-code registry in this form's configured ordering
    pub registry: Registry,

    /// Dial code selected before the detector finds a better one
    pub default_dial_code: &'static str,

    /// Submission endpoint path, e.g. "/v1/enquiries"
    pub endpoint: &'static str,

    /// Alternate endpoint used when `payment_field` holds "invoice"
    pub invoice_endpoint: Option<&'static str>,

    /// Field that discriminates between the two submit operations
    pub payment_field: Option<&'static str>,
}

impl FormDefinition {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Step definition by 1-based index.
    pub fn step(&self, index: usize) -> Option<&StepDef> {
        self.steps.get(index.checked_sub(1)?)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }
}

/// One step of a form: the fields shown (and validated) together.
pub struct StepDef {
    pub fields: Vec<FieldDef>,
}

impl StepDef {
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }
}

/// A declared form field with its validation rule.
pub struct FieldDef {
    pub name: &'static str,

    /// Display label used in error messages, e.g. "First name"
    pub label: &'static str,

    pub rule: FieldRule,
}

impl FieldDef {
    pub fn new(name: &'static str, label: &'static str, rule: FieldRule) -> Self {
        Self { name, label, rule }
    }
}

/// Validation rule for a single field.
pub enum FieldRule {
    /// No validation; value is carried through as-is
    Optional,

    /// Non-empty trimmed value required
    Required,

    /// Required, plus a permissive local@domain.tld shape check
    Email,

    /// Required, parseable as a number, and at least the given minimum
    NumericMin(f64),

    /// Phone input; required, and every edit runs the dial-code detector
    Phone,

    /// Checkbox that must be ticked, e.g. privacy-policy acceptance
    Consent,

    /// Required answer checked by a pluggable verification step
    Captcha(Arc<dyn CaptchaCheck>),

    /// File attachment, constrained at selection time by the policy
    Attachment(AttachmentPolicy),
}

/// Pluggable captcha verification.
pub trait CaptchaCheck: Send + Sync {
    /// Challenge text shown next to the answer field.
    fn prompt(&self) -> &str;

    /// Whether the (trimmed) answer passes the challenge.
    fn verify(&self, answer: &str) -> bool;
}

/// Captcha with a fixed expected answer, as used by the in-house form.
pub struct FixedAnswerCaptcha {
    prompt: String,
    expected: String,
}

impl FixedAnswerCaptcha {
    pub fn new(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected: expected.into(),
        }
    }
}

impl CaptchaCheck for FixedAnswerCaptcha {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn verify(&self, answer: &str) -> bool {
        answer == self.expected
    }
}

/// Constraints applied when a file is selected, before validation ever runs.
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    /// Allow-listed MIME types
    pub allowed_types: &'static [&'static str],

    /// Maximum file size in bytes
    pub max_bytes: u64,
}

impl AttachmentPolicy {
    /// 5 MiB cap with the document types the career form accepts.
    pub fn cv_documents() -> Self {
        Self {
            allowed_types: &[
                "application/pdf",
                "application/msword",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ],
            max_bytes: 5 * 1024 * 1024,
        }
    }

    pub fn allows_type(&self, content_type: &str) -> bool {
        self.allowed_types.contains(&content_type)
    }
}
