//! Wizard state: field values, step transitions, and submission status.

use crate::definition::{FieldRule, FormDefinition, StepDef};
use crate::error::WizardError;
use crate::validate::{validate_step, ValidationErrors};
use dialcode::detect_dial_code;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone)]
struct WizardField {
    value: FieldValue,
    touched: bool,
}

/// A selected file attachment (career form CV upload).
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// All values entered into a wizard so far.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, WizardField>,
    attachment: Option<Attachment>,
}

impl FormData {
    /// One entry per declared field: text fields start empty, consent
    /// checkboxes start unticked.
    pub fn for_steps(steps: &[StepDef]) -> Self {
        let mut fields = HashMap::new();
        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            let value = match field.rule {
                FieldRule::Consent => FieldValue::Flag(false),
                _ => FieldValue::Text(String::new()),
            };
            fields.insert(
                field.name.to_string(),
                WizardField {
                    value,
                    touched: false,
                },
            );
        }
        Self {
            fields,
            attachment: None,
        }
    }

    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name).map(|f| &f.value) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.fields.get(name).map(|f| &f.value),
            Some(FieldValue::Flag(true))
        )
    }

    pub fn touched(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|f| f.touched)
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(
            name.to_string(),
            WizardField {
                value: FieldValue::Text(value.into()),
                touched: true,
            },
        );
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.fields.insert(
            name.to_string(),
            WizardField {
                value: FieldValue::Flag(value),
                touched: true,
            },
        );
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub(crate) fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    /// Field names and values in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), &v.value))
    }
}

/// Acknowledgment returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub id: String,
    pub message: String,
}

/// Submission lifecycle of a wizard instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Succeeded(SubmissionAck),
    Failed(String),
}

/// One mounted form instance: current step, entered values, last validation
/// result, and submission status. Owned by a single host; never shared.
pub struct Wizard {
    definition: Arc<FormDefinition>,
    current_step: usize,
    data: FormData,
    dial_code: String,
    errors: ValidationErrors,
    submission: SubmissionState,
}

impl Wizard {
    pub fn new(definition: Arc<FormDefinition>) -> Self {
        let data = FormData::for_steps(&definition.steps);
        let dial_code = definition.default_dial_code.to_string();
        Self {
            definition,
            current_step: 1,
            data,
            dial_code,
            errors: ValidationErrors::new(),
            submission: SubmissionState::Idle,
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.definition.total_steps()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Errors from the most recent refused transition or submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.submission, SubmissionState::Succeeded(_))
    }

    /// Currently selected dial code.
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Manual dial-code selection; unknown codes fall back to the
    /// registry's first entry.
    pub fn select_dial_code(&mut self, code: &str) {
        self.dial_code = self.definition.registry.lookup(code).dial_code.to_string();
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<(), WizardError> {
        let field = self
            .definition
            .field(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        match field.rule {
            FieldRule::Consent => Err(WizardError::WrongValueType(name.to_string())),
            _ => {
                self.data.set_text(name, value);
                Ok(())
            }
        }
    }

    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), WizardError> {
        let field = self
            .definition
            .field(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        match field.rule {
            FieldRule::Consent => {
                self.data.set_flag(name, value);
                Ok(())
            }
            _ => Err(WizardError::WrongValueType(name.to_string())),
        }
    }

    /// Keystroke handler for phone fields: stores the raw text unchanged and
    /// lets the detector update the selected dial code.
    pub fn input_phone(&mut self, name: &str, text: &str) -> Result<(), WizardError> {
        let field = self
            .definition
            .field(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        if !matches!(field.rule, FieldRule::Phone) {
            return Err(WizardError::WrongValueType(name.to_string()));
        }

        self.data.set_text(name, text);
        let detected = detect_dial_code(text, &self.dial_code, &self.definition.registry);
        if detected != self.dial_code {
            debug!(field = name, from = %self.dial_code, to = %detected, "Dial code detected");
            self.dial_code = detected;
        }
        Ok(())
    }

    /// Attach a file, enforcing the field's policy before the file ever
    /// enters the validated data. A rejected file leaves the slot empty.
    pub fn attach_file(&mut self, name: &str, attachment: Attachment) -> Result<(), WizardError> {
        let field = self
            .definition
            .field(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        let FieldRule::Attachment(policy) = &field.rule else {
            return Err(WizardError::NotAnAttachmentField(name.to_string()));
        };

        if attachment.bytes.len() as u64 > policy.max_bytes {
            return Err(WizardError::AttachmentTooLarge);
        }
        if !policy.allows_type(&attachment.content_type) {
            return Err(WizardError::UnsupportedAttachmentType);
        }

        self.data.set_attachment(attachment);
        Ok(())
    }

    /// Transitions are refused while a submission is in flight and after a
    /// successful one (the host is expected to close the form).
    fn transitions_blocked(&self) -> bool {
        matches!(
            self.submission,
            SubmissionState::InFlight | SubmissionState::Succeeded(_)
        )
    }

    /// Advance to the next step if the current one validates. Returns false
    /// (and surfaces the error map) when the transition is refused.
    pub fn next(&mut self) -> bool {
        if self.transitions_blocked() {
            return false;
        }
        if self.current_step >= self.total_steps() {
            return false;
        }

        let step = &self.definition.steps[self.current_step - 1];
        let errors = validate_step(step, &self.data);
        if !errors.is_empty() {
            debug!(step = self.current_step, count = errors.len(), "Next refused");
            self.errors = errors;
            return false;
        }

        self.errors = ValidationErrors::new();
        self.current_step += 1;
        true
    }

    /// Go back one step. Never re-validates and never touches field values.
    pub fn back(&mut self) -> bool {
        if self.transitions_blocked() || self.current_step <= 1 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    /// Final gate before submission: re-validates every step, because back
    /// navigation does not. On failure the wizard returns to the earliest
    /// failing step with that step's errors.
    pub fn submit_attempt(&mut self) -> bool {
        if self.transitions_blocked() {
            return false;
        }
        if self.current_step != self.total_steps() {
            return false;
        }

        for (index, step) in self.definition.steps.iter().enumerate() {
            let errors = validate_step(step, &self.data);
            if !errors.is_empty() {
                debug!(step = index + 1, "Submit attempt failed validation");
                self.current_step = index + 1;
                self.errors = errors;
                return false;
            }
        }

        self.errors = ValidationErrors::new();
        true
    }

    /// Mark a submission as in flight; all transitions are refused until
    /// `complete_submission` is called.
    pub fn begin_submission(&mut self) {
        self.submission = SubmissionState::InFlight;
    }

    /// Record the outcome of the in-flight submission. A failure keeps the
    /// wizard on its current (last) step so the user can retry.
    pub fn complete_submission(&mut self, outcome: Result<SubmissionAck, String>) {
        self.submission = match outcome {
            Ok(ack) => SubmissionState::Succeeded(ack),
            Err(message) => SubmissionState::Failed(message),
        };
    }
}
