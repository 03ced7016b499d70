//! Generic multi-step form wizard: field definitions, per-step validation,
//! and the step state machine shared by all four enquiry forms.

mod definition;
mod error;
pub mod forms;
mod validate;
mod wizard;

pub use definition::{
    AttachmentPolicy, CaptchaCheck, FieldDef, FieldRule, FixedAnswerCaptcha, FormDefinition,
    StepDef,
};
pub use error::WizardError;
pub use validate::{validate_step, ValidationErrors};
pub use wizard::{Attachment, FieldValue, FormData, SubmissionAck, SubmissionState, Wizard};
