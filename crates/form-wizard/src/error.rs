//! Wizard error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {0} does not accept this value type")]
    WrongValueType(String),

    #[error("Field {0} is not an attachment field")]
    NotAnAttachmentField(String),

    #[error("File size must be less than 5MB")]
    AttachmentTooLarge,

    #[error("File type must be PDF or Word document")]
    UnsupportedAttachmentType,
}
