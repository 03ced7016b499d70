//! Submission client errors.

use thiserror::Error;

/// Fallback shown when the server gives us nothing better.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Malformed response from server")]
    MalformedResponse,
}

impl ClientError {
    /// Message suitable for the submission-failure banner. Server-provided
    /// error text is passed through; transport and decoding failures get the
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
