//! Error types for the enquiry API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("File size must be less than 5MB")]
    AttachmentTooLarge,

    #[error("File type must be PDF or Word document")]
    UnsupportedAttachmentType,

    #[error("Invalid multipart payload: {0}")]
    Multipart(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::AttachmentTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedAttachmentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Every failure keeps the {success, error} body contract
        let body = json!({
            "success": false,
            "error": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        ApiError::Multipart(e.to_string())
    }
}
