//! Wire types shared with the enquiry API.

use serde::{Deserialize, Serialize};

/// Envelope every create endpoint answers with: 2xx carries
/// `{success: true, data}`, 4xx/5xx carries `{success: false, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Payload of a successful create operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    /// Generated request identifier, e.g. "7KQ2M9XA"
    pub id: String,

    /// Human-readable acknowledgment, e.g. "Request ID: 7KQ2M9XA"
    pub message: String,
}
