//! API request and response types.

use serde::{Deserialize, Serialize};

/// Response envelope shared by every create endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Payload of a successful create operation.
#[derive(Debug, Serialize)]
pub struct CreatedRecord {
    pub id: String,
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}

/// Per-kind record counts.
#[derive(Debug, Serialize)]
pub struct RecordCounts {
    pub enquiries: usize,
    pub in_house_requests: usize,
    pub career_applications: usize,
    pub registrations: usize,
    pub invoice_requests: usize,
    pub total: usize,
}

/// Course enquiry submission.
///
/// All fields default so that missing keys surface as the same friendly
/// "required" errors as empty ones.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnquiryRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dial_code: String,
    pub course_id: String,
    pub course_title: String,
    pub schedule_preference: String,
    pub participants: f64,
    pub message: String,
    pub privacy_policy: bool,
}

/// In-house course request submission.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InHouseRequest {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub dial_code: String,
    pub course_title: String,
    pub participants: f64,
    pub address: String,
    pub city: String,
    pub country: String,
    pub preferred_dates: String,
    pub captcha: String,
    pub privacy_policy: bool,
}

/// Course registration / invoice request submission (same shape; the route
/// decides which operation runs).
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dial_code: String,
    pub course_id: String,
    pub schedule_id: String,
    pub participants: f64,
    pub payment_method: String,
    pub billing_address: String,
    pub privacy_policy: bool,
}
