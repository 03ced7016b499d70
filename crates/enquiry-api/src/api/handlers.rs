//! HTTP request handlers.

use super::types::{
    ApiResponse, CreatedRecord, EnquiryRequest, HealthResponse, InHouseRequest, RecordCounts,
    RegistrationRequest,
};
use super::AppState;
use crate::error::ApiError;
use crate::store::RecordKind;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

/// MIME types accepted for CV uploads.
const CV_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum CV size: 5 MiB.
const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        records: store.count(),
    })
}

/// Per-kind record counts for the back office.
pub async fn list_records(State(state): State<AppState>) -> Json<RecordCounts> {
    let store = state.store.read().await;
    Json(RecordCounts {
        enquiries: store.count_kind(RecordKind::Enquiry),
        in_house_requests: store.count_kind(RecordKind::InHouseRequest),
        career_applications: store.count_kind(RecordKind::CareerApplication),
        registrations: store.count_kind(RecordKind::Registration),
        invoice_requests: store.count_kind(RecordKind::InvoiceRequest),
        total: store.count(),
    })
}

/// POST /v1/enquiries
pub async fn create_enquiry(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<CreatedRecord>>, ApiError> {
    let request: EnquiryRequest = parse(payload)?;

    require(&request.first_name, "First name")?;
    require(&request.last_name, "Last name")?;
    require_email(&request.email)?;
    require(&request.phone, "Phone number")?;
    require(&request.course_id, "Course")?;
    require(&request.course_title, "Course title")?;
    require(&request.schedule_preference, "Preferred schedule")?;
    require_min(request.participants, 1.0, "Number of participants")?;

    let id = state
        .store
        .write()
        .await
        .insert(RecordKind::Enquiry, to_fields(&request)?, None);

    info!(%id, course = %request.course_id, "Enquiry created");

    Ok(Json(ApiResponse::success(CreatedRecord {
        message: format!("Request ID: {}", id),
        id,
    })))
}

/// POST /v1/in-house-requests
pub async fn create_in_house_request(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<CreatedRecord>>, ApiError> {
    let request: InHouseRequest = parse(payload)?;

    require(&request.company, "Company name")?;
    require(&request.contact_name, "Contact name")?;
    require_email(&request.email)?;
    require(&request.phone, "Phone number")?;
    require(&request.course_title, "Course title")?;
    require_min(request.participants, 1.0, "Number of participants")?;
    require(&request.address, "Address")?;
    require(&request.city, "City")?;
    require(&request.country, "Country")?;
    // Captcha verification is the form's concern; the answer is only echoed
    require(&request.captcha, "Verification answer")?;

    let id = state
        .store
        .write()
        .await
        .insert(RecordKind::InHouseRequest, to_fields(&request)?, None);

    info!(%id, company = %request.company, "In-house request created");

    Ok(Json(ApiResponse::success(CreatedRecord {
        message: format!("Request ID: {}", id),
        id,
    })))
}

/// POST /v1/career-applications (multipart: fields plus the CV file)
pub async fn create_career_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<CreatedRecord>>, ApiError> {
    let mut fields = Map::new();
    let mut attachment_name = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "cv_file" {
            let file_name = field.file_name().unwrap_or("cv").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();

            if !CV_TYPES.contains(&content_type.as_str()) {
                warn!(%file_name, %content_type, "CV rejected: unsupported type");
                return Err(ApiError::UnsupportedAttachmentType);
            }

            let bytes = field.bytes().await?;
            if bytes.len() as u64 > MAX_CV_BYTES {
                warn!(%file_name, size = bytes.len(), "CV rejected: too large");
                return Err(ApiError::AttachmentTooLarge);
            }

            // Bytes are not persisted by the in-memory store
            attachment_name = Some(file_name);
        } else {
            let text = field.text().await?;
            fields.insert(name, Value::String(text));
        }
    }

    require(text_field(&fields, "full_name"), "Full name")?;
    require_email(text_field(&fields, "email"))?;
    require(text_field(&fields, "phone"), "Phone number")?;
    require(text_field(&fields, "area_of_expertise"), "Area of expertise")?;
    if attachment_name.is_none() {
        return Err(ApiError::Validation("CV is required".to_string()));
    }

    let id = state
        .store
        .write()
        .await
        .insert(RecordKind::CareerApplication, fields, attachment_name);

    info!(%id, "Career application created");

    Ok(Json(ApiResponse::success(CreatedRecord {
        message: format!("Request ID: {}", id),
        id,
    })))
}

/// POST /v1/registrations
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<CreatedRecord>>, ApiError> {
    let request = validated_registration(payload)?;

    let id = state
        .store
        .write()
        .await
        .insert(RecordKind::Registration, to_fields(&request)?, None);

    info!(%id, schedule = %request.schedule_id, "Registration created");

    Ok(Json(ApiResponse::success(CreatedRecord {
        message: format!("Registration confirmed. Request ID: {}", id),
        id,
    })))
}

/// POST /v1/invoice-requests
pub async fn create_invoice_request(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<CreatedRecord>>, ApiError> {
    let request = validated_registration(payload)?;

    let id = state
        .store
        .write()
        .await
        .insert(RecordKind::InvoiceRequest, to_fields(&request)?, None);

    info!(%id, schedule = %request.schedule_id, "Invoice request created");

    Ok(Json(ApiResponse::success(CreatedRecord {
        message: format!(
            "Your request awaits admin approval. Request ID: {}",
            id
        ),
        id,
    })))
}

fn validated_registration(payload: Value) -> Result<RegistrationRequest, ApiError> {
    let request: RegistrationRequest = parse(payload)?;

    require(&request.first_name, "First name")?;
    require(&request.last_name, "Last name")?;
    require_email(&request.email)?;
    require(&request.phone, "Phone number")?;
    require(&request.course_id, "Course")?;
    require(&request.schedule_id, "Schedule")?;
    require_min(request.participants, 1.0, "Number of participants")?;
    require(&request.payment_method, "Payment method")?;

    Ok(request)
}

fn parse<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Validation(e.to_string()))
}

fn to_fields<T: Serialize>(request: &T) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(request) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::Internal("Payload is not an object".to_string())),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

fn text_field<'a>(fields: &'a Map<String, Value>, key: &str) -> &'a str {
    fields.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn require(value: &str, label: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", label)));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<(), ApiError> {
    require(value, "Email")?;
    let trimmed = value.trim();
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain.find('.').is_some_and(|i| i > 0 && i + 1 < domain.len())
        });
    if !valid {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

fn require_min(value: f64, min: f64, label: &str) -> Result<(), ApiError> {
    if !value.is_finite() || value < min {
        return Err(ApiError::Validation(format!(
            "{} must be at least {}",
            label, min
        )));
    }
    Ok(())
}
