//! Integration tests for the enquiry API.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use enquiry_api::api::{create_router_with_rate_limit, AppState, RateLimitState};
use enquiry_api::store::RecordStore;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let state = AppState::new(RecordStore::new());
    create_router_with_rate_limit(state, RateLimitState::permissive())
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn enquiry_payload() -> Value {
    json!({
        "first_name": "Omar",
        "last_name": "Nasser",
        "email": "omar@example.com",
        "phone": "0501234567",
        "dial_code": "+971",
        "course_id": "crs_201",
        "course_title": "Project Management",
        "schedule_preference": "2026-09-14 Dubai",
        "participants": 2,
        "privacy_policy": true
    })
}

fn registration_payload(payment_method: &str) -> Value {
    json!({
        "first_name": "Huda",
        "last_name": "Rahimi",
        "email": "huda@example.com",
        "phone": "0521234567",
        "dial_code": "+971",
        "course_id": "crs_310",
        "schedule_id": "sch_42",
        "participants": 1,
        "payment_method": payment_method,
        "privacy_policy": true
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["records"], 0);
}

#[tokio::test]
async fn test_create_enquiry_success() {
    let app = test_app();

    let response = app
        .oneshot(json_request("/v1/enquiries", enquiry_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);

    let id = body["data"]["id"].as_str().unwrap();
    assert_eq!(id.len(), 8);
    assert_eq!(
        body["data"]["message"].as_str().unwrap(),
        format!("Request ID: {}", id)
    );
}

#[tokio::test]
async fn test_create_enquiry_missing_field() {
    let app = test_app();

    let mut payload = enquiry_payload();
    payload["first_name"] = json!("");

    let response = app
        .oneshot(json_request("/v1/enquiries", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "First name is required");
}

#[tokio::test]
async fn test_create_enquiry_rejects_bad_email() {
    let app = test_app();

    let mut payload = enquiry_payload();
    payload["email"] = json!("omar@nowhere");

    let response = app
        .oneshot(json_request("/v1/enquiries", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Please enter a valid email address");
}

#[tokio::test]
async fn test_create_enquiry_rejects_zero_participants() {
    let app = test_app();

    let mut payload = enquiry_payload();
    payload["participants"] = json!(0);

    let response = app
        .oneshot(json_request("/v1/enquiries", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Number of participants must be at least 1");
}

#[tokio::test]
async fn test_registration_and_invoice_messages_differ() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "/v1/registrations",
            registration_payload("card"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Registration confirmed."));

    let response = app
        .oneshot(json_request(
            "/v1/invoice-requests",
            registration_payload("invoice"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("awaits admin approval"));
}

#[tokio::test]
async fn test_in_house_request_success() {
    let app = test_app();

    let payload = json!({
        "company": "Acme Trading",
        "contact_name": "Sara Haddad",
        "email": "sara@acme.example",
        "phone": "0501234567",
        "dial_code": "+971",
        "course_title": "Leadership Essentials",
        "participants": 12,
        "address": "Sheikh Zayed Road 1",
        "city": "Dubai",
        "country": "United Arab Emirates",
        "captcha": "649",
        "privacy_policy": true
    });

    let response = app
        .oneshot(json_request("/v1/in-house-requests", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
}

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn career_request(cv_bytes: &[u8], cv_type: &str) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in [
        ("full_name", "Leila Fares"),
        ("email", "leila@example.com"),
        ("phone", "0551234567"),
        ("dial_code", "+971"),
        ("area_of_expertise", "Finance"),
        ("privacy_policy", "true"),
    ] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"cv_file\"; \
             filename=\"cv.pdf\"\r\nContent-Type: {cv_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(cv_bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/v1/career-applications")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_career_application_success() {
    let app = test_app();

    let response = app
        .oneshot(career_request(b"%PDF-1.4 stub", "application/pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_career_application_rejects_oversized_cv() {
    let app = test_app();

    let six_mb = vec![0u8; 6 * 1024 * 1024];
    let response = app
        .oneshot(career_request(&six_mb, "application/pdf"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "File size must be less than 5MB");
}

#[tokio::test]
async fn test_career_application_rejects_wrong_type() {
    let app = test_app();

    let response = app
        .oneshot(career_request(b"just text", "text/plain"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_record_counts() {
    let app = test_app();

    app.clone()
        .oneshot(json_request("/v1/enquiries", enquiry_payload()))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "/v1/invoice-requests",
            registration_payload("invoice"),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/records")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["enquiries"], 1);
    assert_eq!(body["invoice_requests"], 1);
    assert_eq!(body["registrations"], 0);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_rate_limiting() {
    let state = AppState::new(RecordStore::new());
    let app = create_router_with_rate_limit(state, RateLimitState::new(1));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}
