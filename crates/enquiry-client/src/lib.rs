//! HTTP submission pipeline for the enquiry forms.

mod client;
mod error;
mod pipeline;
mod types;

pub use client::EnquiryClient;
pub use error::{ClientError, GENERIC_FAILURE};
pub use pipeline::SubmissionPipeline;
pub use types::{ApiResponse, CreatedRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use form_wizard::{forms, Attachment, SubmissionState, Wizard};
    use serde_json::{json, Map};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pipeline_for(mock_server: &MockServer) -> SubmissionPipeline {
        SubmissionPipeline::new(EnquiryClient::new(mock_server.uri()).unwrap())
    }

    fn ack_body(id: &str, message: &str) -> serde_json::Value {
        json!({
            "success": true,
            "data": { "id": id, "message": message }
        })
    }

    fn filled_enquiry() -> Wizard {
        let mut wizard = Wizard::new(forms::course_enquiry());
        wizard.set_text("first_name", "Omar").unwrap();
        wizard.set_text("last_name", "Nasser").unwrap();
        wizard.set_text("email", "omar@example.com").unwrap();
        wizard.input_phone("phone", "0501234567").unwrap();
        assert!(wizard.next());

        wizard.set_text("course_id", "crs_201").unwrap();
        wizard.set_text("course_title", "Project Management").unwrap();
        wizard.set_text("schedule_preference", "2026-09-14 Dubai").unwrap();
        wizard.set_text("participants", "2").unwrap();
        assert!(wizard.next());

        wizard.set_flag("privacy_policy", true).unwrap();
        wizard
    }

    fn filled_registration(payment_method: &str) -> Wizard {
        let mut wizard = Wizard::new(forms::course_registration());
        wizard.set_text("first_name", "Huda").unwrap();
        wizard.set_text("last_name", "Rahimi").unwrap();
        wizard.set_text("email", "huda@example.com").unwrap();
        wizard.input_phone("phone", "0521234567").unwrap();
        assert!(wizard.next());

        wizard.set_text("course_id", "crs_310").unwrap();
        wizard.set_text("schedule_id", "sch_42").unwrap();
        wizard.set_text("participants", "1").unwrap();
        assert!(wizard.next());

        wizard.set_text("payment_method", payment_method).unwrap();
        wizard.set_flag("privacy_policy", true).unwrap();
        wizard
    }

    #[tokio::test]
    async fn test_course_enquiry_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/enquiries"))
            .and(body_partial_json(json!({
                "first_name": "Omar",
                "dial_code": "+971",
                "participants": 2.0
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ack_body("7KQ2M9XA", "Request ID: 7KQ2M9XA")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut wizard = filled_enquiry();
        let submitted = pipeline_for(&mock_server)
            .submit(&mut wizard, Map::new())
            .await;

        assert!(submitted);
        match wizard.submission() {
            SubmissionState::Succeeded(ack) => {
                assert_eq!(ack.id, "7KQ2M9XA");
                assert_eq!(ack.message, "Request ID: 7KQ2M9XA");
            }
            other => panic!("unexpected submission state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_message_surfaces() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/enquiries"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "success": false,
                "error": "No seats available for this schedule"
            })))
            .mount(&mock_server)
            .await;

        let mut wizard = filled_enquiry();
        let submitted = pipeline_for(&mock_server)
            .submit(&mut wizard, Map::new())
            .await;

        assert!(!submitted);
        assert_eq!(
            wizard.submission(),
            &SubmissionState::Failed("No seats available for this schedule".into())
        );
        // The wizard stays on its last step so the user can retry
        assert_eq!(wizard.current_step(), wizard.total_steps());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let pipeline = SubmissionPipeline::new(EnquiryClient::new("http://127.0.0.1:9").unwrap());

        let mut wizard = filled_enquiry();
        let submitted = pipeline.submit(&mut wizard, Map::new()).await;

        assert!(!submitted);
        assert_eq!(
            wizard.submission(),
            &SubmissionState::Failed(GENERIC_FAILURE.into())
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_fails_safely() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/enquiries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&mock_server)
            .await;

        let mut wizard = filled_enquiry();
        pipeline_for(&mock_server)
            .submit(&mut wizard, Map::new())
            .await;

        assert_eq!(
            wizard.submission(),
            &SubmissionState::Failed(GENERIC_FAILURE.into())
        );
    }

    #[tokio::test]
    async fn test_validation_failure_sends_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut wizard = filled_enquiry();
        assert!(wizard.back());
        // Not on the last step: submit must refuse before any request

        let submitted = pipeline_for(&mock_server)
            .submit(&mut wizard, Map::new())
            .await;

        assert!(!submitted);
        assert_eq!(wizard.submission(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_invoice_branch_calls_invoice_operation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/invoice-requests"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ack_body(
                "Q8B1N4ZT",
                "Your request awaits admin approval. Request ID: Q8B1N4ZT",
            )))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/registrations"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut wizard = filled_registration("invoice");
        let submitted = pipeline_for(&mock_server)
            .submit(&mut wizard, Map::new())
            .await;

        assert!(submitted);
        match wizard.submission() {
            SubmissionState::Succeeded(ack) => {
                assert!(ack.message.contains("awaits admin approval"));
            }
            other => panic!("unexpected submission state: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_card_branch_calls_registration_operation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/registrations"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ack_body("M3X7PW2K", "Request ID: M3X7PW2K")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut wizard = filled_registration("card");
        assert!(
            pipeline_for(&mock_server)
                .submit(&mut wizard, Map::new())
                .await
        );
    }

    #[tokio::test]
    async fn test_career_application_uploads_multipart() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/career-applications"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ack_body("C5D9R1VJ", "Request ID: C5D9R1VJ")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut wizard = Wizard::new(forms::career_application());
        wizard.set_text("full_name", "Leila Fares").unwrap();
        wizard.set_text("email", "leila@example.com").unwrap();
        wizard.input_phone("phone", "0551234567").unwrap();
        assert!(wizard.next());

        wizard.set_text("area_of_expertise", "Finance").unwrap();
        wizard
            .attach_file(
                "cv_file",
                Attachment {
                    file_name: "cv.pdf".into(),
                    content_type: "application/pdf".into(),
                    bytes: b"%PDF-1.4 stub".to_vec(),
                },
            )
            .unwrap();
        wizard.set_flag("privacy_policy", true).unwrap();

        let submitted = pipeline_for(&mock_server)
            .submit(&mut wizard, Map::new())
            .await;

        assert!(submitted);
    }
}
