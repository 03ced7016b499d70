//! HTTP client for the enquiry API's create endpoints.

use crate::error::ClientError;
use crate::types::{ApiResponse, CreatedRecord};
use form_wizard::{Attachment, SubmissionAck};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for the enquiry/registration create operations.
#[derive(Clone)]
pub struct EnquiryClient {
    client: Client,
    base_url: String,
}

impl EnquiryClient {
    /// Create a new client with a 30 second request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check whether the API is reachable.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// POST a flat JSON payload to a create endpoint.
    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        path: &str,
        payload: &Map<String, Value>,
    ) -> Result<SubmissionAck, ClientError> {
        debug!(path, "Submitting payload");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// POST a multipart payload: one text part per field plus the file.
    #[instrument(skip(self, payload, attachment))]
    pub async fn create_with_attachment(
        &self,
        path: &str,
        payload: &Map<String, Value>,
        attachment: &Attachment,
    ) -> Result<SubmissionAck, ClientError> {
        let mut form = Form::new();
        for (name, value) in payload {
            form = form.text(name.clone(), text_value(value));
        }

        let file = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)?;
        form = form.part("cv_file", file);

        debug!(path, file = %attachment.file_name, "Submitting multipart payload");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<SubmissionAck, ClientError> {
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<CreatedRecord> = response.json().await?;
            return match body.data {
                Some(record) if body.success => Ok(SubmissionAck {
                    id: record.id,
                    message: record.message,
                }),
                _ => Err(ClientError::MalformedResponse),
            };
        }

        // Prefer the server's own error text when the body carries one
        let message = response
            .json::<ApiResponse<CreatedRecord>>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

        warn!(status = status.as_u16(), %message, "Create request rejected");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
