//! Drives a wizard through its final submission.

use crate::client::EnquiryClient;
use form_wizard::{FieldRule, FieldValue, Wizard};
use serde_json::{Map, Number, Value};
use tracing::{debug, instrument};

/// Fire-once submission pipeline: validates, builds the payload, calls the
/// create endpoint, and writes the outcome back into the wizard.
///
/// The returned future is cancellable by dropping it; a host tearing the
/// form down mid-flight simply never observes the outcome.
pub struct SubmissionPipeline {
    client: EnquiryClient,
}

impl SubmissionPipeline {
    pub fn new(client: EnquiryClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &EnquiryClient {
        &self.client
    }

    /// Attempt to submit the wizard. Returns true when the wizard reached
    /// `Succeeded`; on validation failure no request is sent and the
    /// wizard's error map says why.
    ///
    /// `context` carries host-supplied identifiers (course id, schedule id,
    /// page source) merged into the payload after the wizard's own fields.
    #[instrument(skip(self, wizard, context), fields(form = wizard.definition().name))]
    pub async fn submit(&self, wizard: &mut Wizard, context: Map<String, Value>) -> bool {
        if !wizard.submit_attempt() {
            debug!("Submission blocked by validation");
            return false;
        }

        let endpoint = endpoint_for(wizard);
        let payload = build_payload(wizard, context);
        let attachment = wizard.data().attachment().cloned();

        wizard.begin_submission();

        let result = match attachment {
            Some(file) => {
                self.client
                    .create_with_attachment(endpoint, &payload, &file)
                    .await
            }
            None => self.client.create(endpoint, &payload).await,
        };

        wizard.complete_submission(result.map_err(|e| e.user_message()));
        wizard.is_submitted()
    }
}

/// Pick the endpoint, honoring the invoice-request branch when the form's
/// payment field selects it.
fn endpoint_for(wizard: &Wizard) -> &'static str {
    let definition = wizard.definition();
    if let (Some(field), Some(invoice)) = (definition.payment_field, definition.invoice_endpoint) {
        if wizard.data().text(field) == "invoice" {
            return invoice;
        }
    }
    definition.endpoint
}

/// Flatten the wizard's fields into the request body. Numeric fields are
/// sent as numbers, consent flags as booleans, everything else as strings.
/// The attachment field travels as a multipart part, never in the body.
fn build_payload(wizard: &Wizard, context: Map<String, Value>) -> Map<String, Value> {
    let mut payload = Map::new();

    for (name, value) in wizard.data().iter() {
        let Some(field) = wizard.definition().field(name) else {
            continue;
        };
        if matches!(field.rule, FieldRule::Attachment(_)) {
            continue;
        }

        let json_value = match value {
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Text(s) => match field.rule {
                FieldRule::NumericMin(_) => s
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(s.clone())),
                _ => Value::String(s.clone()),
            },
        };
        payload.insert(name.to_string(), json_value);
    }

    payload.insert(
        "dial_code".to_string(),
        Value::String(wizard.dial_code().to_string()),
    );

    for (key, value) in context {
        payload.insert(key, value);
    }

    payload
}
