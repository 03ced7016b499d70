//! In-memory record store behind the create endpoints.
//!
//! Stands in for the persistence collaborator; records live for the process
//! lifetime only.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};

/// Which create operation produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Enquiry,
    InHouseRequest,
    CareerApplication,
    Registration,
    InvoiceRequest,
}

/// A stored submission.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Generated request identifier, e.g. "7KQ2M9XA"
    pub id: String,

    pub kind: RecordKind,

    /// The submitted fields, minus any attachment bytes
    pub fields: Map<String, Value>,

    /// Attachment file name, when one was uploaded
    pub attachment_name: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// In-memory store of all submissions received so far.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a submission and return its generated request ID.
    pub fn insert(
        &mut self,
        kind: RecordKind,
        fields: Map<String, Value>,
        attachment_name: Option<String>,
    ) -> String {
        let id = new_request_id();
        self.records.push(Record {
            id: id.clone(),
            kind,
            fields,
            attachment_name,
            created_at: Utc::now(),
        });
        id
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn count_kind(&self, kind: RecordKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

/// Unambiguous uppercase alphabet (no 0/O, 1/I/L).
const ID_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";
const ID_LENGTH: usize = 8;

/// Generate a display-friendly request ID, e.g. "7KQ2M9XA".
pub fn new_request_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
