//! Enquiry API: the HTTP boundary the form submission pipeline posts to.

pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use error::ApiError;
pub use store::{Record, RecordKind, RecordStore};
