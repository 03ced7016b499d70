//! Country dial-code registry and phone-number country detection.

mod detect;
mod registry;

pub use detect::detect_dial_code;
pub use registry::{CountryEntry, Registry};
