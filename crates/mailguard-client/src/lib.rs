//! # mailguard-client - Classification Service Client
//!
//! Talks to the external spam classifier over HTTP. The model itself lives
//! behind `POST /api/check-spam`; this crate owns the wire format and the one
//! request made per check.
//!
//! ## Public API
//!
//! - [`Classifier`] / [`LocalClassifier`] - async classification seam
//! - [`HttpClassifier`] - `reqwest`-backed implementation
//! - [`protocol`] - request/response bodies and response validation

pub mod classifier;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use classifier::{Classifier, HttpClassifier, LocalClassifier};
pub use protocol::{parse_response, CheckSpamRequest, CheckSpamResponse, DEFAULT_ENDPOINT};
