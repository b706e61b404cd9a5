//! Wire format of the classification service
//!
//! Request:  `POST /api/check-spam` with `{"text": "<email>"}`
//! Response: `{"is_spam": true|false}`

use mailguard_core::prelude::*;
use mailguard_core::Verdict;
use serde::{Deserialize, Serialize};

/// Default service location (local development server)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/check-spam";

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct CheckSpamRequest<'a> {
    pub text: &'a str,
}

/// Response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CheckSpamResponse {
    pub is_spam: bool,
}

impl From<CheckSpamResponse> for Verdict {
    fn from(response: CheckSpamResponse) -> Self {
        Verdict::from_is_spam(response.is_spam)
    }
}

/// Validate a response body and extract the verdict.
///
/// A missing `is_spam` field or a non-boolean value is a
/// [`Error::MalformedResponse`]; extra fields are ignored.
pub fn parse_response(body: &str) -> Result<Verdict> {
    let response: CheckSpamResponse = serde_json::from_str(body).map_err(|e| {
        debug!("Rejected classification response {:?}: {}", body, e);
        Error::malformed_response(e.to_string())
    })?;
    Ok(response.into())
}
