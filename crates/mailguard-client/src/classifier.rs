//! Classification seam and its HTTP implementation

use std::time::Duration;

use mailguard_core::prelude::*;
use mailguard_core::{EmailText, Verdict};
use url::Url;

use crate::protocol::{self, CheckSpamRequest};

/// Classify one email.
///
/// Implementations send at most one request per call and never retry.
/// Blank text is rejected with [`Error::EmptyInput`] before anything is sent.
#[trait_variant::make(Classifier: Send)]
pub trait LocalClassifier {
    async fn classify(&self, text: &EmailText) -> Result<Verdict>;
}

/// Classifier backed by the remote `/api/check-spam` endpoint
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpClassifier {
    /// Create a classifier with a fresh `reqwest` client
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a classifier that reuses an existing client
    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            timeout: None,
        }
    }

    /// Abort requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                secs: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }
        } else {
            Error::network(err.to_string())
        }
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, text: &EmailText) -> Result<Verdict> {
        if text.is_blank() {
            return Err(Error::EmptyInput);
        }

        debug!(
            "POST {} ({} chars)",
            self.endpoint,
            text.char_count()
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&CheckSpamRequest {
                text: text.as_str(),
            });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Classification service returned {}", status);
            return Err(Error::ServiceStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let verdict = protocol::parse_response(&body)?;
        info!("Classification verdict: {}", verdict);
        Ok(verdict)
    }
}
