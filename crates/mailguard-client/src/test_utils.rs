//! Test utilities for classifier consumers
//!
//! Provides a [`StaticClassifier`] that answers every call with a fixed
//! outcome and records what it was asked, so app-level tests can drive the
//! full check lifecycle without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use mailguard_core::{EmailText, Error, Result, Verdict};

use crate::classifier::Classifier;

/// Canned outcome returned by [`StaticClassifier`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticOutcome {
    Verdict(Verdict),
    NetworkFailure(String),
    ServiceStatus(u16),
    MalformedResponse(String),
}

/// Classifier that always returns the same outcome
#[derive(Debug)]
pub struct StaticClassifier {
    outcome: StaticOutcome,
    calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl StaticClassifier {
    pub fn new(outcome: StaticOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn spam() -> Self {
        Self::new(StaticOutcome::Verdict(Verdict::Spam))
    }

    pub fn not_spam() -> Self {
        Self::new(StaticOutcome::Verdict(Verdict::NotSpam))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(StaticOutcome::NetworkFailure(message.to_string()))
    }

    /// Number of requests that reached the "service" (blank text excluded)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Text of the most recent request
    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().ok().and_then(|t| t.clone())
    }
}

impl Classifier for StaticClassifier {
    async fn classify(&self, text: &EmailText) -> Result<Verdict> {
        if text.is_blank() {
            return Err(Error::EmptyInput);
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_text.lock() {
            *last = Some(text.as_str().to_string());
        }

        match &self.outcome {
            StaticOutcome::Verdict(v) => Ok(*v),
            StaticOutcome::NetworkFailure(msg) => Err(Error::network(msg.clone())),
            StaticOutcome::ServiceStatus(status) => Err(Error::ServiceStatus { status: *status }),
            StaticOutcome::MalformedResponse(msg) => Err(Error::malformed_response(msg.clone())),
        }
    }
}
