//! Headless mode - NDJSON event output without a terminal UI
//!
//! Classifies a single email and writes one JSON object per line to stdout,
//! so scripts can drive the classifier without parsing the TUI.
//!
//! # Example Output
//!
//! ```json
//! {"event":"metrics_loaded","accuracy":0.95,"precision":0.9,"recall":0.88,"f1":0.89,"timestamp":1704700001000}
//! {"event":"check_started","request_id":0,"chars":23,"timestamp":1704700001002}
//! {"event":"check_completed","request_id":0,"is_spam":true,"heading":"Suspicious Email Detected!","signals":{"words":5,"links":0,"shortened_links":0,"spam_keywords":3,...},"timestamp":1704700001210}
//! ```

use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};

use mailguard_app::actions::classify_email;
use mailguard_app::checker::{CheckerState, RequestId};
use mailguard_app::handler::update;
use mailguard_app::message::Message;
use mailguard_app::state::{AppState, MetricsPanel};
use mailguard_app::UpdateAction;
use mailguard_client::Classifier;
use mailguard_core::{EmailSignals, EmailText};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Metrics payload validated
    MetricsLoaded {
        accuracy: f64,
        precision: f64,
        recall: f64,
        f1: f64,
        timestamp: i64,
    },

    /// Metrics payload missing or rejected
    MetricsUnavailable { reason: String, timestamp: i64 },

    /// Request dispatched to the classifier
    CheckStarted {
        request_id: RequestId,
        chars: usize,
        timestamp: i64,
    },

    /// Classifier returned a verdict
    CheckCompleted {
        request_id: RequestId,
        is_spam: bool,
        heading: String,
        /// Local heuristics for the submitted text
        signals: EmailSignals,
        timestamp: i64,
    },

    /// Blank input; nothing was sent
    CheckSkipped { reason: String, timestamp: i64 },

    /// Classifier call failed
    CheckFailed {
        request_id: RequestId,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn from_metrics(panel: &MetricsPanel) -> Self {
        match panel {
            MetricsPanel::Loaded(m) => Self::MetricsLoaded {
                accuracy: m.accuracy(),
                precision: m.precision(),
                recall: m.recall(),
                f1: m.f1(),
                timestamp: Self::now(),
            },
            MetricsPanel::Unavailable { reason } => Self::MetricsUnavailable {
                reason: reason.clone(),
                timestamp: Self::now(),
            },
        }
    }

    pub fn check_started(request_id: RequestId, text: &EmailText) -> Self {
        Self::CheckStarted {
            request_id,
            chars: text.char_count(),
            timestamp: Self::now(),
        }
    }

    pub fn check_skipped(reason: &str) -> Self {
        Self::CheckSkipped {
            reason: reason.to_string(),
            timestamp: Self::now(),
        }
    }
}

/// Run one check and report it; returns `true` unless the check failed
pub async fn run_headless<C>(classifier: &C, metrics_path: &Path, text: EmailText) -> bool
where
    C: Classifier + Sync,
{
    let mut out = io::stdout();
    run_headless_to(classifier, metrics_path, text, &mut out).await
}

/// [`run_headless`] writing to any sink
pub async fn run_headless_to<C, W>(
    classifier: &C,
    metrics_path: &Path,
    text: EmailText,
    out: &mut W,
) -> bool
where
    C: Classifier + Sync,
    W: Write,
{
    info!("Mail Guard starting in HEADLESS mode");

    let metrics = MetricsPanel::load(metrics_path);
    write_event(out, &HeadlessEvent::from_metrics(&metrics));

    let mut state = AppState::new();
    state.metrics = metrics;
    state.checker = CheckerState::with_text(text);

    let submitted = update(&mut state, Message::Submit);
    let Some(UpdateAction::ClassifyEmail { request_id, text }) = submitted.action else {
        write_event(out, &HeadlessEvent::check_skipped("email text is blank"));
        return true;
    };

    write_event(out, &HeadlessEvent::check_started(request_id, &text));
    let reply = classify_email(classifier, request_id, &text).await;
    update(&mut state, reply);

    if let Some(verdict) = state.checker.verdict() {
        write_event(
            out,
            &HeadlessEvent::CheckCompleted {
                request_id,
                is_spam: verdict.is_spam(),
                heading: verdict.presentation().heading.to_string(),
                signals: state.signals(),
                timestamp: HeadlessEvent::now(),
            },
        );
        true
    } else {
        let reason = state
            .checker
            .failure()
            .unwrap_or("no verdict received")
            .to_string();
        write_event(
            out,
            &HeadlessEvent::CheckFailed {
                request_id,
                error: reason,
                timestamp: HeadlessEvent::now(),
            },
        );
        false
    }
}

fn write_event<W: Write>(out: &mut W, event: &HeadlessEvent) {
    if let Err(e) = event.write_to(out) {
        error!("Failed to write headless event: {}", e);
    }
}
