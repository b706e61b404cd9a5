//! Checker screen state machine
//!
//! The checker is a plain value advanced by [`reduce`]. Every transition of
//! the submit → await → render lifecycle goes through that one function, so
//! the phases below are the only states the screen can be in:
//!
//! ```text
//!            Submit (non-blank)           Classified
//!   Idle ─────────────────────▶ Submitting ──────────▶ Resolved (popup open)
//!    ▲                              │
//!    │  edit text                   │ ClassificationFailed
//!    └──────────── Failed ◀─────────┘
//! ```
//!
//! Invariants held by construction:
//! - loading is true only while the phase is `Submitting`
//! - the popup is visible only while a verdict is stored

use mailguard_core::{EmailText, Verdict};

/// Identifies one submission so its response can be matched to it
pub type RequestId = u64;

/// Phase of the check lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckPhase {
    /// Text editable, nothing in flight
    #[default]
    Idle,
    /// Request dispatched, awaiting the classifier
    Submitting { request_id: RequestId },
    /// Verdict received for the last submission
    Resolved { verdict: Verdict },
    /// Last submission failed; `reason` is shown inline
    Failed { reason: String },
}

/// Inputs to the checker state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerEvent {
    /// Append a character to the email text
    Insert(char),
    /// Append a pasted block of text
    InsertStr(String),
    /// Delete the last character
    DeleteBack,
    /// Clear the email text
    ClearText,
    /// User pressed the check trigger
    Submit,
    /// Classifier answered
    Classified {
        request_id: RequestId,
        verdict: Verdict,
    },
    /// Classifier call failed
    ClassificationFailed {
        request_id: RequestId,
        reason: String,
    },
    /// Close the result popup
    DismissPopup,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerEffect {
    /// Send `text` to the classifier
    Classify {
        request_id: RequestId,
        text: EmailText,
    },
}

/// Result of one [`reduce`] step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CheckerState,
    pub effect: Option<CheckerEffect>,
}

impl Transition {
    fn to(state: CheckerState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Snapshot of the checker screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckerState {
    text: EmailText,
    phase: CheckPhase,
    verdict: Option<Verdict>,
    popup_visible: bool,
    next_request_id: RequestId,
}

impl CheckerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-filled text (headless mode, tests)
    pub fn with_text(text: impl Into<EmailText>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &EmailText {
        &self.text
    }

    pub fn phase(&self) -> &CheckPhase {
        &self.phase
    }

    /// Most recent verdict; kept after the popup is dismissed
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, CheckPhase::Submitting { .. })
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    /// Whether the check trigger is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.text.is_blank()
    }

    /// Inline failure reason, if the last submission failed
    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            CheckPhase::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Request id of the in-flight submission
    pub fn pending_request(&self) -> Option<RequestId> {
        match self.phase {
            CheckPhase::Submitting { request_id } => Some(request_id),
            _ => None,
        }
    }

    fn edited(mut self) -> Self {
        if matches!(
            self.phase,
            CheckPhase::Resolved { .. } | CheckPhase::Failed { .. }
        ) {
            self.phase = CheckPhase::Idle;
        }
        self
    }
}

/// Advance the checker by one event.
///
/// Pure: the input state is never mutated and the only way to talk to the
/// outside world is the returned [`CheckerEffect`].
pub fn reduce(state: &CheckerState, event: CheckerEvent) -> Transition {
    let mut next = state.clone();

    match event {
        // Edits stay live while a request is in flight; the request
        // already carries its own copy of the text.
        CheckerEvent::Insert(c) => {
            next.text.push(c);
            Transition::to(next.edited())
        }

        CheckerEvent::InsertStr(s) => {
            if s.is_empty() {
                return Transition::to(next);
            }
            next.text.push_str(&s);
            Transition::to(next.edited())
        }

        CheckerEvent::DeleteBack => {
            if next.text.pop().is_none() {
                return Transition::to(next);
            }
            Transition::to(next.edited())
        }

        CheckerEvent::ClearText => {
            if next.text.as_str().is_empty() {
                return Transition::to(next);
            }
            next.text.clear();
            Transition::to(next.edited())
        }

        CheckerEvent::Submit => {
            if !next.can_submit() {
                return Transition::to(next);
            }
            let request_id = next.next_request_id;
            next.next_request_id += 1;
            next.phase = CheckPhase::Submitting { request_id };
            next.popup_visible = false;
            let text = next.text.clone();
            Transition {
                state: next,
                effect: Some(CheckerEffect::Classify { request_id, text }),
            }
        }

        CheckerEvent::Classified {
            request_id,
            verdict,
        } => {
            if next.pending_request() != Some(request_id) {
                return Transition::to(next);
            }
            next.verdict = Some(verdict);
            next.phase = CheckPhase::Resolved { verdict };
            next.popup_visible = true;
            Transition::to(next)
        }

        CheckerEvent::ClassificationFailed { request_id, reason } => {
            if next.pending_request() != Some(request_id) {
                return Transition::to(next);
            }
            next.phase = CheckPhase::Failed { reason };
            Transition::to(next)
        }

        CheckerEvent::DismissPopup => {
            next.popup_visible = false;
            Transition::to(next)
        }
    }
}
