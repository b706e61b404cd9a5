//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::checker::{CheckerEffect, CheckerEvent};
use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{keys::handle_key, mouse::handle_click, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Click { column, row } => match handle_click(state, column, row) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => {
            if state.checker.popup_visible() {
                return UpdateResult::none();
            }
            state.focus = Focus::Editor;
            // Normalise CRLF pastes so the text matches what was copied
            let text = text.replace("\r\n", "\n").replace('\r', "\n");
            checker_step(state, CheckerEvent::InsertStr(text))
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editing Messages
        // ─────────────────────────────────────────────────────────
        Message::InsertChar(c) => {
            state.focus = Focus::Editor;
            checker_step(state, CheckerEvent::Insert(c))
        }
        Message::DeleteBack => checker_step(state, CheckerEvent::DeleteBack),
        Message::ClearText => checker_step(state, CheckerEvent::ClearText),

        Message::ToggleFocus => {
            state.focus = state.focus.toggle();
            UpdateResult::none()
        }

        Message::FocusEditor => {
            state.focus = Focus::Editor;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Check Lifecycle Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => {
            if state.checker.text().is_blank() {
                debug!("Submit ignored: email text is blank");
            }
            checker_step(state, CheckerEvent::Submit)
        }

        Message::ClassificationCompleted {
            request_id,
            verdict,
        } => {
            if state.checker.pending_request() != Some(request_id) {
                warn!("Ignoring verdict for stale request {}", request_id);
            }
            checker_step(
                state,
                CheckerEvent::Classified {
                    request_id,
                    verdict,
                },
            )
        }

        Message::ClassificationFailed { request_id, reason } => {
            if state.checker.pending_request() != Some(request_id) {
                warn!("Ignoring failure for stale request {}", request_id);
            }
            checker_step(
                state,
                CheckerEvent::ClassificationFailed { request_id, reason },
            )
        }

        Message::DismissPopup => checker_step(state, CheckerEvent::DismissPopup),
    }
}

/// Apply a checker event and turn its effect into an event-loop action
fn checker_step(state: &mut AppState, event: CheckerEvent) -> UpdateResult {
    match state.apply(event) {
        Some(CheckerEffect::Classify { request_id, text }) => {
            UpdateResult::action(UpdateAction::ClassifyEmail { request_id, text })
        }
        None => UpdateResult::none(),
    }
}
