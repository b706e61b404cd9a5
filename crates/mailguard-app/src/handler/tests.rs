//! Tests for handler module

use super::*;
use crate::checker::{CheckPhase, CheckerState};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::region::{PopupRegions, Region};
use crate::state::{AppPhase, AppState, Focus};
use mailguard_core::Verdict;

/// Drive a state through submit and a spam verdict so the popup is open
fn state_with_popup() -> AppState {
    let mut state = AppState::new();
    state.checker = CheckerState::with_text("Win a free prize now!!!");
    let result = update(&mut state, Message::Submit);
    let Some(UpdateAction::ClassifyEmail { request_id, .. }) = result.action else {
        panic!("expected classify action");
    };
    update(
        &mut state,
        Message::ClassificationCompleted {
            request_id,
            verdict: Verdict::Spam,
        },
    );
    state.hit_regions.popup = Some(PopupRegions {
        panel: Region::new(20, 5, 40, 12),
        close_button: Region::new(55, 5, 3, 1),
    });
    state
}

/// Run a message and every follow-up it produces, returning the last action
fn dispatch(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    let mut next = Some(message);
    let mut action = None;
    while let Some(msg) = next {
        let result = update(state, msg);
        next = result.message;
        action = result.action.or(action);
    }
    action
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        let msg = handle_key(state, InputKey::Char(c)).expect("char maps to a message");
        update(state, msg);
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_escape_key_quits_blank_editor() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
}

#[test]
fn test_escape_key_keeps_draft() {
    let mut state = AppState::new();
    update(&mut state, Message::Paste("Dear team, the invoice".into()));

    assert_eq!(handle_key(&state, InputKey::Esc), None);
    dispatch(&mut state, Message::Key(InputKey::Esc));

    assert!(!state.should_quit());
    assert_eq!(state.checker.text().as_str(), "Dear team, the invoice");
}

#[test]
fn test_escape_key_quits_after_clearing_draft() {
    let mut state = AppState::new();
    update(&mut state, Message::Paste("draft".into()));
    dispatch(&mut state, Message::Key(InputKey::CharCtrl('u')));

    dispatch(&mut state, Message::Key(InputKey::Esc));
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_popup() {
    let state = state_with_popup();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
}

#[test]
fn test_q_types_into_editor() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::InsertChar('q'))
    );
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_updates_text() {
    let mut state = AppState::new();
    type_text(&mut state, "hello");
    assert_eq!(state.checker.text().as_str(), "hello");
}

#[test]
fn test_enter_in_editor_inserts_newline() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::InsertChar('\n'))
    );
}

#[test]
fn test_backspace_and_clear() {
    let mut state = AppState::new();
    type_text(&mut state, "abc");

    dispatch(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.checker.text().as_str(), "ab");

    dispatch(&mut state, Message::Key(InputKey::CharCtrl('u')));
    assert!(state.checker.text().as_str().is_empty());
}

#[test]
fn test_paste_normalises_line_endings() {
    let mut state = AppState::new();
    update(&mut state, Message::Paste("line one\r\nline two\r".to_string()));
    assert_eq!(state.checker.text().as_str(), "line one\nline two\n");
}

#[test]
fn test_paste_ignored_while_popup_visible() {
    let mut state = state_with_popup();
    let before = state.checker.text().clone();
    update(&mut state, Message::Paste("more".to_string()));
    assert_eq!(state.checker.text(), &before);
}

#[test]
fn test_typing_and_paste_while_loading_edit_text() {
    let mut state = AppState::new();
    type_text(&mut state, "hello");
    let Some(UpdateAction::ClassifyEmail { request_id, text }) =
        dispatch(&mut state, Message::Submit)
    else {
        panic!("expected classify action");
    };
    assert_eq!(text.as_str(), "hello");

    dispatch(&mut state, Message::Key(InputKey::Char('!')));
    dispatch(&mut state, Message::Paste(" world".to_string()));

    assert_eq!(state.checker.text().as_str(), "hello! world");
    assert_eq!(state.checker.pending_request(), Some(request_id));

    dispatch(
        &mut state,
        Message::ClassificationCompleted {
            request_id,
            verdict: Verdict::NotSpam,
        },
    );
    assert!(state.checker.popup_visible());
    assert_eq!(state.checker.text().as_str(), "hello! world");
}

#[test]
fn test_submit_key_while_loading_sends_nothing() {
    let mut state = AppState::new();
    type_text(&mut state, "hello");
    assert!(dispatch(&mut state, Message::Submit).is_some());
    type_text(&mut state, " again");
    assert!(dispatch(&mut state, Message::Key(InputKey::CharCtrl('s'))).is_none());
}

// ─────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_toggles_focus() {
    let mut state = AppState::new();
    dispatch(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, Focus::CheckButton);
    dispatch(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, Focus::Editor);
}

#[test]
fn test_enter_on_check_button_submits() {
    let mut state = AppState::new();
    state.focus = Focus::CheckButton;
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::Submit));
    assert_eq!(handle_key(&state, InputKey::Char(' ')), Some(Message::Submit));
}

#[test]
fn test_typing_on_check_button_returns_focus_to_editor() {
    let mut state = AppState::new();
    state.focus = Focus::CheckButton;
    type_text(&mut state, "x");
    assert_eq!(state.focus, Focus::Editor);
    assert_eq!(state.checker.text().as_str(), "x");
}

// ─────────────────────────────────────────────────────────
// Submit lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_s_and_f5_submit() {
    let state = AppState::new();
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('s')),
        Some(Message::Submit)
    );
    assert_eq!(handle_key(&state, InputKey::F(5)), Some(Message::Submit));
}

#[test]
fn test_submit_blank_text_has_no_action() {
    let mut state = AppState::new();
    type_text(&mut state, "   ");

    let result = update(&mut state, Message::Submit);

    assert!(result.action.is_none());
    assert_eq!(state.checker.phase(), &CheckPhase::Idle);
}

#[test]
fn test_submit_returns_classify_action_with_text() {
    let mut state = AppState::new();
    type_text(&mut state, "  padded  ");

    let result = update(&mut state, Message::Submit);

    match result.action {
        Some(UpdateAction::ClassifyEmail { text, .. }) => assert_eq!(text.as_str(), "  padded  "),
        other => panic!("expected classify action, got {:?}", other),
    }
    assert!(state.checker.is_loading());
}

#[test]
fn test_second_submit_while_loading_is_ignored() {
    let mut state = AppState::new();
    type_text(&mut state, "hi");
    assert!(update(&mut state, Message::Submit).action.is_some());
    assert!(update(&mut state, Message::Submit).action.is_none());
}

#[test]
fn test_stale_verdict_is_ignored() {
    let mut state = AppState::new();
    type_text(&mut state, "hi");
    let Some(UpdateAction::ClassifyEmail { request_id, .. }) =
        update(&mut state, Message::Submit).action
    else {
        panic!("expected classify action");
    };

    update(
        &mut state,
        Message::ClassificationCompleted {
            request_id: request_id + 7,
            verdict: Verdict::Spam,
        },
    );

    assert!(state.checker.is_loading());
    assert!(!state.checker.popup_visible());
}

#[test]
fn test_failure_clears_loading_and_keeps_popup_closed() {
    let mut state = AppState::new();
    type_text(&mut state, "hi");
    let Some(UpdateAction::ClassifyEmail { request_id, .. }) =
        update(&mut state, Message::Submit).action
    else {
        panic!("expected classify action");
    };

    update(
        &mut state,
        Message::ClassificationFailed {
            request_id,
            reason: "Could not reach the classification service".to_string(),
        },
    );

    assert!(!state.checker.is_loading());
    assert!(!state.checker.popup_visible());
    assert_eq!(
        state.checker.failure(),
        Some("Could not reach the classification service")
    );
}

// ─────────────────────────────────────────────────────────
// Popup keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_popup_dismiss_keys() {
    let state = state_with_popup();
    for key in [InputKey::Esc, InputKey::Enter, InputKey::Char('q')] {
        assert_eq!(handle_key(&state, key), Some(Message::DismissPopup));
    }
}

#[test]
fn test_popup_swallows_other_keys() {
    let state = state_with_popup();
    assert_eq!(handle_key(&state, InputKey::Char('a')), None);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('s')), None);
    assert_eq!(handle_key(&state, InputKey::Tab), None);
}

#[test]
fn test_dismiss_keeps_verdict() {
    let mut state = state_with_popup();
    dispatch(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.checker.popup_visible());
    assert_eq!(state.checker.verdict(), Some(Verdict::Spam));
    assert!(!state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Mouse
// ─────────────────────────────────────────────────────────

#[test]
fn test_click_close_button_dismisses() {
    let state = state_with_popup();
    assert_eq!(handle_click(&state, 56, 5), Some(Message::DismissPopup));
}

#[test]
fn test_click_inside_panel_does_nothing() {
    let state = state_with_popup();
    assert_eq!(handle_click(&state, 30, 10), None);
}

#[test]
fn test_click_outside_panel_dismisses() {
    let state = state_with_popup();
    assert_eq!(handle_click(&state, 2, 2), Some(Message::DismissPopup));
}

#[test]
fn test_click_check_button_submits() {
    let mut state = AppState::new();
    state.hit_regions.check_button = Some(Region::new(4, 20, 18, 3));
    state.hit_regions.editor = Some(Region::new(4, 6, 60, 12));

    assert_eq!(handle_click(&state, 10, 21), Some(Message::Submit));
    assert_eq!(handle_click(&state, 10, 8), Some(Message::FocusEditor));
    assert_eq!(handle_click(&state, 70, 30), None);
}

#[test]
fn test_click_message_routes_through_update() {
    let mut state = state_with_popup();
    let result = update(&mut state, Message::Click { column: 56, row: 5 });
    assert_eq!(result.message, Some(Message::DismissPopup));

    update(&mut state, Message::DismissPopup);
    assert!(!state.checker.popup_visible());
    assert!(state.hit_regions.popup.is_none());
}
