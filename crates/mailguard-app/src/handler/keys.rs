//! Key event handlers for the checker screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on popup visibility and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.checker.popup_visible() {
        return handle_key_popup(key);
    }

    match key {
        // Esc only leaves an empty editor; Ctrl+C is the way out with a draft
        InputKey::Esc if state.checker.text().is_blank() => Some(Message::Quit),
        InputKey::Esc => None,
        InputKey::CharCtrl('s') | InputKey::F(5) => Some(Message::Submit),
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        _ => match state.focus {
            Focus::Editor => handle_key_editor(key),
            Focus::CheckButton => handle_key_check_button(key),
        },
    }
}

/// The popup is modal: only its own controls respond
fn handle_key_popup(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::DismissPopup),
        _ => None,
    }
}

fn handle_key_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Enter => Some(Message::InsertChar('\n')),
        InputKey::Backspace => Some(Message::DeleteBack),
        InputKey::CharCtrl('u') => Some(Message::ClearText),
        _ => None,
    }
}

fn handle_key_check_button(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Submit),
        // Typing on the button goes back to the text area
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Backspace => Some(Message::DeleteBack),
        InputKey::CharCtrl('u') => Some(Message::ClearText),
        _ => None,
    }
}
