//! Mouse click handling
//!
//! Clicks are hit-tested against the regions recorded by the last render, so
//! this module never needs to know the terminal layout.

use crate::message::Message;
use crate::state::AppState;

/// Convert a left click into a message
pub fn handle_click(state: &AppState, column: u16, row: u16) -> Option<Message> {
    let regions = &state.hit_regions;

    if state.checker.popup_visible() {
        return match regions.popup {
            Some(popup) if popup.close_button.contains(column, row) => Some(Message::DismissPopup),
            // Clicks on the panel body stay inside the popup
            Some(popup) if popup.panel.contains(column, row) => None,
            _ => Some(Message::DismissPopup),
        };
    }

    if regions
        .check_button
        .is_some_and(|button| button.contains(column, row))
    {
        return Some(Message::Submit);
    }

    if regions
        .editor
        .is_some_and(|editor| editor.contains(column, row))
    {
        return Some(Message::FocusEditor);
    }

    None
}
