//! Message types for the application (TEA pattern)

use mailguard_core::Verdict;

use crate::checker::RequestId;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse click at a terminal cell
    Click { column: u16, row: u16 },

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, Esc, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Editing Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the email text
    InsertChar(char),
    /// Delete the last character
    DeleteBack,
    /// Clear the email text
    ClearText,
    /// Move focus between the text area and the check button
    ToggleFocus,
    /// Put focus on the text area
    FocusEditor,

    // ─────────────────────────────────────────────────────────
    // Check Lifecycle Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the current text for classification
    Submit,
    /// Classifier returned a verdict
    ClassificationCompleted {
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
