//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use mailguard_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Turn on bracketed paste, and mouse capture when `mouse` is set
pub fn enable_input_modes(mouse: bool) -> Result<()> {
    execute!(stdout(), EnableBracketedPaste)
        .map_err(|e| Error::terminal(format!("Failed to enable bracketed paste: {}", e)))?;
    if mouse {
        execute!(stdout(), EnableMouseCapture)
            .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))?;
    }
    Ok(())
}

/// Undo [`enable_input_modes`]. Errors are logged, not returned.
pub fn disable_input_modes(mouse: bool) {
    if mouse {
        if let Err(e) = execute!(stdout(), DisableMouseCapture) {
            warn!("Failed to disable mouse capture: {}", e);
        }
    }
    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
}
