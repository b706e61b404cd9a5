//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use mailguard_app::config::IconMode;
use mailguard_core::ResultIcon;

/// Braille spinner frames for the "Analyzing..." indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for a tick counter
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mail(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e0}", // nf-fa-envelope
            IconMode::Unicode => "\u{2709}",   // ✉
        }
    }

    pub fn chart(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f080}", // nf-fa-bar_chart
            IconMode::Unicode => "\u{2587}",   // ▇
        }
    }

    pub fn danger(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn safe(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f058}", // nf-fa-check_circle
            IconMode::Unicode => "\u{2714}",   // ✔
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06a}", // nf-fa-exclamation_circle
            IconMode::Unicode => "!",
        }
    }

    /// Glyph for a result panel icon
    pub fn result(&self, icon: ResultIcon) -> &'static str {
        match icon {
            ResultIcon::Danger => self.danger(),
            ResultIcon::Safe => self.safe(),
        }
    }
}
