//! Application state (Model in TEA pattern)

use std::path::Path;

use mailguard_core::prelude::*;
use mailguard_core::{EmailSignals, EmailText, MetricsVector};

use crate::checker::{self, CheckerEffect, CheckerEvent, CheckerState};
use crate::config::Settings;
use crate::region::HitRegions;

/// Number of ticks the popup takes to scale in
pub const POPUP_REVEAL_FRAMES: u8 = 6;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The email text area
    #[default]
    Editor,
    /// The "Check for Spam" button
    CheckButton,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Editor => Focus::CheckButton,
            Focus::CheckButton => Focus::Editor,
        }
    }
}

/// Content of the metrics chart panel, loaded once at startup
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsPanel {
    /// Validated payload ready to chart
    Loaded(MetricsVector),
    /// Payload missing or malformed
    Unavailable { reason: String },
}

impl Default for MetricsPanel {
    fn default() -> Self {
        MetricsPanel::Unavailable {
            reason: "No metrics loaded".to_string(),
        }
    }
}

impl MetricsPanel {
    /// Read and validate the payload file, logging a rejected payload
    pub fn load(path: &Path) -> Self {
        match MetricsVector::from_file(path) {
            Ok(metrics) => {
                info!("Loaded metrics from {}", path.display());
                MetricsPanel::Loaded(metrics)
            }
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No metrics file at {}", path.display());
                MetricsPanel::Unavailable {
                    reason: format!("No metrics file at {}", path.display()),
                }
            }
            Err(e) => {
                warn!("Rejected metrics payload {}: {}", path.display(), e);
                MetricsPanel::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn metrics(&self) -> Option<&MetricsVector> {
        match self {
            MetricsPanel::Loaded(m) => Some(m),
            MetricsPanel::Unavailable { .. } => None,
        }
    }
}

/// Complete application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Lifecycle phase
    pub phase: AppPhase,

    /// Checker screen state machine. Advance only through [`AppState::apply`].
    pub checker: CheckerState,

    /// Metrics chart content
    pub metrics: MetricsPanel,

    /// Loaded settings
    pub settings: Settings,

    /// Keyboard focus
    pub focus: Focus,

    /// Clickable regions of the last rendered frame
    pub hit_regions: HitRegions,

    /// Ticks since the popup opened, capped at [`POPUP_REVEAL_FRAMES`]
    pub popup_reveal: u8,

    /// Spinner frame for the "Analyzing..." indicator
    pub spinner_frame: usize,

    /// Signals of the text they were computed for
    signal_cache: Option<(EmailText, EmailSignals)>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings, metrics: MetricsPanel) -> Self {
        Self {
            settings,
            metrics,
            ..Self::default()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Run one checker transition and return its effect
    pub fn apply(&mut self, event: CheckerEvent) -> Option<CheckerEffect> {
        let was_visible = self.checker.popup_visible();
        let transition = checker::reduce(&self.checker, event);
        self.checker = transition.state;

        match (was_visible, self.checker.popup_visible()) {
            (false, true) => self.popup_reveal = 0,
            (true, false) => self.hit_regions.popup = None,
            _ => {}
        }

        transition.effect
    }

    /// Local signals for the current text, recomputed only when it changed
    pub fn signals(&mut self) -> EmailSignals {
        let fresh = matches!(
            &self.signal_cache,
            Some((text, _)) if text == self.checker.text()
        );
        if !fresh {
            let text = self.checker.text().clone();
            let signals = EmailSignals::analyze(text.as_str());
            self.signal_cache = Some((text, signals));
        }
        self.signal_cache
            .as_ref()
            .map(|(_, signals)| *signals)
            .unwrap_or_default()
    }

    /// Advance animations by one frame
    pub fn tick(&mut self) {
        if self.checker.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if self.checker.popup_visible() && self.popup_reveal < POPUP_REVEAL_FRAMES {
            self.popup_reveal += 1;
        }
    }

    /// Popup scale factor in `(0, 1]`
    pub fn popup_scale(&self) -> f32 {
        let frames = f32::from(POPUP_REVEAL_FRAMES);
        (f32::from(self.popup_reveal.min(POPUP_REVEAL_FRAMES)) + 1.0) / (frames + 1.0)
    }
}
