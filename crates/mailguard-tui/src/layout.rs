//! Screen layout definitions for the TUI
//!
//! The checker card and metrics chart sit side by side on wide terminals
//! and stack on narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the metrics panel moves under the checker card
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 72;

/// Height of the stacked metrics panel
const STACKED_METRICS_HEIGHT: u16 = 10;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with key hints
    pub header: Rect,

    /// Email input card
    pub checker: Rect,

    /// Metrics chart panel
    pub metrics: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).areas(area);

    let (checker, metrics) = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [checker, metrics] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
        (checker, metrics)
    } else {
        let [checker, metrics] = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(STACKED_METRICS_HEIGHT),
        ])
        .areas(body);
        (checker, metrics)
    };

    ScreenAreas {
        header,
        checker,
        metrics,
    }
}
