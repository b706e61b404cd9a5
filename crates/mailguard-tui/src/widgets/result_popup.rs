//! Animated result popup.
//!
//! Scales in from the center over a few ticks, dims everything behind it, and
//! draws a close control in its top border. Geometry helpers are public so the
//! renderer can record the same rects for mouse hit-testing.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mailguard_core::ResultPresentation;

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow, scaled_size};
use super::ResultBox;
use crate::theme::{icons::IconSet, styles};

/// Full popup size (width, height)
pub const POPUP_SIZE: (u16, u16) = (56, 12);
const POPUP_MIN_SIZE: (u16, u16) = (12, 5);
pub const CLOSE_LABEL: &str = "[x]";

/// Popup rect inside `area` at the given reveal scale
pub fn popup_rect(area: Rect, scale: f32) -> Rect {
    let full = (
        POPUP_SIZE.0.min(area.width.saturating_sub(4)),
        POPUP_SIZE.1.min(area.height.saturating_sub(2)),
    );
    let (w, h) = scaled_size(full, scale, POPUP_MIN_SIZE);
    centered_rect(w, h, area)
}

/// Close control rect, sitting in the popup's top border
pub fn close_button_rect(popup: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect::new(
        popup.right().saturating_sub(width + 2).max(popup.x),
        popup.y,
        width.min(popup.width),
        1,
    )
}

pub struct ResultPopup {
    presentation: ResultPresentation,
    icons: IconSet,
    scale: f32,
}

impl ResultPopup {
    pub fn new(presentation: ResultPresentation, icons: IconSet) -> Self {
        Self {
            presentation,
            icons,
            scale: 1.0,
        }
    }

    /// Reveal progress in `(0, 1]`
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Widget for ResultPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let popup = popup_rect(area, self.scale);
        if popup.width == 0 || popup.height == 0 {
            return;
        }

        render_shadow(buf, popup);
        clear_area(buf, popup);

        let color = styles::result_color(self.presentation.style);
        let block = styles::modal_block(color).title(" Result ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        Paragraph::new(Line::from(Span::styled(CLOSE_LABEL, styles::accent_bold())))
            .render(close_button_rect(popup), buf);

        // Content appears once the panel has room for it
        if self.scale < 1.0 || inner.height < 3 {
            return;
        }

        let content = Rect {
            x: inner.x + 1,
            y: inner.y + 1,
            width: inner.width.saturating_sub(2),
            height: inner.height.saturating_sub(3),
        };
        ResultBox::new(self.presentation, self.icons).render(content, buf);

        let hint_area = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        Paragraph::new(Line::from(Span::styled(
            "Esc, Enter or click outside to close",
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}
