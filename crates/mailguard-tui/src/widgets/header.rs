//! Header bar widget
//!
//! App title on the left, key hints for the current mode on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

const EDITING_HINTS: &str = "Ctrl+S check · Tab focus · Ctrl+C quit";
const POPUP_HINTS: &str = "Esc/Enter close";

/// Main header showing the app title and keybindings
pub struct MainHeader {
    icons: IconSet,
    popup_open: bool,
}

impl MainHeader {
    pub fn new(icons: IconSet) -> Self {
        Self {
            icons,
            popup_open: false,
        }
    }

    /// Show the popup key hints instead of the editing ones
    pub fn popup_open(mut self, open: bool) -> Self {
        self.popup_open = open;
        self
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(format!("{} ", self.icons.mail()), styles::accent_bold()),
            Span::styled("Mail Guard", styles::accent_bold()),
            Span::styled(" · Email threat detector", styles::text_secondary()),
        ]);
        let title_width = title.width() as u16;
        Paragraph::new(title).render(inner, buf);

        let hints = Line::from(Span::styled(
            if self.popup_open {
                POPUP_HINTS
            } else {
                EDITING_HINTS
            },
            styles::text_muted(),
        ));
        let hints_width = hints.width() as u16;

        // Hints only when they fit beside the title
        if inner.width > title_width + hints_width + 2 {
            let hints_area = Rect {
                x: inner.right() - hints_width,
                width: hints_width,
                ..inner
            };
            Paragraph::new(hints)
                .alignment(Alignment::Right)
                .render(hints_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use mailguard_app::config::IconMode;

    #[test]
    fn test_header_renders_title_and_hints() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);
        term.render_widget(MainHeader::new(IconSet::new(IconMode::Unicode)), area);

        assert!(term.line_contains(1, "Mail Guard"));
        assert!(term.line_contains(1, "Ctrl+S check"));
        assert!(term.line_contains(1, "Ctrl+C quit"));
    }

    #[test]
    fn test_header_popup_hints() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);
        term.render_widget(
            MainHeader::new(IconSet::new(IconMode::Unicode)).popup_open(true),
            area,
        );

        assert!(term.line_contains(1, "Esc/Enter close"));
        assert!(!term.buffer_contains("Ctrl+S check"));
    }

    #[test]
    fn test_header_hides_hints_when_narrow() {
        let mut term = TestTerminal::compact();
        let area = Rect::new(0, 0, 40, 3);
        term.render_widget(MainHeader::new(IconSet::new(IconMode::Unicode)), area);

        assert!(term.buffer_contains("Mail Guard"));
        assert!(!term.buffer_contains("Tab focus"));
    }
}
