//! Verdict panel content: icon, heading, and advisory message.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mailguard_core::ResultPresentation;

use crate::theme::{icons::IconSet, styles};

pub struct ResultBox {
    presentation: ResultPresentation,
    icons: IconSet,
}

impl ResultBox {
    pub fn new(presentation: ResultPresentation, icons: IconSet) -> Self {
        Self {
            presentation,
            icons,
        }
    }
}

impl Widget for ResultBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let p = self.presentation;
        let color = styles::result_color(p.style);

        let [heading_area, _, message_area, class_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let heading = Line::from(vec![
            Span::styled(
                format!("{}  ", self.icons.result(p.icon)),
                Style::default().fg(color),
            ),
            Span::styled(
                p.heading,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(heading).render(heading_area, buf);

        Paragraph::new(p.message)
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("verdict: ", styles::text_muted()),
            Span::styled(p.style.class_name(), Style::default().fg(color)),
        ]))
        .render(class_area, buf);
    }
}
