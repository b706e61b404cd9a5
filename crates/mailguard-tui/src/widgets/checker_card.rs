//! Email input card: text area, inline status line, and the check button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use mailguard_app::checker::CheckerState;
use mailguard_app::state::Focus;
use mailguard_core::EmailSignals;

use crate::theme::{
    icons::{self, IconSet},
    palette, styles,
};

pub const BUTTON_LABEL: &str = "Check for Spam";
pub const LOADING_LABEL: &str = "Analyzing...";
pub const PLACEHOLDER: &str = "Paste or type the email content here...";
const BUTTON_WIDTH: u16 = 22;
const SIGNALS_GAP: u16 = 2;
const SIGNALS_MIN_WIDTH: u16 = 12;
const CURSOR: &str = "▌";

/// Sub-areas of the card, shared by rendering and hit-region recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerCardAreas {
    pub editor: Rect,
    pub status: Rect,
    pub button: Rect,
    /// Local signals, to the right of the button
    pub signals: Rect,
}

impl CheckerCardAreas {
    pub fn new(area: Rect) -> Self {
        let inner = card_block().inner(area);
        let [editor, status, button_row] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);
        let button = Rect {
            width: BUTTON_WIDTH.min(button_row.width),
            ..button_row
        };
        let signals_x = (button.right() + SIGNALS_GAP).min(button_row.right());
        let signals = Rect {
            x: signals_x,
            width: button_row.right() - signals_x,
            ..button_row
        };
        Self {
            editor,
            status,
            button,
            signals,
        }
    }
}

fn card_block() -> Block<'static> {
    styles::glass_block(false)
        .title(" Check an Email ")
        .style(Style::default().bg(palette::CARD_BG))
}

/// Checker card widget
pub struct CheckerCard<'a> {
    checker: &'a CheckerState,
    focus: Focus,
    icons: IconSet,
    spinner_frame: usize,
    signals: EmailSignals,
}

impl<'a> CheckerCard<'a> {
    pub fn new(checker: &'a CheckerState, focus: Focus, icons: IconSet) -> Self {
        Self {
            checker,
            focus,
            icons,
            spinner_frame: 0,
            signals: EmailSignals::default(),
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    pub fn signals(mut self, signals: EmailSignals) -> Self {
        self.signals = signals;
        self
    }

    fn render_editor(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Editor && !self.checker.popup_visible();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text = self.checker.text().as_str();
        let show_cursor = focused;

        if text.is_empty() {
            let mut spans = Vec::new();
            if show_cursor {
                spans.push(Span::styled(CURSOR, styles::accent_bold()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
            Paragraph::new(Line::from(spans)).render(inner, buf);
            return;
        }

        let text_style = styles::text_primary();

        // Reserve a cell for the cursor so it never wraps on its own
        let wrapped = wrap_lines(text, inner.width.saturating_sub(1).max(1) as usize);
        let skip = wrapped.len().saturating_sub(inner.height as usize);
        let last = wrapped.len().saturating_sub(1);
        let lines: Vec<Line> = wrapped
            .into_iter()
            .enumerate()
            .skip(skip)
            .map(|(i, l)| {
                let mut spans = vec![Span::styled(l, text_style)];
                if show_cursor && i == last {
                    spans.push(Span::styled(CURSOR, styles::accent_bold()));
                }
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let left = if self.checker.is_loading() {
            Line::from(Span::styled(
                format!("{} {}", icons::spinner(self.spinner_frame), LOADING_LABEL),
                styles::status_yellow(),
            ))
        } else if let Some(reason) = self.checker.failure() {
            Line::from(Span::styled(
                format!("{} {}", self.icons.alert(), reason),
                styles::status_red(),
            ))
        } else if let Some(verdict) = self.checker.verdict() {
            let color = styles::result_color(verdict.presentation().style);
            Line::from(vec![
                Span::styled("Last result: ", styles::text_muted()),
                Span::styled(verdict.to_string(), Style::default().fg(color)),
            ])
        } else {
            Line::default()
        };
        Paragraph::new(left).render(area, buf);

        let words = self.checker.text().word_count();
        let unit = if words == 1 { "word" } else { "words" };
        let count = Line::from(Span::styled(
            format!("{} {}", words, unit),
            styles::text_muted(),
        ));
        let count_width = count.width() as u16;
        if area.width > count_width + 20 {
            let count_area = Rect {
                x: area.right() - count_width,
                width: count_width,
                ..area
            };
            Paragraph::new(count)
                .alignment(Alignment::Right)
                .render(count_area, buf);
        }
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let enabled = self.checker.can_submit();
        let focused = self.focus == Focus::CheckButton && !self.checker.popup_visible();

        let (border, fill, label_style) = if self.checker.is_loading() {
            (
                styles::border_inactive(),
                Style::default(),
                styles::status_yellow(),
            )
        } else if !enabled {
            (
                styles::border_inactive(),
                Style::default(),
                styles::text_muted(),
            )
        } else if focused {
            (
                styles::border_active(),
                styles::focused_selected(),
                styles::focused_selected(),
            )
        } else {
            (
                styles::border_active(),
                Style::default(),
                styles::accent_bold(),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(fill);
        let inner = block.inner(area);
        block.render(area, buf);

        let label = if self.checker.is_loading() {
            LOADING_LABEL
        } else {
            BUTTON_LABEL
        };
        Paragraph::new(Line::from(Span::styled(
            label,
            label_style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(inner, buf);
    }

    fn render_signals(&self, area: Rect, buf: &mut Buffer) {
        if area.width < SIGNALS_MIN_WIDTH || self.checker.text().is_blank() {
            return;
        }

        let s = &self.signals;
        let flagged = |hit: bool| {
            if hit {
                styles::status_yellow()
            } else {
                styles::text_secondary()
            }
        };

        let links = Line::from(vec![
            Span::styled(counted(s.links, "link", "links"), styles::text_secondary()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(
                format!("{} shortened", s.shortened_links),
                flagged(s.shortened_links > 0),
            ),
        ]);
        let keywords = Line::from(Span::styled(
            counted(s.spam_keywords, "spam keyword", "spam keywords"),
            flagged(s.spam_keywords > 0),
        ));

        let mut header_notes = Vec::new();
        if s.missing_to {
            header_notes.push("no To header".to_string());
        }
        if s.suspicious_sender {
            header_notes.push("odd sender domain".to_string());
        }
        if s.attachments > 0 {
            let mut note = counted(s.attachments, "attachment", "attachments");
            if s.risky_attachments > 0 {
                note.push_str(&format!(" ({} risky)", s.risky_attachments));
            }
            header_notes.push(note);
        }
        let headers = Line::from(Span::styled(
            header_notes.join(" · "),
            flagged(s.missing_to || s.suspicious_sender || s.risky_attachments > 0),
        ));

        Paragraph::new(vec![links, keywords, headers]).render(area, buf);
    }
}

fn counted(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

impl Widget for CheckerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card_block();
        block.render(area, buf);

        let areas = CheckerCardAreas::new(area);
        self.render_editor(areas.editor, buf);
        self.render_status(areas.status, buf);
        self.render_button(areas.button, buf);
        self.render_signals(areas.signals, buf);
    }
}

/// Hard-wrap `text` to `width` display columns, keeping explicit newlines.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        for c in raw.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
        lines.push(current);
    }

    lines
}
