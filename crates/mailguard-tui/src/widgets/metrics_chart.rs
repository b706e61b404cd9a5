//! Model performance bar chart.
//!
//! Four bars (Accuracy, Precision, Recall, F1 Score) on a fixed [0, 1] axis,
//! drawn with half-block cells for double vertical resolution. A panel whose
//! payload was rejected at load time shows a notice instead of bars.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use mailguard_app::state::MetricsPanel;
use mailguard_core::{MetricsVector, METRIC_COUNT, METRIC_LABELS};

use crate::theme::{icons::IconSet, palette, styles};

pub const UNAVAILABLE_TITLE: &str = "Metrics unavailable";

/// Labels used when a slot is too narrow for the full name
const SHORT_LABELS: [&str; METRIC_COUNT] = ["Acc", "Prec", "Rec", "F1"];

/// Width of the y-axis gutter ("1.0 ")
const AXIS_WIDTH: u16 = 4;

/// Largest bar width in cells
const MAX_BAR_WIDTH: u16 = 8;

pub struct MetricsChart<'a> {
    panel: &'a MetricsPanel,
    icons: IconSet,
}

impl<'a> MetricsChart<'a> {
    pub fn new(panel: &'a MetricsPanel, icons: IconSet) -> Self {
        Self { panel, icons }
    }

    fn render_unavailable(reason: &str, area: Rect, buf: &mut Buffer) {
        let top_pad = area.height.saturating_sub(3) / 3;
        let body = Rect {
            y: area.y + top_pad,
            height: area.height - top_pad,
            ..area
        };
        let lines = vec![
            Line::from(Span::styled(
                UNAVAILABLE_TITLE,
                styles::status_yellow().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(reason.to_string(), styles::text_muted())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }

    fn render_bars(metrics: &MetricsVector, area: Rect, buf: &mut Buffer) {
        // value row + at least one bar row + label row
        if area.height < 3 || area.width <= AXIS_WIDTH {
            return;
        }

        let value_y = area.y;
        let label_y = area.bottom() - 1;
        let bars_top = area.y + 1;
        let bars_bottom = label_y - 1;
        let bar_rows = bars_bottom - bars_top + 1;

        render_axis(buf, area.x, bars_top, bars_bottom);

        let plot_x = area.x + AXIS_WIDTH;
        let slot = (area.width - AXIS_WIDTH) / METRIC_COUNT as u16;
        if slot == 0 {
            return;
        }
        let bar_width = slot.saturating_sub(2).clamp(1, MAX_BAR_WIDTH);

        for (i, (label, value)) in metrics.labelled().enumerate() {
            let slot_x = plot_x + slot * i as u16;
            let bar_x = slot_x + (slot - bar_width) / 2;
            let color = palette::BAR_COLORS[i];

            let half_blocks = value_to_half_blocks(value, bar_rows);
            for dx in 0..bar_width {
                render_bar(buf, bar_x + dx, bars_bottom, half_blocks, color, bars_top);
            }

            let slot_area = |y| Rect::new(slot_x, y, slot, 1);
            Paragraph::new(Line::from(Span::styled(
                format!("{:.2}", value),
                styles::text_secondary(),
            )))
            .alignment(Alignment::Center)
            .render(slot_area(value_y), buf);

            Paragraph::new(Line::from(Span::styled(
                fit_label(label, SHORT_LABELS[i], slot as usize),
                Style::default().fg(color),
            )))
            .alignment(Alignment::Center)
            .render(slot_area(label_y), buf);
        }
    }
}

impl Widget for MetricsChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(format!(" {} Model Performance ", self.icons.chart()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self.panel {
            MetricsPanel::Loaded(metrics) => Self::render_bars(metrics, inner, buf),
            MetricsPanel::Unavailable { reason } => Self::render_unavailable(reason, inner, buf),
        }
    }
}

/// Draw "1.0", "0.5" and "0.0" beside the bar rows.
fn render_axis(buf: &mut Buffer, x: u16, top: u16, bottom: u16) {
    let style = styles::text_muted();
    let mid = top + (bottom - top) / 2;
    for (y, text) in [(top, "1.0"), (mid, "0.5"), (bottom, "0.0")] {
        buf.set_string(x, y, text, style);
    }
}

// ── Pure helpers ──────────────────────────────────────────────────────────────

/// Convert a score in [0, 1] to a bar height in half-block units.
pub(crate) fn value_to_half_blocks(value: f64, rows: u16) -> u16 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value.min(1.0) * f64::from(rows) * 2.0).round() as u16
}

/// Full label if it fits in `width`, else the short form, else truncated.
pub(crate) fn fit_label(full: &str, short: &str, width: usize) -> String {
    if full.len() <= width {
        full.to_string()
    } else if short.len() <= width {
        short.to_string()
    } else {
        short.chars().take(width).collect()
    }
}

/// Vertical bar growing upward from `bottom_y`: `█` for full rows, `▄` on top
/// when the height is odd.
fn render_bar(
    buf: &mut Buffer,
    x: u16,
    bottom_y: u16,
    height_half_blocks: u16,
    color: Color,
    top_y: u16,
) {
    if height_half_blocks == 0 {
        return;
    }

    let full_rows = height_half_blocks / 2;
    let style = Style::default().fg(color);

    for row in 0..full_rows {
        let Some(y) = bottom_y.checked_sub(row) else {
            break;
        };
        if y < top_y {
            break;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('\u{2588}').set_style(style);
        }
    }

    if height_half_blocks % 2 == 1 {
        if let Some(y) = bottom_y.checked_sub(full_rows) {
            if y >= top_y {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('\u{2584}').set_style(style);
                }
            }
        }
    }
}
