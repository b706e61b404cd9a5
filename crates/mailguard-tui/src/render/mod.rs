//! Main render/view function (View in TEA pattern)


use mailguard_app::region::{HitRegions, PopupRegions, Region};
use mailguard_app::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure apart from recording this frame's clickable regions into
/// `state.hit_regions` for the mouse handler.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let popup_open = state.checker.popup_visible();

    frame.render_widget(
        widgets::MainHeader::new(icons).popup_open(popup_open),
        areas.header,
    );

    let card_areas = widgets::CheckerCardAreas::new(areas.checker);
    let signals = state.signals();
    frame.render_widget(
        widgets::CheckerCard::new(&state.checker, state.focus, icons)
            .spinner_frame(state.spinner_frame)
            .signals(signals),
        areas.checker,
    );

    frame.render_widget(
        widgets::MetricsChart::new(&state.metrics, icons),
        areas.metrics,
    );

    let mut hit_regions = HitRegions {
        editor: Some(region(card_areas.editor)),
        check_button: Some(region(card_areas.button)),
        popup: None,
    };

    if let (true, Some(verdict)) = (popup_open, state.checker.verdict()) {
        let scale = state.popup_scale();
        frame.render_widget(
            widgets::ResultPopup::new(verdict.presentation(), icons).scale(scale),
            area,
        );

        let panel = widgets::popup_rect(area, scale);
        hit_regions.popup = Some(PopupRegions {
            panel: region(panel),
            close_button: region(widgets::close_button_rect(panel)),
        });
    }

    state.hit_regions = hit_regions;
}

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}
