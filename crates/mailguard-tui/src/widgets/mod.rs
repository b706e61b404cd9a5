//! Custom widget components

mod checker_card;
mod header;
mod metrics_chart;
pub mod modal_overlay;
mod result_box;
mod result_popup;

pub use checker_card::{
    wrap_lines, CheckerCard, CheckerCardAreas, BUTTON_LABEL, LOADING_LABEL, PLACEHOLDER,
};
pub use header::MainHeader;
pub use metrics_chart::{MetricsChart, UNAVAILABLE_TITLE};
pub use result_box::ResultBox;
pub use result_popup::{close_button_rect, popup_rect, ResultPopup, CLOSE_LABEL, POPUP_SIZE};
