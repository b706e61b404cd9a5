//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16); // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 21, 28); // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Metrics bars (Accuracy, Precision, Recall, F1 Score) ---
pub const BAR_COLORS: [Color; 4] = [
    Color::Rgb(13, 110, 253),
    Color::Rgb(32, 201, 151),
    Color::Rgb(255, 193, 7),
    Color::Rgb(102, 16, 242),
];
