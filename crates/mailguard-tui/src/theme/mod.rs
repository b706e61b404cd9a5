//! Centralized theme for the Mail Guard TUI.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Glyphs resolved by configured icon mode

pub mod icons;
pub mod palette;
pub mod styles;
