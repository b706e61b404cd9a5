//! Configuration file parsing for Mail Guard
//!
//! Supports:
//! - `.mailguard/config.toml` - Service, UI and metrics settings

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, resolve_metrics_path, CONFIG_FILENAME, MAILGUARD_DIR};
pub use types::*;
