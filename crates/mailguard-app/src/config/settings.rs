//! Settings loader for .mailguard/config.toml

use std::path::{Path, PathBuf};

use mailguard_core::prelude::*;

use super::types::Settings;

/// Directory holding Mail Guard configuration
pub const MAILGUARD_DIR: &str = ".mailguard";

/// Settings file name inside [`MAILGUARD_DIR`]
pub const CONFIG_FILENAME: &str = "config.toml";

/// Path of the settings file for a base directory
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(MAILGUARD_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.mailguard/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the metrics payload path against `base_dir` when relative
pub fn resolve_metrics_path(settings: &Settings, base_dir: &Path) -> PathBuf {
    if settings.metrics.file.is_absolute() {
        settings.metrics.file.clone()
    } else {
        base_dir.join(&settings.metrics.file)
    }
}
