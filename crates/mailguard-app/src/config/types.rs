//! Configuration types for Mail Guard
//!
//! Defines:
//! - `Settings` - Global application settings (.mailguard/config.toml)
//! - Related sub-types and enums

use std::path::PathBuf;
use std::time::Duration;

use mailguard_client::DEFAULT_ENDPOINT;
use mailguard_core::prelude::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// Application settings (.mailguard/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub metrics: MetricsSettings,
}

/// Classification service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Full URL of the check-spam endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (0 = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: 0,
        }
    }
}

impl ServiceSettings {
    /// Parse and validate the endpoint URL (http/https only)
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            Error::config_invalid(format!("service.endpoint {:?}: {}", self.endpoint, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config_invalid(format!(
                "service.endpoint must use http or https, got {other}"
            ))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Icon mode for the TUI
///
/// Controls whether to use Nerd Font glyphs (requires a Nerd Font installed)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Capture the mouse for button and overlay clicks
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            mouse: true,
        }
    }
}

/// Metrics chart settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetricsSettings {
    /// JSON file holding `[accuracy, precision, recall, f1]`.
    /// Relative paths resolve against the config base directory
    /// (`--config-dir`, or the working directory when it is not given).
    #[serde(default = "default_metrics_file")]
    pub file: PathBuf,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            file: default_metrics_file(),
        }
    }
}

fn default_metrics_file() -> PathBuf {
    PathBuf::from(".mailguard").join("metrics.json")
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.service.endpoint,
            "http://localhost:5000/api/check-spam"
        );
        assert_eq!(settings.service.timeout(), None);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.mouse);
        assert_eq!(
            settings.metrics.file,
            PathBuf::from(".mailguard/metrics.json")
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [service]
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(settings.service.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.service.timeout(), Some(Duration::from_secs(10)));
        assert!(settings.ui.mouse);
    }

    #[test]
    fn test_full_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [service]
            endpoint = "https://classifier.internal/api/check-spam"

            [ui]
            icons = "nerd_fonts"
            mouse = false

            [metrics]
            file = "/srv/model/metrics.json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.mouse);
        assert_eq!(
            settings.metrics.file,
            PathBuf::from("/srv/model/metrics.json")
        );
        assert_eq!(
            settings.service.endpoint_url().unwrap().host_str(),
            Some("classifier.internal")
        );
    }

    #[test]
    fn test_endpoint_validation() {
        let mut service = ServiceSettings::default();
        assert!(service.endpoint_url().is_ok());

        service.endpoint = "not a url".to_string();
        assert!(matches!(
            service.endpoint_url(),
            Err(Error::ConfigInvalid { .. })
        ));

        service.endpoint = "ftp://example.com/check".to_string();
        let err = service.endpoint_url().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
