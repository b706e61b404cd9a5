//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Classification Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Email text is empty")]
    EmptyInput,

    #[error("Classification service unreachable: {message}")]
    Network { message: String },

    #[error("Classification request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Classification service returned HTTP {status}")]
    ServiceStatus { status: u16 },

    #[error("Malformed classification response: {message}")]
    MalformedResponse { message: String },

    // ─────────────────────────────────────────────────────────────
    // Metrics Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed metrics payload: {reason}")]
    MalformedMetrics { reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn malformed_metrics(reason: impl Into<String>) -> Self {
        Self::MalformedMetrics {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::Network { .. }
                | Error::Timeout { .. }
                | Error::ServiceStatus { .. }
                | Error::MalformedResponse { .. }
                | Error::MalformedMetrics { .. }
        )
    }

    /// Short, single-line reason suitable for inline display in the checker card.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyInput => "Nothing to check".to_string(),
            Error::Network { .. } => "Could not reach the classification service".to_string(),
            Error::Timeout { secs } => format!("The classification service timed out after {secs}s"),
            Error::ServiceStatus { status } => {
                format!("The classification service returned HTTP {status}")
            }
            Error::MalformedResponse { .. } => {
                "The classification service sent an unexpected response".to_string()
            }
            other => other.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with `context` and pass it on
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
