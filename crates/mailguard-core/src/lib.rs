//! # mailguard-core - Core Domain Types
//!
//! Foundation crate for Mail Guard. Provides domain types, error handling
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, regex, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`EmailText`] - User-supplied email content awaiting classification
//! - [`Verdict`] - Classification outcome (`Spam` or `NotSpam`)
//! - [`ResultPresentation`] - Icon, heading, message and style for a verdict
//! - [`MetricsVector`] - Precomputed accuracy/precision/recall/F1 scores
//! - [`EmailSignals`] - Local link, keyword, header and attachment heuristics
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mailguard_core::prelude::*;
//! ```

pub mod analysis;
pub mod email;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod verdict;

/// Prelude for common imports used throughout all Mail Guard crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, warn};
}

// Re-export commonly used types at crate root for convenience
pub use analysis::{EmailHeaders, EmailSignals};
pub use email::EmailText;
pub use error::{Error, Result, ResultExt};
pub use metrics::{MetricsVector, METRIC_COUNT, METRIC_LABELS};
pub use verdict::{ResultIcon, ResultPresentation, ResultStyle, Verdict};
