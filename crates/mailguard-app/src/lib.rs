//! mailguard-app - Application state and orchestration for Mail Guard
//!
//! Implements the TEA (The Elm Architecture) loop around the checker screen:
//! the pure [`checker::reduce`] state machine, message handlers for keys and
//! clicks, settings loading, and the background classification task.

pub mod actions;
pub mod checker;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod region;
pub mod signals;
pub mod state;

// Re-export primary types
pub use checker::{CheckPhase, CheckerEffect, CheckerEvent, CheckerState, RequestId};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus, MetricsPanel};
