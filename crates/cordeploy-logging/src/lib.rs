//! cordeploy-logging - Ambient log level management
//!
//! This crate provides:
//! - [`LogLevelManager`], the process-wide level of the deploy UI
//! - [`UiLoggingLayer`] tracing layer that hides events below that level
//! - [`LevelGuard`] and [`run_guarded`] to restore the level around a sub-tool
//!   that may change it
//!
//! The guard assumes it is the only code touching the ambient level while it
//! is held. Concurrent deploy cycles sharing one manager must be serialized by
//! the caller.

mod guard;
mod layer;
mod manager;

pub use cordeploy_core::{AmbientLogLevel, LogLevel};
pub use guard::{FALLBACK_LEVEL, LevelGuard, detect, detect_or_fallback, run_guarded};
pub use layer::{UiLoggingLayer, init_logging, init_logging_with_level};
pub use manager::LogLevelManager;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AmbientLogLevel, LevelGuard, LogLevel, LogLevelManager, UiLoggingLayer, init_logging,
        run_guarded,
    };
}
