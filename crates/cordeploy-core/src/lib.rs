//! cordeploy-core - Core types, configuration, and reconciliation primitives
//!
//! This crate provides the foundational pieces of a cordeploy deploy cycle:
//! - [`DeployPlugin`] and [`PackagingTool`] traits for the pipeline seams
//! - [`ReconcileState`] for sequencing one reconciliation cycle
//! - [`DeployError`] for error handling
//! - [`DeployConfig`] for plugin configuration
//! - [`symmetric_difference`] and [`build_args`], the pure algorithms

mod config;
mod context;
mod error;
mod lifecycle;
mod plugin;

pub mod args;
pub mod diff;
pub mod naming;

pub use args::{ADD_CORDOVA_JS_FLAG, PLUGIN_ONLY_OPTIONS, QUIET_FLAG, build_args};
pub use config::DeployConfig;
pub use context::{BuildContext, ContextUpdate};
pub use diff::{FileSet, symmetric_difference};
pub use error::{DeployError, DeployResult};
pub use lifecycle::ReconcileState;
pub use plugin::{DeployPlugin, PackagingTool};

/// Severity levels of the shared deploy UI, most to least verbose
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    /// Every level in detection order, most verbose first
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }

    /// Parse a level name, case-insensitively. `warn` is accepted for `WARNING`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Capability over an externally owned, process-wide log level
///
/// The owner exposes no getter for its level; callers can only ask whether
/// messages at a given level are currently visible, and overwrite the level.
pub trait AmbientLogLevel: Send + Sync {
    /// Whether messages at `level` would currently be written
    fn is_level_visible(&self, level: LogLevel) -> bool;

    /// Overwrite the ambient level
    fn set_level(&self, level: LogLevel);
}

impl<T: AmbientLogLevel + ?Sized> AmbientLogLevel for &T {
    fn is_level_visible(&self, level: LogLevel) -> bool {
        (**self).is_level_visible(level)
    }

    fn set_level(&self, level: LogLevel) {
        (**self).set_level(level)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AmbientLogLevel, BuildContext, ContextUpdate, DeployConfig, DeployError, DeployPlugin,
        DeployResult, LogLevel, PackagingTool, ReconcileState, build_args, symmetric_difference,
    };
}
