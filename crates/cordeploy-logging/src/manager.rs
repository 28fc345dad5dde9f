//! Process-wide UI log level

use cordeploy_core::{AmbientLogLevel, LogLevel};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU8, Ordering};

/// Global level manager
static LEVEL_MANAGER: OnceCell<LogLevelManager> = OnceCell::new();

/// Holds the current write level of the deploy UI
///
/// Messages below the level are hidden. The packaging tool lowers the
/// verbosity through [`AmbientLogLevel::set_level`] when run quietly.
pub struct LogLevelManager {
    level: AtomicU8,
}

impl LogLevelManager {
    /// Create a new manager at [`LogLevel::Info`]
    pub fn new() -> Self {
        Self::with_level(LogLevel::Info)
    }

    /// Create a new manager at `level`
    pub fn with_level(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Get the global manager instance
    pub fn global() -> &'static LogLevelManager {
        LEVEL_MANAGER.get_or_init(LogLevelManager::new)
    }

    /// Set the log level
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Get the current log level
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Check if a log level is enabled
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
}

impl Default for LogLevelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AmbientLogLevel for LogLevelManager {
    fn is_level_visible(&self, level: LogLevel) -> bool {
        self.is_enabled(level)
    }

    fn set_level(&self, level: LogLevel) {
        LogLevelManager::set_level(self, level);
    }
}

#[cfg(test)]
#[path = "manager/manager_tests.rs"]
mod manager_tests;
