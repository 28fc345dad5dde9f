//! Save and restore the ambient log level around a sub-tool

use cordeploy_core::{AmbientLogLevel, DeployError, LogLevel};
use std::future::Future;

/// Level assumed when probing finds no visible level
pub const FALLBACK_LEVEL: LogLevel = LogLevel::Error;

/// Detect the ambient level, most verbose first
///
/// Returns the first level whose messages are visible, or `None` when the
/// owner reports every level as hidden.
pub fn detect(ambient: &dyn AmbientLogLevel) -> Option<LogLevel> {
    LogLevel::ALL
        .into_iter()
        .find(|level| ambient.is_level_visible(*level))
}

/// Like [`detect`], falling back to [`FALLBACK_LEVEL`] with a diagnostic
pub fn detect_or_fallback(ambient: &dyn AmbientLogLevel) -> LogLevel {
    detect(ambient).unwrap_or_else(|| {
        tracing::error!(
            error = %DeployError::AmbientLevelUndetectable,
            fallback = %FALLBACK_LEVEL,
            "Could not guess current log level, using fallback"
        );
        FALLBACK_LEVEL
    })
}

/// Restores a previously detected ambient level when released
///
/// Restoration happens on [`restore`](Self::restore) or, failing that, on
/// drop, so an early return, a panic, or a cancelled future cannot leave the
/// level changed.
pub struct LevelGuard<'a> {
    ambient: &'a dyn AmbientLogLevel,
    saved: LogLevel,
    restored: bool,
}

impl<'a> LevelGuard<'a> {
    /// Detect the current level and remember it
    pub fn capture(ambient: &'a dyn AmbientLogLevel) -> Self {
        let saved = detect_or_fallback(ambient);
        tracing::debug!(level = %saved, "Saved ambient log level");
        Self {
            ambient,
            saved,
            restored: false,
        }
    }

    /// The level that will be restored
    pub fn saved(&self) -> LogLevel {
        self.saved
    }

    /// Write the saved level back
    pub fn restore(mut self) {
        self.restore_in_place();
    }

    fn restore_in_place(&mut self) {
        if self.restored {
            return;
        }
        self.ambient.set_level(self.saved);
        self.restored = true;
        tracing::debug!(level = %self.saved, "Restored ambient log level");
    }
}

impl Drop for LevelGuard<'_> {
    fn drop(&mut self) {
        self.restore_in_place();
    }
}

/// Run `operation` and put the ambient level back afterwards
///
/// The level is restored before the operation's result, success or error,
/// is handed back to the caller.
pub async fn run_guarded<F, Fut, T, E>(ambient: &dyn AmbientLogLevel, operation: F) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let guard = LevelGuard::capture(ambient);
    let result = operation().await;
    guard.restore();
    result
}
