//! Tracing layer that applies the ambient UI level

use crate::manager::LogLevelManager;
use cordeploy_core::LogLevel;
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// Tracing layer that hides events below the manager's current level
///
/// The level can change at any time (a quiet sub-tool lowers it), so callsite
/// interest is never cached and every event is checked.
pub struct UiLoggingLayer {
    manager: &'static LogLevelManager,
}

impl UiLoggingLayer {
    /// Create a new layer using the global level manager
    pub fn new() -> Self {
        Self {
            manager: LogLevelManager::global(),
        }
    }

    /// Create a layer with a specific level manager
    pub fn with_manager(manager: &'static LogLevelManager) -> Self {
        Self { manager }
    }

    /// Convert tracing Level to our LogLevel
    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE | Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warning,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for UiLoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for UiLoggingLayer
where
    S: Subscriber,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        let level = Self::convert_level(metadata.level());
        self.manager.is_enabled(level)
    }

    fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
        let level = Self::convert_level(event.metadata().level());
        self.manager.is_enabled(level)
    }
}

/// Initialize the logging system with the UI layer
///
/// Installs the [`UiLoggingLayer`] in front of a stderr formatter. When
/// `RUST_LOG` is set, its directives narrow the output further. Call this
/// once during startup; later calls are ignored.
pub fn init_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::TRACE.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry()
        .with(UiLoggingLayer::new())
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Initialize logging with a specific UI level
pub fn init_logging_with_level(level: LogLevel) {
    LogLevelManager::global().set_level(level);
    init_logging();
}
