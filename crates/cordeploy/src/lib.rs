//! # cordeploy
//!
//! A deploy pipeline adapter that hands a web build to corber (Cordova) for
//! native packaging and reports what the packaging step produced.
//!
//! One deploy cycle:
//! - clears the platform's build output directory
//! - copies the web build into the Cordova project's `www`
//! - runs `corber build` with arguments derived from the configuration,
//!   restoring the shared log level afterwards
//! - collects the packaged artifacts
//! - copies the native web assets back into the dist directory and reports
//!   the files that changed
//!
//! ## Running a cycle
//!
//! ```ignore
//! use cordeploy::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> DeployResult<()> {
//!     init_logging();
//!
//!     let config = DeployConfig::from_toml_str("[corber]\nplatform = \"android\"\n")?;
//!     let plugin = Reconciler::new(
//!         config,
//!         Arc::new(CorberCli::new()),
//!         Arc::new(LogLevelManager::global()),
//!     );
//!
//!     let mut ctx = BuildContext::new(".", "dist").with_dist_files(["index.html"]);
//!     if let Some(update) = plugin.did_build(&ctx).await? {
//!         ctx.apply(update);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`cordeploy_core`] - Configuration, context, state machine, algorithms
//! - [`cordeploy_logging`] - Ambient log level and its guard
//! - [`cordeploy_native`] - Cordova project layout, filesystem steps, corber
//! - [`cordeploy_pipeline`] - The reconciliation orchestrator

// Re-export core types
pub use cordeploy_core::{
    AmbientLogLevel, BuildContext, ContextUpdate, DeployConfig, DeployError, DeployPlugin,
    DeployResult, FileSet, LogLevel, PackagingTool, ReconcileState, build_args,
    symmetric_difference,
};

// Re-export logging
pub use cordeploy_logging::{
    LevelGuard, LogLevelManager, UiLoggingLayer, init_logging, init_logging_with_level,
    run_guarded,
};

// Re-export native project support
pub use cordeploy_native::{CorberCli, NativeLayout, Platform, PlatformPaths, fsops};

// Re-export the orchestrator
pub use cordeploy_pipeline::{CycleOutcome, DeployStages, Reconciler};

// Re-export common dependencies that plugin authors need
pub use async_trait::async_trait;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use cordeploy::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        AmbientLogLevel, BuildContext, ContextUpdate, CorberCli, DeployConfig, DeployError,
        DeployPlugin, DeployResult, DeployStages, LogLevel, LogLevelManager, PackagingTool,
        ReconcileState, Reconciler, async_trait, init_logging,
    };

    pub use serde::{Deserialize, Serialize};
}
