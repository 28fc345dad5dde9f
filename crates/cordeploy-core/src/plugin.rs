//! Deploy plugin and packaging tool traits

use crate::{AmbientLogLevel, BuildContext, ContextUpdate, DeployConfig, DeployResult};
use async_trait::async_trait;
use std::path::Path;

/// A stage of the host deploy pipeline
///
/// The host calls [`did_build`](Self::did_build) once per deploy cycle, after
/// the web build finished, and applies the returned update to its context.
///
/// # Example
///
/// ```ignore
/// use cordeploy_core::prelude::*;
///
/// struct Noop {
///     config: DeployConfig,
/// }
///
/// #[async_trait::async_trait]
/// impl DeployPlugin for Noop {
///     fn name(&self) -> &str {
///         "noop"
///     }
///
///     fn config(&self) -> &DeployConfig {
///         &self.config
///     }
///
///     async fn did_build(&self, _ctx: &BuildContext) -> DeployResult<Option<ContextUpdate>> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait DeployPlugin: Send + Sync {
    /// Instance name the plugin was created with
    fn name(&self) -> &str;

    /// Configuration resolved for this instance
    fn config(&self) -> &DeployConfig;

    /// Run after the web build
    ///
    /// Returns `None` when the cycle completed without anything to add.
    async fn did_build(&self, ctx: &BuildContext) -> DeployResult<Option<ContextUpdate>>;
}

/// External native packaging tool
///
/// Implementations may change the ambient level through `ui` as a side
/// effect (quiet mode does); callers are expected to restore it.
#[async_trait]
pub trait PackagingTool: Send + Sync {
    /// Full command line for `args`, echoed in diagnostics
    fn command_line(&self, args: &[String]) -> String;

    /// Build the native project rooted at `project_root`
    async fn build(
        &self,
        args: &[String],
        ui: &dyn AmbientLogLevel,
        project_root: &Path,
    ) -> DeployResult<()>;
}

#[cfg(test)]
#[path = "plugin/plugin_tests.rs"]
mod plugin_tests;
