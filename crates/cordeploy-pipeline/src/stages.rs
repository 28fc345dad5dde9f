//! Sequential `didBuild` stage over registered plugins

use cordeploy_core::{BuildContext, DeployPlugin, DeployResult};
use std::sync::Arc;

/// Registered deploy plugins, run in registration order
///
/// Each plugin sees the context as enriched by the plugins before it. A
/// failing plugin stops the stage; updates already applied are kept.
#[derive(Default)]
pub struct DeployStages {
    plugins: Vec<Arc<dyn DeployPlugin>>,
}

impl DeployStages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: Arc<dyn DeployPlugin>) {
        tracing::debug!(plugin = plugin.name(), "Registered deploy plugin");
        self.plugins.push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run every plugin's `did_build` and apply the updates to `ctx`
    ///
    /// Returns how many plugins enriched the context.
    pub async fn did_build(&self, ctx: &mut BuildContext) -> DeployResult<usize> {
        let mut applied = 0;
        for plugin in &self.plugins {
            if let Some(update) = plugin.did_build(ctx).await? {
                tracing::info!(
                    plugin = plugin.name(),
                    artifacts = update.artifacts.len(),
                    files = update.dist_files.len(),
                    "Context updated"
                );
                ctx.apply(update);
                applied += 1;
            }
        }
        Ok(applied)
    }
}
