//! The deploy cycle orchestrator

use crate::cycle::CycleTracker;
use async_trait::async_trait;
use cordeploy_core::{
    AmbientLogLevel, BuildContext, ContextUpdate, DeployConfig, DeployError, DeployPlugin,
    DeployResult, PackagingTool, ReconcileState, build_args, symmetric_difference,
};
use cordeploy_logging::run_guarded;
use cordeploy_native::{NativeLayout, fsops};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::Instrument;

/// Instance name used when none is given
pub const DEFAULT_PLUGIN_NAME: &str = "corber";

/// What one reconciliation cycle produced
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// States visited, `Idle` first, `Done` last
    pub trail: Vec<ReconcileState>,
    /// Context enrichment, absent when the cycle ended early
    pub update: Option<ContextUpdate>,
}

impl CycleOutcome {
    pub fn final_state(&self) -> ReconcileState {
        self.trail.last().copied().unwrap_or_default()
    }
}

/// Runs the native packaging step of a deploy and reconciles its output
///
/// One cycle clears the platform's output directory, hands the web build to
/// the native project, runs the packaging tool with the ambient log level
/// guarded, then collects the artifacts and the files the native build added
/// to the dist directory. Fatal failures leave the caller's context
/// untouched; the cycle only ever returns an update.
///
/// Cycles of one reconciler must not overlap: they share the native project
/// on disk and the ambient log level.
pub struct Reconciler {
    name: String,
    config: DeployConfig,
    tool: Arc<dyn PackagingTool>,
    ui: Arc<dyn AmbientLogLevel>,
    last_trail: RwLock<Vec<ReconcileState>>,
}

impl Reconciler {
    pub fn new(
        config: DeployConfig,
        tool: Arc<dyn PackagingTool>,
        ui: Arc<dyn AmbientLogLevel>,
    ) -> Self {
        Self {
            name: DEFAULT_PLUGIN_NAME.to_string(),
            config,
            tool,
            ui,
            last_trail: RwLock::new(vec![ReconcileState::Idle]),
        }
    }

    /// Set the instance name shown in diagnostics
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// State the most recent cycle ended in
    pub fn last_state(&self) -> ReconcileState {
        self.last_trail
            .read()
            .last()
            .copied()
            .unwrap_or_default()
    }

    /// States visited by the most recent cycle
    pub fn last_trail(&self) -> Vec<ReconcileState> {
        self.last_trail.read().clone()
    }

    /// Run one reconciliation cycle against `ctx`
    ///
    /// # Errors
    ///
    /// Filesystem failures ([`DeployError::Io`]) and packaging tool failures
    /// ([`DeployError::ExternalTool`]) abort the cycle. An unsupported
    /// platform or an empty output directory are logged and end the cycle
    /// without an update instead.
    pub async fn run_cycle(&self, ctx: &BuildContext) -> DeployResult<CycleOutcome> {
        let span = tracing::info_span!(
            "reconcile",
            plugin = %self.name,
            platform = %self.config.platform
        );
        let mut cycle = CycleTracker::new();
        let result = self.reconcile(ctx, &mut cycle).instrument(span).await;

        match result {
            Ok(update) => {
                let trail = cycle.into_trail();
                *self.last_trail.write() = trail.clone();
                Ok(CycleOutcome { trail, update })
            }
            Err(err) => {
                let failed_in = cycle.current();
                cycle.fail();
                *self.last_trail.write() = cycle.into_trail();
                if failed_in.is_post_build() {
                    tracing::error!(
                        plugin = %self.name,
                        state = %failed_in,
                        error = %err,
                        "Deploy cycle failed after the build ran, context left unchanged"
                    );
                } else {
                    tracing::error!(
                        plugin = %self.name,
                        state = %failed_in,
                        error = %err,
                        "Deploy cycle failed"
                    );
                }
                Err(err)
            }
        }
    }

    async fn reconcile(
        &self,
        ctx: &BuildContext,
        cycle: &mut CycleTracker,
    ) -> DeployResult<Option<ContextUpdate>> {
        let platform = self.config.platform.as_str();

        if !self.config.enabled {
            tracing::debug!("Plugin disabled, skipping native build");
            cycle.transition_to(ReconcileState::Done)?;
            return Ok(None);
        }

        cycle.transition_to(ReconcileState::ClearingOutput)?;
        let layout = NativeLayout::for_project(ctx.project_root());
        let Some(paths) = layout.locate(platform, self.config.release) else {
            let err = DeployError::UnsupportedPlatform(platform.to_string());
            tracing::error!(
                error = %err,
                "Adding build artifacts to the deploy context is not supported yet for platform {platform}"
            );
            cycle.transition_to(ReconcileState::Done)?;
            return Ok(None);
        };
        fsops::clear_dir(&paths.output_dir)?;

        cycle.transition_to(ReconcileState::CopyingSourceAssets)?;
        let www = layout.www_dir();
        tracing::debug!("Copying framework build to {}", www.display());
        fsops::copy_dir(ctx.dist_dir(), &www)?;

        cycle.transition_to(ReconcileState::BuildingArguments)?;
        let args = build_args(&self.config);

        cycle.transition_to(ReconcileState::GuardedInvocation)?;
        tracing::debug!("Running: {}", self.tool.command_line(&args));
        let ui = self.ui.as_ref();
        run_guarded(ui, || self.tool.build(&args, ui, ctx.project_root())).await?;
        tracing::debug!("Corber build okay");

        cycle.transition_to(ReconcileState::CollectingArtifacts)?;
        let artifacts = fsops::list_dir(&paths.output_dir)?;
        if artifacts.is_empty() {
            let err = DeployError::NoArtifactsCaptured(paths.output_dir.clone());
            tracing::warn!(error = %err, "Could not capture any build artifacts");
            cycle.transition_to(ReconcileState::Done)?;
            return Ok(None);
        }
        tracing::debug!(
            "Build artifacts: {}",
            artifacts
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        cycle.transition_to(ReconcileState::MergingContext)?;
        let merged = ctx.merged_artifacts(platform, &artifacts);

        cycle.transition_to(ReconcileState::CopyingBackAssets)?;
        fsops::copy_dir(&paths.web_assets_dir, ctx.dist_dir())?;

        cycle.transition_to(ReconcileState::DiffingFileSets)?;
        let listing = fsops::list_files_recursive(ctx.dist_dir())?;
        let dist_files: Vec<String> = symmetric_difference(&ctx.dist_files, &listing)
            .into_iter()
            .collect();
        tracing::debug!(files = dist_files.len(), "Reconciled dist files");

        cycle.transition_to(ReconcileState::Done)?;
        Ok(Some(ContextUpdate {
            platform: platform.to_string(),
            artifacts: merged,
            dist_files,
        }))
    }
}

#[async_trait]
impl DeployPlugin for Reconciler {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &DeployConfig {
        &self.config
    }

    async fn did_build(&self, ctx: &BuildContext) -> DeployResult<Option<ContextUpdate>> {
        self.run_cycle(ctx).await.map(|outcome| outcome.update)
    }
}

#[cfg(test)]
#[path = "reconciler/reconciler_tests.rs"]
mod reconciler_tests;
