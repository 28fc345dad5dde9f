//! `run`, `args`, and `locate` command implementations

use crate::settings::ConfigArgs;
use anyhow::{Context, Result};
use cordeploy_core::{BuildContext, PackagingTool, build_args};
use cordeploy_logging::LogLevelManager;
use cordeploy_native::{CorberCli, NativeLayout, fsops};
use cordeploy_pipeline::{DeployStages, Reconciler};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a `run` starts from
#[derive(Debug, Clone)]
pub struct RunTarget {
    pub project: PathBuf,
    pub dist: Option<PathBuf>,
    pub context: Option<PathBuf>,
}

impl RunTarget {
    /// Context to start the cycle with
    ///
    /// A context file is used as is. Otherwise the dist directory (default
    /// `<project>/dist`) is listed to seed the tracked file list.
    pub fn initial_context(&self) -> Result<BuildContext> {
        if let Some(path) = &self.context {
            let content = std::fs::read(path)
                .with_context(|| format!("Failed to read context: {:?}", path))?;
            return serde_json::from_slice(&content)
                .with_context(|| format!("Failed to parse context: {:?}", path));
        }

        let dist = self
            .dist
            .clone()
            .unwrap_or_else(|| self.project.join("dist"));
        let files = fsops::list_files_recursive(&dist)
            .with_context(|| format!("Failed to list web build in {:?}", dist))?;
        Ok(BuildContext::new(&self.project, dist).with_dist_files(files))
    }
}

/// Run command implementation
pub async fn run(
    target: RunTarget,
    settings: &ConfigArgs,
    program: String,
    name: String,
) -> Result<()> {
    let config = settings.load()?;
    let mut ctx = target.initial_context()?;

    tracing::info!(
        plugin = %name,
        platform = %config.platform,
        project = %ctx.project_root().display(),
        "Starting deploy cycle"
    );

    let reconciler = Reconciler::new(
        config,
        Arc::new(CorberCli::with_program(program)),
        Arc::new(LogLevelManager::global()),
    )
    .with_name(name);

    let mut stages = DeployStages::new();
    stages.register(Arc::new(reconciler));
    let applied = stages
        .did_build(&mut ctx)
        .await
        .context("Deploy cycle failed")?;

    if applied == 0 {
        tracing::warn!("Deploy cycle finished without updating the context");
    }
    println!("{}", serde_json::to_string_pretty(&ctx)?);

    Ok(())
}

/// Args command implementation
pub fn args(settings: &ConfigArgs, program: String) -> Result<()> {
    let config = settings.load()?;
    let tool = CorberCli::with_program(program);
    println!("{}", tool.command_line(&build_args(&config)));
    Ok(())
}

/// Locate command implementation
pub fn locate(project: &Path, settings: &ConfigArgs) -> Result<()> {
    let config = settings.load()?;
    let dir = output_dir(project, &config.platform, config.release)?;
    println!("{}", dir.display());
    Ok(())
}

/// Artifact directory of `platform` inside `project`
pub fn output_dir(project: &Path, platform: &str, release: bool) -> Result<PathBuf> {
    NativeLayout::for_project(project)
        .build_output_dir(platform, release)
        .with_context(|| {
            format!(
                "Build artifacts are not supported yet for platform {}",
                platform
            )
        })
}
