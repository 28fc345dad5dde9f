//! Shared deploy context and the additive updates a cycle produces

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Cross-stage record owned by the host deploy pipeline
///
/// A deploy cycle only reads it and hands back a [`ContextUpdate`]; the host
/// decides when to [`apply`](Self::apply) the update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
    /// Root of the web project (the native project lives below it)
    pub project_root: PathBuf,

    /// Distributable output of the web build
    pub dist_dir: PathBuf,

    /// Files tracked in `dist_dir` by the previous stage, relative to it
    #[serde(default)]
    pub dist_files: Vec<String>,

    /// Previously captured artifacts, per platform
    #[serde(default, rename = "corber")]
    pub artifacts: BTreeMap<String, Vec<PathBuf>>,
}

impl BuildContext {
    /// Create a context with no tracked files or artifacts
    pub fn new(project_root: impl Into<PathBuf>, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            dist_dir: dist_dir.into(),
            dist_files: Vec::new(),
            artifacts: BTreeMap::new(),
        }
    }

    /// Set the previously tracked file list
    pub fn with_dist_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dist_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Artifacts already captured for `platform`
    pub fn artifacts_for(&self, platform: &str) -> &[PathBuf] {
        self.artifacts
            .get(platform)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append `captured` to whatever is already recorded for `platform`
    ///
    /// The context itself is left untouched.
    pub fn merged_artifacts(&self, platform: &str, captured: &[PathBuf]) -> Vec<PathBuf> {
        let mut merged = self.artifacts_for(platform).to_vec();
        merged.extend_from_slice(captured);
        merged
    }

    /// Apply an update produced by a deploy cycle
    ///
    /// The platform's artifact list is replaced by the already merged one.
    /// Reported files are appended to `dist_files`, skipping those already
    /// tracked.
    pub fn apply(&mut self, update: ContextUpdate) {
        self.artifacts.insert(update.platform, update.artifacts);
        for file in update.dist_files {
            if !self.dist_files.contains(&file) {
                self.dist_files.push(file);
            }
        }
    }
}

/// Additional context produced by one reconciliation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextUpdate {
    /// Platform the artifacts were built for
    pub platform: String,

    /// Previously captured artifacts for `platform` followed by this cycle's
    pub artifacts: Vec<PathBuf>,

    /// Files that differ between the tracked list and the post-build listing
    pub dist_files: Vec<String>,
}
