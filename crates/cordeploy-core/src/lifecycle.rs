//! Reconciliation cycle state machine

use serde::{Deserialize, Serialize};

/// States of one reconciliation cycle
///
/// State transitions:
/// ```text
/// Idle → ClearingOutput → CopyingSourceAssets → BuildingArguments
///      → GuardedInvocation → CollectingArtifacts → MergingContext
///      → CopyingBackAssets → DiffingFileSets → Done
///
/// Idle → Done                  (plugin disabled)
/// ClearingOutput → Done        (no output location for the platform)
/// CollectingArtifacts → Done   (build left no artifacts)
/// Any non-terminal state → Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileState {
    /// No step has run yet
    #[default]
    Idle,
    /// Removing the previous build output
    ClearingOutput,
    /// Copying the web build into the native project
    CopyingSourceAssets,
    /// Deriving the packaging tool arguments
    BuildingArguments,
    /// Running the packaging tool under the log level guard
    GuardedInvocation,
    /// Listing the build output directory
    CollectingArtifacts,
    /// Appending artifacts to the per-platform accumulator
    MergingContext,
    /// Copying the native project's web assets back into the dist directory
    CopyingBackAssets,
    /// Comparing the dist listing with the tracked file list
    DiffingFileSets,
    /// Cycle finished
    Done,
    /// Cycle aborted
    Failed,
}

impl ReconcileState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: ReconcileState) -> bool {
        use ReconcileState::*;
        if target == Failed {
            return !self.is_terminal();
        }
        matches!(
            (self, target),
            (Idle, ClearingOutput)
                | (ClearingOutput, CopyingSourceAssets)
                | (CopyingSourceAssets, BuildingArguments)
                | (BuildingArguments, GuardedInvocation)
                | (GuardedInvocation, CollectingArtifacts)
                | (CollectingArtifacts, MergingContext)
                | (MergingContext, CopyingBackAssets)
                | (CopyingBackAssets, DiffingFileSets)
                | (DiffingFileSets, Done)
                // Early exits
                | (Idle, Done)
                | (ClearingOutput, Done)
                | (CollectingArtifacts, Done)
        )
    }

    /// Check if the cycle has ended in this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReconcileState::Done | ReconcileState::Failed)
    }

    /// Whether leaving this state means the packaging tool already ran
    pub fn is_post_build(&self) -> bool {
        use ReconcileState::*;
        matches!(
            self,
            CollectingArtifacts | MergingContext | CopyingBackAssets | DiffingFileSets
        )
    }

    /// Get a human-readable description of this state
    pub fn description(&self) -> &'static str {
        match self {
            ReconcileState::Idle => "waiting to start",
            ReconcileState::ClearingOutput => "clearing previous build output",
            ReconcileState::CopyingSourceAssets => "copying web build into native project",
            ReconcileState::BuildingArguments => "building packaging tool arguments",
            ReconcileState::GuardedInvocation => "running packaging tool",
            ReconcileState::CollectingArtifacts => "collecting build artifacts",
            ReconcileState::MergingContext => "merging artifacts into context",
            ReconcileState::CopyingBackAssets => "copying native web assets back",
            ReconcileState::DiffingFileSets => "diffing dist file listings",
            ReconcileState::Done => "finished",
            ReconcileState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for ReconcileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileState::Idle => write!(f, "Idle"),
            ReconcileState::ClearingOutput => write!(f, "ClearingOutput"),
            ReconcileState::CopyingSourceAssets => write!(f, "CopyingSourceAssets"),
            ReconcileState::BuildingArguments => write!(f, "BuildingArguments"),
            ReconcileState::GuardedInvocation => write!(f, "GuardedInvocation"),
            ReconcileState::CollectingArtifacts => write!(f, "CollectingArtifacts"),
            ReconcileState::MergingContext => write!(f, "MergingContext"),
            ReconcileState::CopyingBackAssets => write!(f, "CopyingBackAssets"),
            ReconcileState::DiffingFileSets => write!(f, "DiffingFileSets"),
            ReconcileState::Done => write!(f, "Done"),
            ReconcileState::Failed => write!(f, "Failed"),
        }
    }
}
