//! State tracking for a single reconciliation cycle

use cordeploy_core::{DeployError, DeployResult, ReconcileState};

/// Records the states one cycle passes through
///
/// Every transition is checked against [`ReconcileState::can_transition_to`];
/// an illegal step is reported as [`DeployError::InvalidState`] and leaves the
/// tracker unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTracker {
    trail: Vec<ReconcileState>,
}

impl CycleTracker {
    /// Start a cycle in [`ReconcileState::Idle`]
    pub fn new() -> Self {
        Self {
            trail: vec![ReconcileState::Idle],
        }
    }

    /// Current state
    pub fn current(&self) -> ReconcileState {
        self.trail
            .last()
            .copied()
            .unwrap_or(ReconcileState::Idle)
    }

    /// Attempt to move to `target`
    pub fn transition_to(&mut self, target: ReconcileState) -> DeployResult<()> {
        let current = self.current();
        if !current.can_transition_to(target) {
            return Err(DeployError::InvalidState {
                expected: format!("state that can transition to {}", target),
                actual: current.to_string(),
            });
        }
        tracing::trace!(from = %current, to = %target, "{}", target.description());
        self.trail.push(target);
        Ok(())
    }

    /// Mark the cycle failed, unless it already ended
    pub fn fail(&mut self) {
        if !self.current().is_terminal() {
            self.trail.push(ReconcileState::Failed);
        }
    }

    /// All states visited so far, starting with `Idle`
    pub fn trail(&self) -> &[ReconcileState] {
        &self.trail
    }

    pub fn into_trail(self) -> Vec<ReconcileState> {
        self.trail
    }
}

impl Default for CycleTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "cycle/cycle_tests.rs"]
mod cycle_tests;
