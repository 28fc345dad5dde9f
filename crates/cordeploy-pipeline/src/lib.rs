//! cordeploy-pipeline - Deploy cycle orchestration
//!
//! [`Reconciler`] drives one native packaging cycle through the
//! [`ReconcileState`](cordeploy_core::ReconcileState) machine and turns its
//! results into a [`ContextUpdate`](cordeploy_core::ContextUpdate).
//! [`DeployStages`] runs registered plugins in order and applies their
//! updates to the shared context.

mod cycle;
mod reconciler;
mod stages;

pub use cycle::CycleTracker;
pub use reconciler::{CycleOutcome, DEFAULT_PLUGIN_NAME, Reconciler};
pub use stages::DeployStages;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CycleOutcome, DeployStages, Reconciler};
}
