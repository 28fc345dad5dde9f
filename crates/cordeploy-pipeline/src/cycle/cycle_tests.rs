#![allow(non_snake_case)]

use super::*;
use cordeploy_core::ReconcileState::*;

#[test]
fn CycleTracker___new___starts_idle() {
    let cycle = CycleTracker::new();

    assert_eq!(cycle.current(), Idle);
    assert_eq!(cycle.trail(), &[Idle]);
}

#[test]
fn CycleTracker___full_happy_path___records_every_state() {
    let mut cycle = CycleTracker::new();
    let path = [
        ClearingOutput,
        CopyingSourceAssets,
        BuildingArguments,
        GuardedInvocation,
        CollectingArtifacts,
        MergingContext,
        CopyingBackAssets,
        DiffingFileSets,
        Done,
    ];

    for state in path {
        cycle.transition_to(state).unwrap();
    }

    assert_eq!(cycle.trail().len(), path.len() + 1);
    assert_eq!(cycle.current(), Done);
}

#[test]
fn CycleTracker___skipping_a_step___is_invalid_state() {
    let mut cycle = CycleTracker::new();
    cycle.transition_to(ClearingOutput).unwrap();

    let err = cycle.transition_to(GuardedInvocation).unwrap_err();

    assert!(matches!(err, DeployError::InvalidState { .. }));
    assert_eq!(cycle.current(), ClearingOutput);
}

#[test]
fn CycleTracker___fail___appends_failed_once() {
    let mut cycle = CycleTracker::new();
    cycle.transition_to(ClearingOutput).unwrap();

    cycle.fail();
    cycle.fail();

    assert_eq!(cycle.into_trail(), vec![Idle, ClearingOutput, Failed]);
}

#[test]
fn CycleTracker___fail_after_done___keeps_done() {
    let mut cycle = CycleTracker::new();
    cycle.transition_to(Done).unwrap();

    cycle.fail();

    assert_eq!(cycle.current(), Done);
}
