//! Property-based tests for the file listing difference
//!
//! Checks the set-theoretic guarantees of `symmetric_difference` for
//! arbitrary listings, including listings with repeated entries.

use cordeploy_core::{FileSet, symmetric_difference};
use proptest::prelude::*;
use std::collections::BTreeSet;

// Strategy: small path alphabet so that listings overlap often
fn arb_path() -> impl Strategy<Value = String> {
    "[a-d]{1,2}(/[a-d]{1,2})?\\.(js|css)"
}

fn arb_listing() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_path(), 0..24)
}

fn dedupe(listing: &[String]) -> FileSet {
    listing.iter().cloned().collect()
}

proptest! {
    /// Property: the difference does not depend on argument order
    #[test]
    fn proptest_diff_is_symmetric(a in arb_listing(), b in arb_listing()) {
        prop_assert_eq!(symmetric_difference(&a, &b), symmetric_difference(&b, &a));
    }

    /// Property: a listing never differs from itself
    #[test]
    fn proptest_diff_with_self_is_empty(a in arb_listing()) {
        prop_assert!(symmetric_difference(&a, &a).is_empty());
    }

    /// Property: diffing against nothing yields the deduplicated listing
    #[test]
    fn proptest_diff_with_empty_is_dedupe(a in arb_listing()) {
        let empty: Vec<String> = Vec::new();

        prop_assert_eq!(symmetric_difference(&a, &empty), dedupe(&a));
        prop_assert_eq!(symmetric_difference(&empty, &a), dedupe(&a));
    }

    /// Property: membership is exactly "in one listing but not both"
    #[test]
    fn proptest_diff_membership(a in arb_listing(), b in arb_listing()) {
        let diff = symmetric_difference(&a, &b);
        let left = dedupe(&a);
        let right = dedupe(&b);

        let expected: BTreeSet<String> = left.symmetric_difference(&right).cloned().collect();
        prop_assert_eq!(diff, expected);
    }
}
