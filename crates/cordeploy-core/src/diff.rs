//! Symmetric difference of two file listings
//!
//! Used to tell which files of the dist directory changed across the native
//! build. Note that the result is the *symmetric* difference: a file that was
//! tracked before and is gone afterwards is reported just like a new one.
//! Downstream stages treat every reported path as "new", so a removal would be
//! misreported; this is the observed behaviour and is kept on purpose until
//! the intended semantics are confirmed.

use std::collections::{BTreeSet, HashSet};

/// Paths present in exactly one of two listings
pub type FileSet = BTreeSet<String>;

/// Compute the paths present in exactly one of `before` and `after`.
///
/// A presence map is seeded from `before`; each distinct path of `after`
/// then either cancels its entry (unchanged) or adds one (new). Whatever
/// remains in the map is the result. Duplicates within one input collapse.
///
/// # Examples
///
/// ```
/// use cordeploy_core::symmetric_difference;
///
/// let diff = symmetric_difference(["a.js", "b.css"], ["a.js", "b.css", "cordova.js"]);
/// assert_eq!(diff.into_iter().collect::<Vec<_>>(), vec!["cordova.js"]);
/// ```
pub fn symmetric_difference<A, B, S, T>(before: A, after: B) -> FileSet
where
    A: IntoIterator<Item = S>,
    B: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut present: HashSet<String> = before
        .into_iter()
        .map(|path| path.as_ref().to_string())
        .collect();

    let mut seen = HashSet::new();
    for path in after {
        let path = path.as_ref();
        if !seen.insert(path.to_string()) {
            continue;
        }
        if !present.remove(path) {
            present.insert(path.to_string());
        }
    }

    present.into_iter().collect()
}
