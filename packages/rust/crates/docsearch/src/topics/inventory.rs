//! Topic inventory across all roots.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::locator::TopicLocator;

/// Unique topic file names under `roots`, sorted lexicographically.
///
/// Names are compared exactly, so `Git.yaml` and `git.yaml` are two
/// topics. Sorting happens on the full file name; callers strip the
/// suffix when printing.
#[must_use]
pub fn gather_inventory(roots: &[PathBuf]) -> Vec<String> {
    let names: BTreeSet<String> = TopicLocator::new(roots)
        .topics()
        .map(|topic| topic.file_name)
        .collect();
    names.into_iter().collect()
}
