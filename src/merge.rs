//! Merge primitives for atlas records
//!
//! Datasets are concatenated as-is. Platforms are unioned by `id`:
//! the first record seen for an id wins and later ones are dropped whole,
//! without any field-level merge.

use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::collect::platform_key;

/// Counts from a single [`union_by_id`] pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnionOutcome {
    /// Records appended to the accumulated list
    pub added: usize,
    /// Records dropped because their id was already present
    pub skipped: usize,
}

/// Concatenate two dataset lists, first then second, keeping duplicates
pub fn concat_datasets(first: Vec<Value>, second: Vec<Value>) -> Vec<Value> {
    let mut datasets = first;
    datasets.extend(second);
    datasets
}

/// Append `incoming` platforms to `accumulated`, skipping any whose id is
/// already present
///
/// The seen set starts from every record already in `accumulated` and grows
/// with each appended record, so duplicates inside `incoming` collapse too.
/// Ids are compared by value whatever their JSON type; records without an
/// `id` share a single "no id" key.
pub fn union_by_id<I>(accumulated: &mut Vec<Value>, incoming: I) -> UnionOutcome
where
    I: IntoIterator<Item = Value>,
{
    let mut seen: HashSet<Option<String>> = accumulated.iter().map(platform_key).collect();
    let mut outcome = UnionOutcome::default();

    for platform in incoming {
        let key = platform_key(&platform);
        if seen.contains(&key) {
            debug!(id = ?key, "Skipping duplicate platform");
            outcome.skipped += 1;
            continue;
        }
        seen.insert(key);
        accumulated.push(platform);
        outcome.added += 1;
    }

    outcome
}
