//! Operator search.
//!
//! Matching is a case-insensitive substring test on `operator`. Output keeps
//! the input order; ordering is the sorter's job.

use nodescope_types::NodeRecord;

/// Positions in `records` whose operator contains `term`, in input order.
///
/// An empty term keeps every record.
pub fn matching_indices(records: &[NodeRecord], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, node)| node.operator_contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

pub fn apply<'a>(records: &'a [NodeRecord], term: &str) -> Vec<&'a NodeRecord> {
    matching_indices(records, term)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
