//! Single-key ordering.
//!
//! Uses the standard library's stable sort, so records with equal keys keep
//! their input order in both directions. Descending is a reversed comparator,
//! not a reversed list, which would break that guarantee.

use nodescope_types::{NodeRecord, SortConfig, SortDirection, SortKey};
use std::cmp::Ordering;

/// Ascending comparison on a single key.
///
/// `status` orders inactive before active; numeric fields compare by value.
pub fn compare(a: &NodeRecord, b: &NodeRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Operator => a.operator.cmp(&b.operator),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Uptime => compare_numeric(a.uptime, b.uptime),
        SortKey::Fee => compare_numeric(a.fee, b.fee),
    }
}

/// IEEE total order with `-0.0` folded into `0.0`, so signed zeros tie
/// (the histogram already puts them in one bucket).
pub fn compare_numeric(a: f64, b: f64) -> Ordering {
    fold_zero(a).total_cmp(&fold_zero(b))
}

fn fold_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

pub fn compare_directed(a: &NodeRecord, b: &NodeRecord, config: SortConfig) -> Ordering {
    match config.direction {
        SortDirection::Asc => compare(a, b, config.key),
        SortDirection::Desc => compare(b, a, config.key),
    }
}

/// Reorder `indices` (positions into `records`) according to `config`.
pub fn sort_indices(records: &[NodeRecord], indices: &mut [usize], config: SortConfig) {
    indices.sort_by(|&a, &b| compare_directed(&records[a], &records[b], config));
}

pub fn apply<'a>(records: &[&'a NodeRecord], config: SortConfig) -> Vec<&'a NodeRecord> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| compare_directed(a, b, config));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(rows: &[&NodeRecord]) -> Vec<String> {
        rows.iter().map(|n| n.operator.clone()).collect()
    }

    fn nodes() -> Vec<NodeRecord> {
        vec![
            NodeRecord::new("0xAAA", true, 99.5, 2.0),
            NodeRecord::new("0xBBB", false, 50.0, 2.0),
            NodeRecord::new("0xCCC", true, 75.25, 5.0),
        ]
    }

    #[test]
    fn test_fee_ascending_keeps_tied_pair_in_input_order() {
        let records = nodes();
        let refs: Vec<_> = records.iter().collect();
        let ordered = apply(&refs, SortConfig::new(SortKey::Fee, SortDirection::Asc));
        assert_eq!(operators(&ordered), vec!["0xAAA", "0xBBB", "0xCCC"]);
    }

    #[test]
    fn test_fee_descending_keeps_tied_pair_in_input_order() {
        let records = nodes();
        let refs: Vec<_> = records.iter().collect();
        let ordered = apply(&refs, SortConfig::new(SortKey::Fee, SortDirection::Desc));
        assert_eq!(operators(&ordered), vec!["0xCCC", "0xAAA", "0xBBB"]);
    }

    #[test]
    fn test_signed_zero_fees_tie() {
        let records = vec![
            NodeRecord::new("0xA", true, 1.0, 0.0),
            NodeRecord::new("0xB", true, 1.0, -0.0),
        ];
        let refs: Vec<_> = records.iter().collect();

        let asc = apply(&refs, SortConfig::new(SortKey::Fee, SortDirection::Asc));
        assert_eq!(operators(&asc), vec!["0xA", "0xB"]);
        let desc = apply(&refs, SortConfig::new(SortKey::Fee, SortDirection::Desc));
        assert_eq!(operators(&desc), vec!["0xA", "0xB"]);
    }

    #[test]
    fn test_status_orders_inactive_first() {
        let records = nodes();
        let refs: Vec<_> = records.iter().collect();
        let ordered = apply(&refs, SortConfig::new(SortKey::Status, SortDirection::Asc));
        assert_eq!(operators(&ordered), vec!["0xBBB", "0xAAA", "0xCCC"]);
    }

    #[test]
    fn test_uptime_descending_is_default_order() {
        let records = nodes();
        let refs: Vec<_> = records.iter().collect();
        let ordered = apply(&refs, SortConfig::default());
        assert_eq!(operators(&ordered), vec!["0xAAA", "0xCCC", "0xBBB"]);
    }

    #[test]
    fn test_operator_is_lexicographic() {
        let records = vec![
            NodeRecord::new("b", true, 1.0, 1.0),
            NodeRecord::new("B", true, 1.0, 1.0),
            NodeRecord::new("a", true, 1.0, 1.0),
        ];
        let mut indices = vec![0, 1, 2];
        sort_indices(
            &records,
            &mut indices,
            SortConfig::new(SortKey::Operator, SortDirection::Asc),
        );
        assert_eq!(indices, vec![1, 2, 0]);
    }
}
