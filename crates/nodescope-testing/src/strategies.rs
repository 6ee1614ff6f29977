//! Proptest generators.

use nodescope_types::{NodeRecord, PageSize, SortConfig, SortDirection, SortKey};
use proptest::prelude::*;
use proptest::sample::select;

/// Fee values drawn from a short list so ties are common. Both signed
/// zeros are included; they must compare equal.
fn fee() -> impl Strategy<Value = f64> {
    select(vec![-0.0, 0.0, 0.5, 1.0, 2.0, 2.5, 5.0, 10.0])
}

fn uptime() -> impl Strategy<Value = f64> {
    (0u32..=10_000).prop_map(|v| v as f64 / 100.0)
}

/// Collections of up to `max_len` nodes. Operators are made unique by
/// suffixing the row position to a random mixed-case prefix.
pub fn nodes(max_len: usize) -> impl Strategy<Value = Vec<NodeRecord>> {
    prop::collection::vec(("[a-fA-F0-9]{0,4}", any::<bool>(), uptime(), fee()), 0..=max_len)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (prefix, status, uptime, fee))| {
                    NodeRecord::new(format!("0x{}{:03}", prefix, i), status, uptime, fee)
                })
                .collect()
        })
}

pub fn sort_config() -> impl Strategy<Value = SortConfig> {
    (
        select(SortKey::ALL.to_vec()),
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)],
    )
        .prop_map(|(key, direction)| SortConfig::new(key, direction))
}

pub fn page_size() -> impl Strategy<Value = PageSize> {
    select(PageSize::ALL.to_vec())
}

pub fn search_term() -> impl Strategy<Value = String> {
    "[a-fA-FxX0-9]{0,3}"
}
