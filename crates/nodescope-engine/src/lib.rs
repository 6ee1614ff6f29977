// Engine module - pure derivations over a record snapshot
// Nothing in here holds state: every function maps inputs to a fresh value,
// which is what lets the runtime memoize each stage on its inputs alone.

pub mod aggregate;
pub mod filter;
pub mod paginate;
pub mod sort;

pub use aggregate::{FeeBucket, NodeStats, compute_fee_histogram, compute_stats};
pub use paginate::{Page, PageInfo};

use nodescope_types::{NodeRecord, ViewState};

// Façade API - one-shot pipeline for library callers that do not need
// memoization. The runtime controller runs the same stages individually
// and must agree with these results.

/// Filter and order `records` for `state`, all pages.
pub fn derive_rows<'a>(records: &'a [NodeRecord], state: &ViewState) -> Vec<&'a NodeRecord> {
    let mut indices = filter::matching_indices(records, &state.search_term);
    sort::sort_indices(records, &mut indices, state.sort);
    indices.into_iter().map(|i| &records[i]).collect()
}

/// Same as [`derive_rows`] followed by pagination.
///
/// The returned page is already clamped; `info.page` may differ from
/// `state.page` when the requested page no longer exists.
pub fn derive_page<'a>(
    records: &'a [NodeRecord],
    state: &ViewState,
) -> (Vec<&'a NodeRecord>, PageInfo) {
    let ordered = derive_rows(records, state);
    let info = paginate::page_info(ordered.len(), state.page, state.page_size);
    let rows = ordered[info.start_index..info.end_index].to_vec();
    (rows, info)
}

