//! Summary numbers over the whole snapshot.
//!
//! These never see the filtered or paged view.

use nodescope_types::NodeRecord;
use nodescope_types::record::format_fee;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeStats {
    pub total_nodes: usize,
    pub active_nodes: usize,
    /// Mean uptime rounded to two decimals, 0 for an empty snapshot
    pub avg_uptime: f64,
    /// Mean fee rounded to two decimals, 0 for an empty snapshot
    pub avg_fee: f64,
}

impl NodeStats {
    pub fn inactive_nodes(&self) -> usize {
        self.total_nodes - self.active_nodes
    }
}

/// One bar of the fee distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBucket {
    pub fee_label: String,
    pub count: usize,
}

pub fn compute_stats<'a, I>(records: I) -> NodeStats
where
    I: IntoIterator<Item = &'a NodeRecord>,
{
    let mut total_nodes = 0usize;
    let mut active_nodes = 0usize;
    let mut uptime_sum = 0.0f64;
    let mut fee_sum = 0.0f64;

    for node in records {
        total_nodes += 1;
        if node.status {
            active_nodes += 1;
        }
        uptime_sum += node.uptime;
        fee_sum += node.fee;
    }

    if total_nodes == 0 {
        return NodeStats::default();
    }

    NodeStats {
        total_nodes,
        active_nodes,
        avg_uptime: round2(uptime_sum / total_nodes as f64),
        avg_fee: round2(fee_sum / total_nodes as f64),
    }
}

/// Count records per exact fee value.
///
/// Buckets are keyed by the fee's decimal text, so `2` and `2.0` share a bar
/// and `2.25` gets its own. Output is ordered by ascending fee.
pub fn compute_fee_histogram<'a, I>(records: I) -> Vec<FeeBucket>
where
    I: IntoIterator<Item = &'a NodeRecord>,
{
    let mut buckets: HashMap<String, (f64, usize)> = HashMap::new();
    for node in records {
        buckets
            .entry(format_fee(node.fee))
            .or_insert((node.fee, 0))
            .1 += 1;
    }

    let mut ordered: Vec<(String, f64, usize)> = buckets
        .into_iter()
        .map(|(text, (fee, count))| (text, fee, count))
        .collect();
    ordered.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    ordered
        .into_iter()
        .map(|(text, _, count)| FeeBucket {
            fee_label: format!("{}%", text),
            count,
        })
        .collect()
}

/// Round half away from zero to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
