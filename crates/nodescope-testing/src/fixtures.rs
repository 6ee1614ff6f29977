//! Sample node snapshots.

use anyhow::Result;
use nodescope_types::{NodeEnvelope, NodeRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Three-node reference set: two share a fee, one is inactive.
///
/// Stats: 3 total, 2 active, avg uptime 74.92, avg fee 3.
pub fn reference_nodes() -> Vec<NodeRecord> {
    vec![
        NodeRecord::new("0xAAA", true, 99.5, 2.0),
        NodeRecord::new("0xBBB", false, 50.0, 2.0),
        NodeRecord::new("0xCCC", true, 75.25, 5.0),
    ]
}

const FEES: [f64; 6] = [0.0, 1.0, 2.0, 2.5, 5.0, 10.0];

/// Deterministic snapshot of `count` nodes with unique operators.
///
/// Fees come from a small set so sorts by fee produce plenty of ties.
pub fn generated_nodes(count: usize) -> Vec<NodeRecord> {
    (0..count)
        .map(|i| {
            NodeRecord::new(
                format!("0x{:08x}{:04}", (i as u64).wrapping_mul(2_654_435_761) as u32, i),
                i % 3 != 0,
                ((i * 37) % 1001) as f64 / 10.0,
                FEES[i % FEES.len()],
            )
        })
        .collect()
}

/// Write `nodes` as the monitor envelope `{ "nodes": [...] }`.
pub fn write_envelope(dir: &Path, name: &str, nodes: &[NodeRecord]) -> Result<PathBuf> {
    let envelope = NodeEnvelope {
        nodes: nodes.to_vec(),
    };
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(&envelope)?)?;
    Ok(path)
}

/// Write `nodes` as a bare JSON array.
pub fn write_array(dir: &Path, name: &str, nodes: &[NodeRecord]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(nodes)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_operators_are_unique() {
        let nodes = generated_nodes(1000);
        let unique: HashSet<_> = nodes.iter().map(|n| n.operator.as_str()).collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_generated_values_stay_in_domain() {
        for node in generated_nodes(500) {
            assert!((0.0..=100.0).contains(&node.uptime));
            assert!((0.0..=100.0).contains(&node.fee));
        }
    }
}
