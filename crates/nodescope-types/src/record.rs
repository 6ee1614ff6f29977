use serde::{Deserialize, Serialize};

/// One network participant as published by the node monitor.
///
/// `operator` is the identity key: it is unique across a snapshot and is
/// used as the row key when rendering lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub operator: String,
    pub status: bool,
    /// Percentage in [0, 100]
    pub uptime: f64,
    /// Percentage in [0, 100]
    pub fee: f64,
}

impl NodeRecord {
    pub fn new(operator: impl Into<String>, status: bool, uptime: f64, fee: f64) -> Self {
        Self {
            operator: operator.into(),
            status,
            uptime,
            fee,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.status { "Active" } else { "Inactive" }
    }

    /// Shortest decimal form of the fee, e.g. `2` or `2.5`.
    pub fn fee_text(&self) -> String {
        format_fee(self.fee)
    }

    /// Fee as shown in lists and histogram buckets, e.g. `2.5%`.
    pub fn fee_label(&self) -> String {
        format!("{}%", self.fee_text())
    }

    pub fn uptime_label(&self) -> String {
        format!("{:.2}%", self.uptime)
    }

    /// Case-insensitive substring match on the operator.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn operator_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.operator.to_lowercase().contains(needle_lower)
    }
}

/// Shortest round-trip decimal text for a fee value.
///
/// Negative zero collapses to `0` so both land in the same bucket.
pub fn format_fee(fee: f64) -> String {
    if fee == 0.0 {
        return "0".to_string();
    }
    format!("{}", fee)
}

/// Wire envelope returned by the monitor endpoint: `{ "nodes": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NodeEnvelope {
    pub nodes: Vec<NodeRecord>,
}
