//! Immutable record snapshot.
//!
//! The store is filled once per session. `load` builds the complete new
//! snapshot before swapping it in, so readers never see a partial collection.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use nodescope_types::NodeRecord;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Arc<[NodeRecord]>,
    generation: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            generation: 0,
            loaded_at: None,
        }
    }
}

impl Snapshot {
    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    /// Bumped on every successful load; 0 means never loaded
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}

#[derive(Debug, Default)]
pub struct RecordStore {
    current: Snapshot,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with `records`.
    ///
    /// Operators must be unique; on a duplicate the previous snapshot stays.
    pub fn load(&mut self, records: Vec<NodeRecord>) -> Result<()> {
        if let Some(operator) = first_duplicate(&records) {
            return Err(Error::DuplicateOperator(operator.to_string()));
        }

        let count = records.len();
        self.current = Snapshot {
            records: Arc::from(records),
            generation: self.current.generation + 1,
            loaded_at: Some(Utc::now()),
        };
        info!(
            count,
            generation = self.current.generation,
            "node snapshot loaded"
        );
        Ok(())
    }

    pub fn get_all(&self) -> &[NodeRecord] {
        self.current.records()
    }

    /// Cheap handle on the current snapshot; stays valid across later loads
    pub fn snapshot(&self) -> Snapshot {
        self.current.clone()
    }

    pub fn generation(&self) -> u64 {
        self.current.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.current.generation > 0
    }

    pub fn len(&self) -> usize {
        self.current.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.records.is_empty()
    }
}

fn first_duplicate(records: &[NodeRecord]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|node| node.operator.as_str())
        .find(|operator| !seen.insert(*operator))
}
