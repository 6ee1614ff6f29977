//! Invariant checks shared by engine and runtime tests.
//!
//! Each returns `anyhow::Result` so a failing property reports which row
//! broke it instead of a bare boolean.

use anyhow::{Result, bail};
use nodescope_types::{NodeRecord, SortConfig, SortDirection, SortKey};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Every row of `subset` is one of `source`'s rows (by address), in source order.
pub fn assert_ordered_subset(source: &[NodeRecord], subset: &[&NodeRecord]) -> Result<()> {
    let mut cursor = 0;
    for (i, row) in subset.iter().enumerate() {
        let Some(offset) = source[cursor..]
            .iter()
            .position(|candidate| std::ptr::eq(candidate, *row))
        else {
            bail!(
                "Row {} ({}) is not a source record or is out of order",
                i,
                row.operator
            );
        };
        cursor += offset + 1;
    }
    Ok(())
}

/// `ordered` holds the same records as `input`, each exactly once.
pub fn assert_permutation(input: &[&NodeRecord], ordered: &[&NodeRecord]) -> Result<()> {
    if input.len() != ordered.len() {
        bail!(
            "Expected {} rows after sorting, got {}",
            input.len(),
            ordered.len()
        );
    }

    let mut counts: HashMap<*const NodeRecord, isize> = HashMap::new();
    for row in input {
        *counts.entry(*row as *const _).or_default() += 1;
    }
    for row in ordered {
        *counts.entry(*row as *const _).or_default() -= 1;
    }
    if let Some((_, delta)) = counts.iter().find(|(_, delta)| **delta != 0) {
        bail!("Sorted rows differ from input (count delta {})", delta);
    }
    Ok(())
}

fn key_order(a: &NodeRecord, b: &NodeRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Operator => a.operator.cmp(&b.operator),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Uptime => numeric_order(a.uptime, b.uptime),
        SortKey::Fee => numeric_order(a.fee, b.fee),
    }
}

/// Value comparison; `0.0` and `-0.0` are the same key.
fn numeric_order(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Adjacent rows respect `config`; rows with equal keys keep the order they
/// had in `input`.
pub fn assert_sorted_stable(
    input: &[&NodeRecord],
    ordered: &[&NodeRecord],
    config: SortConfig,
) -> Result<()> {
    let position = |row: &NodeRecord| {
        input
            .iter()
            .position(|candidate| std::ptr::eq(*candidate, row))
    };

    for (i, pair) in ordered.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let order = key_order(a, b, config.key);
        let expected_violation = match config.direction {
            SortDirection::Asc => Ordering::Greater,
            SortDirection::Desc => Ordering::Less,
        };
        if order == expected_violation {
            bail!(
                "Rows {} and {} ({} / {}) violate {} {}",
                i,
                i + 1,
                a.operator,
                b.operator,
                config.key,
                config.direction
            );
        }
        if order == Ordering::Equal && position(a) > position(b) {
            bail!(
                "Tied rows {} and {} ({} / {}) swapped their input order",
                i,
                i + 1,
                a.operator,
                b.operator
            );
        }
    }
    Ok(())
}

pub fn operators(rows: &[&NodeRecord]) -> Vec<String> {
    rows.iter().map(|row| row.operator.clone()).collect()
}
