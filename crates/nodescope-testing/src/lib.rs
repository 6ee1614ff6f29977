//! Testing infrastructure for nodescope.
//!
//! - `fixtures`: the reference record set and generated snapshots
//! - `assertions`: checks for the filter/sort/page invariants
//! - `strategies`: proptest generators for record collections
//! - `TestWorld`: isolated directory with node files for CLI tests

pub mod assertions;
pub mod fixtures;
pub mod strategies;
pub mod world;

pub use world::TestWorld;
