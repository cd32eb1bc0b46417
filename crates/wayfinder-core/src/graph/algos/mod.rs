//! Search algorithm implementations
//!
//! - `k_shortest`: cost-ordered enumeration of simple paths
//! - `coverage`: routes that visit every city
//! - `shared`: helpers used by more than one algorithm

pub mod coverage;
pub mod k_shortest;
pub mod shared;

pub use coverage::{find_coverage_path, greedy_coverage_sweep};
pub use k_shortest::k_shortest_paths;
