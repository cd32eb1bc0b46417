//! Graph model and route search operations
//!
//! Provides the search engines over a weighted road network:
//! - Uninformed BFS/DFS route search between two cities
//! - K-shortest simple path enumeration
//! - Coverage search for a route visiting every city
//! - Blocked-road removal producing a new graph

pub mod algos;
pub mod blocked;
pub mod provider;
pub mod search;
pub mod types;

pub use algos::{find_coverage_path, greedy_coverage_sweep, k_shortest_paths};
pub use blocked::{remove_edges, BlockedRoad};
pub use provider::GraphProvider;
pub use search::{find_path, path_cost};
pub use types::{Cost, Coverage, CoverageMode, Graph, Road, Route, Strategy};
