//! Road map files
//!
//! A road map declares the city universe and the adjacency list of each city:
//!
//! ```toml
//! cities = ["Addis Ababa", "Bahir Dar"]
//!
//! [roads]
//! "Addis Ababa" = [["Bahir Dar", 510]]
//! "Bahir Dar" = [["Addis Ababa", 510]]
//! ```
//!
//! The same shape is accepted as JSON or YAML, chosen by file extension.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfinderError};
use crate::graph::{
    find_coverage_path, find_path, greedy_coverage_sweep, k_shortest_paths, remove_edges,
    BlockedRoad, Coverage, CoverageMode, Graph, Road, Route, Strategy,
};
use crate::{bail_invalid, bail_unsupported};

/// On-disk road map: city universe plus adjacency lists
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadMap {
    pub cities: Vec<String>,
    #[serde(default)]
    pub roads: BTreeMap<String, Vec<(String, f64)>>,
}

impl RoadMap {
    /// Load and validate a road map, picking the parser from the extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WayfinderError::MapNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let map: RoadMap = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => bail_unsupported!("road map extension", other, "toml, json, yaml"),
        };

        map.validate()?;
        tracing::debug!(
            path = %path.display(),
            cities = map.cities.len(),
            "road_map_loaded"
        );
        Ok(map)
    }

    /// Reject duplicate cities and negative (including `-0.0`) or non-finite
    /// distances.
    ///
    /// Roads without a reciprocal entry are allowed but logged.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for city in &self.cities {
            if !seen.insert(city.as_str()) {
                bail_invalid!("road map (duplicate city)", city);
            }
        }

        for (city, roads) in &self.roads {
            for (neighbor, distance) in roads {
                if !distance.is_finite() || distance.is_sign_negative() {
                    bail_invalid!(
                        "road distance",
                        format!("{} -> {}: {}", city, neighbor, distance)
                    );
                }
            }
        }

        for (from, to) in self.graph().missing_reciprocals() {
            tracing::warn!(from = %from, to = %to, "road has no reciprocal entry");
        }

        Ok(())
    }

    /// Build the adjacency graph, preserving road order
    pub fn graph(&self) -> Graph {
        let mut graph = Graph::new();
        for (city, roads) in &self.roads {
            graph.set_roads(
                city.clone(),
                roads
                    .iter()
                    .map(|(neighbor, distance)| Road::new(neighbor.clone(), *distance))
                    .collect(),
            );
        }
        graph
    }

    /// Build the adjacency graph with the given roads closed
    pub fn graph_without(&self, blocked: &[BlockedRoad]) -> Graph {
        remove_edges(&self.graph(), blocked)
    }

    pub fn find_path(&self, start: &str, goal: &str, strategy: Strategy) -> Result<Route> {
        find_path(&self.cities, &self.graph(), start, goal, strategy)
    }

    pub fn k_shortest_paths(&self, start: &str, goal: &str, k: usize) -> Result<Vec<Route>> {
        k_shortest_paths(&self.cities, &self.graph(), start, goal, k)
    }

    pub fn coverage(&self, start: &str, mode: CoverageMode) -> Result<Coverage> {
        let graph = self.graph();
        match mode {
            CoverageMode::Backtracking => find_coverage_path(&self.cities, &graph, start),
            CoverageMode::Greedy => greedy_coverage_sweep(&self.cities, &graph, start),
        }
    }

    /// Five Ethiopian cities joined by four roads
    pub fn sample() -> Self {
        let cities = ["Addis Ababa", "Bahir Dar", "Gondar", "Hawassa", "Mekelle"];
        let roads: [(&str, &[(&str, f64)]); 5] = [
            ("Addis Ababa", &[("Bahir Dar", 510.0), ("Hawassa", 275.0)]),
            ("Bahir Dar", &[("Addis Ababa", 510.0), ("Gondar", 180.0)]),
            ("Gondar", &[("Bahir Dar", 180.0), ("Mekelle", 300.0)]),
            ("Hawassa", &[("Addis Ababa", 275.0)]),
            ("Mekelle", &[("Gondar", 300.0)]),
        ];

        RoadMap {
            cities: cities.iter().map(|c| c.to_string()).collect(),
            roads: roads
                .iter()
                .map(|(city, list)| {
                    (
                        city.to_string(),
                        list.iter().map(|(n, d)| (n.to_string(), *d)).collect(),
                    )
                })
                .collect(),
        }
    }
}
