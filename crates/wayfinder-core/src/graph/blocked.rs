//! Blocked-road removal

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfinderError;
use crate::graph::types::Graph;

/// An unordered pair of cities whose connecting road is closed.
///
/// Written `X:Y` on the command line and as a two-element array in
/// configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRoad(pub String, pub String);

impl BlockedRoad {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        BlockedRoad(a.into(), b.into())
    }
}

impl FromStr for BlockedRoad {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once(':') else {
            return Err(WayfinderError::invalid_value(
                "blocked road (expected CITY:CITY)",
                s,
            ));
        };
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() {
            return Err(WayfinderError::invalid_value(
                "blocked road (expected CITY:CITY)",
                s,
            ));
        }
        Ok(BlockedRoad::new(a, b))
    }
}

impl fmt::Display for BlockedRoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}

/// Return a copy of `graph` with every blocked road removed in both directions.
///
/// Entries are matched by neighbor name regardless of distance, so parallel
/// roads between the same pair all disappear. A city missing from the graph
/// makes its side of the removal a no-op. The input graph is left untouched.
#[tracing::instrument(skip(graph, blocked), fields(blocked = blocked.len()))]
pub fn remove_edges(graph: &Graph, blocked: &[BlockedRoad]) -> Graph {
    let mut updated = graph.clone();

    for BlockedRoad(a, b) in blocked {
        for (city, other) in [(a, b), (b, a)] {
            if let Some(roads) = updated.roads_mut(city) {
                let before = roads.len();
                roads.retain(|road| &road.to != other);
                tracing::trace!(
                    city = %city,
                    neighbor = %other,
                    removed = before - roads.len(),
                    "remove_road"
                );
            }
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Road;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_road("A", "B", 1);
        graph.add_road("B", "C", 2);
        graph.add_road("A", "C", 4);
        graph
    }

    #[test]
    fn test_remove_edges_is_symmetric() {
        let graph = triangle();
        let updated = remove_edges(&graph, &[BlockedRoad::new("A", "B")]);

        assert_eq!(updated.roads("A").unwrap(), &[Road::new("C", 4)]);
        assert_eq!(updated.roads("B").unwrap(), &[Road::new("C", 2)]);
        assert_eq!(updated.roads("C"), graph.roads("C"));
    }

    #[test]
    fn test_remove_edges_leaves_input_untouched() {
        let graph = triangle();
        let snapshot = graph.clone();
        let _ = remove_edges(&graph, &[BlockedRoad::new("B", "C")]);
        assert_eq!(graph, snapshot);
    }

    #[test]
    fn test_remove_edges_is_idempotent() {
        let graph = triangle();
        let blocked = [BlockedRoad::new("A", "C")];
        let once = remove_edges(&graph, &blocked);
        let twice = remove_edges(&once, &blocked);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_edges_ignores_weight() {
        let mut graph = Graph::new();
        graph.add_road("A", "B", 1);
        graph.add_road("A", "B", 9);
        let updated = remove_edges(&graph, &[BlockedRoad::new("B", "A")]);
        assert!(updated.roads("A").unwrap().is_empty());
        assert!(updated.roads("B").unwrap().is_empty());
    }

    #[test]
    fn test_remove_edges_unknown_city_is_noop() {
        let graph = triangle();
        let updated = remove_edges(&graph, &[BlockedRoad::new("A", "Z")]);
        assert_eq!(updated, graph);
    }

    #[test]
    fn test_parse_blocked_road() {
        let road: BlockedRoad = "Addis Ababa: Bahir Dar".parse().unwrap();
        assert_eq!(road, BlockedRoad::new("Addis Ababa", "Bahir Dar"));
        assert_eq!(road.to_string(), "Addis Ababa:Bahir Dar");
        assert!("Addis Ababa".parse::<BlockedRoad>().is_err());
        assert!(":Gondar".parse::<BlockedRoad>().is_err());
    }
}
