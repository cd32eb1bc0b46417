use crate::graph::types::{Graph, Road};

/// Trait for providing road adjacency to the search engines
pub trait GraphProvider {
    /// Roads leaving `city`, or `None` if the city has no adjacency entry
    fn neighbors(&self, city: &str) -> Option<&[Road]>;

    fn contains(&self, city: &str) -> bool {
        self.neighbors(city).is_some()
    }
}

impl GraphProvider for Graph {
    fn neighbors(&self, city: &str) -> Option<&[Road]> {
        self.roads(city)
    }

    fn contains(&self, city: &str) -> bool {
        self.has_city(city)
    }
}
