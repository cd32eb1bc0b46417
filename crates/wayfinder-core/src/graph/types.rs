use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfinderError;

/// Travel cost of a road or a whole route.
///
/// Wraps an `f64` and orders with `f64::total_cmp` so costs can key a
/// `BinaryHeap`. Road maps reject negative and non-finite distances on load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl From<i32> for Cost {
    fn from(distance: i32) -> Self {
        Cost(f64::from(distance))
    }
}

impl From<f64> for Cost {
    fn from(distance: f64) -> Self {
        Cost(distance)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole distances print without a trailing ".0"
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A directed adjacency entry: the neighbor and the distance to reach it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub to: String,
    pub distance: Cost,
}

impl Road {
    pub fn new(to: impl Into<String>, distance: impl Into<Cost>) -> Self {
        Self {
            to: to.into(),
            distance: distance.into(),
        }
    }
}

/// Weighted adjacency mapping from city to its ordered list of roads.
///
/// The network is conceptually undirected: every connection is expected as a
/// reciprocal pair of directed entries. `add_road` maintains that for callers
/// building a graph by hand; `add_directed` does not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Road>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a city has an adjacency entry, possibly empty
    pub fn insert_city(&mut self, city: impl Into<String>) {
        self.adjacency.entry(city.into()).or_default();
    }

    /// Append a single directed entry `from -> to`
    pub fn add_directed(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        distance: impl Into<Cost>,
    ) {
        self.adjacency
            .entry(from.into())
            .or_default()
            .push(Road::new(to, distance));
    }

    /// Append the reciprocal pair `a -> b` and `b -> a` with the same distance
    pub fn add_road(&mut self, a: &str, b: &str, distance: impl Into<Cost>) {
        let distance = distance.into();
        self.add_directed(a, b, distance);
        self.add_directed(b, a, distance);
    }

    /// Replace the full adjacency list of a city
    pub fn set_roads(&mut self, city: impl Into<String>, roads: Vec<Road>) {
        self.adjacency.insert(city.into(), roads);
    }

    pub fn roads(&self, city: &str) -> Option<&[Road]> {
        self.adjacency.get(city).map(Vec::as_slice)
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Cities that have an adjacency entry, in no particular order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub(crate) fn roads_mut(&mut self, city: &str) -> Option<&mut Vec<Road>> {
        self.adjacency.get_mut(city)
    }

    /// Directed entries `(from, to)` with no matching `to -> from` entry.
    ///
    /// Sorted so callers can report them deterministically.
    pub fn missing_reciprocals(&self) -> Vec<(String, String)> {
        let mut missing: Vec<(String, String)> = self
            .adjacency
            .iter()
            .flat_map(|(from, roads)| roads.iter().map(move |road| (from, &road.to)))
            .filter(|(from, to)| {
                self.roads(to)
                    .is_none_or(|back| !back.iter().any(|road| &road.to == *from))
            })
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}

/// A path through the network together with its total cost.
///
/// An empty route with zero cost is the "no path" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Route {
    pub cities: Vec<String>,
    pub cost: Cost,
}

impl Route {
    pub fn new(cities: Vec<String>, cost: Cost) -> Self {
        Self { cities, cost }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        !self.cities.is_empty()
    }

    /// Number of roads travelled
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// True when no city appears twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.cities.iter().all(|city| seen.insert(city.as_str()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cities.join(" -> "))
    }
}

/// Frontier discipline for uninformed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// FIFO frontier
    #[default]
    BreadthFirst,
    /// LIFO frontier
    DepthFirst,
}

impl FromStr for Strategy {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            _ => Err(WayfinderError::InvalidStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = WayfinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.to_string()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "bfs"),
            Strategy::DepthFirst => write!(f, "dfs"),
        }
    }
}

/// How the coverage search explores the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CoverageMode {
    /// Depth-first with backtracking; only succeeds on full coverage
    #[default]
    Backtracking,
    /// Single depth-first sweep without backtracking (best effort)
    Greedy,
}

impl FromStr for CoverageMode {
    type Err = WayfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backtracking" => Ok(CoverageMode::Backtracking),
            "greedy" => Ok(CoverageMode::Greedy),
            other => Err(WayfinderError::unsupported(
                "coverage mode",
                other,
                "backtracking, greedy",
            )),
        }
    }
}

impl TryFrom<String> for CoverageMode {
    type Error = WayfinderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoverageMode> for String {
    fn from(mode: CoverageMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for CoverageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageMode::Backtracking => write!(f, "backtracking"),
            CoverageMode::Greedy => write!(f, "greedy"),
        }
    }
}

/// Outcome of a coverage search
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Coverage {
    pub route: Route,
    /// Every city in the universe was visited
    pub complete: bool,
}
