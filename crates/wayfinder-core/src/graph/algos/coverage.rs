//! Coverage search: routes that visit every city from a given start

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::algos::shared::{require_city, universe};
use crate::graph::types::{Cost, Coverage, Road, Route};
use crate::graph::GraphProvider;

/// One city on the depth-first stack
struct Frame<'a> {
    city: &'a str,
    /// Index of the next adjacency entry to try
    next: usize,
    /// Distance of the road into the child currently being explored
    pending: Option<Cost>,
}

/// State tracked during a coverage search
struct CoverageState<'a> {
    visited: HashSet<&'a str>,
    path: Vec<&'a str>,
    stack: Vec<Frame<'a>>,
}

impl<'a> CoverageState<'a> {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            path: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, city: &'a str) {
        self.visited.insert(city);
        self.path.push(city);
        self.stack.push(Frame {
            city,
            next: 0,
            pending: None,
        });
    }

    /// Pick the next universe neighbor of the top frame that is not yet
    /// visited, recording its distance as the frame's pending cost.
    fn advance<P: GraphProvider + ?Sized>(
        &mut self,
        provider: &'a P,
        universe: &HashSet<&str>,
    ) -> Option<&'a Road> {
        let frame = self.stack.last_mut()?;
        let roads = provider.neighbors(frame.city).unwrap_or_default();

        while let Some(road) = roads.get(frame.next) {
            frame.next += 1;
            let neighbor = road.to.as_str();
            if universe.contains(neighbor) && !self.visited.contains(neighbor) {
                frame.pending = Some(road.distance);
                return Some(road);
            }
        }

        frame.pending = None;
        None
    }

    /// Undo the top frame: drop its visit and path entry, and the parent's
    /// tentative cost for the road into it.
    fn unwind(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited.remove(frame.city);
            self.path.pop();
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.pending = None;
        }
    }

    /// Sum of the committed roads on the current stack
    fn committed_cost(&self) -> Cost {
        self.stack.iter().filter_map(|frame| frame.pending).sum()
    }

    fn into_route(self, cost: Cost) -> Route {
        Route::new(self.path.into_iter().map(str::to_string).collect(), cost)
    }
}

fn backtrack<'a, P: GraphProvider + ?Sized>(
    universe: &HashSet<&str>,
    provider: &'a P,
    start: &'a str,
) -> Coverage {
    let mut state = CoverageState::new();
    let mut backtracks = 0usize;
    state.enter(start);

    let complete = loop {
        if let Some(road) = state.advance(provider, universe) {
            state.enter(road.to.as_str());
            continue;
        }

        if state.visited.len() == universe.len() {
            break true;
        }

        state.unwind();
        backtracks += 1;
        if state.stack.is_empty() {
            break false;
        }
    };

    let cost = state.committed_cost();
    tracing::debug!(complete, backtracks, cost = %cost, "coverage_done");
    Coverage {
        route: state.into_route(cost),
        complete,
    }
}

/// Search for a simple route from `start` that visits every city.
///
/// Depth-first with backtracking over an explicit stack. Entering a city
/// marks it visited and appends it to the route. Each unvisited neighbor is
/// tried in adjacency order; a neighbor that cannot lead to full coverage is
/// unwound and its road cost dropped before the next one is tried. Once every
/// neighbor has been tried, a city succeeds only if all cities are visited,
/// otherwise it is unwound as well. The first success commits the whole stack.
///
/// When no covering route exists, unwinding leaves an empty route with zero
/// cost and `complete` is false.
///
/// # Errors
///
/// `UnknownCity` if `start` is not in `cities`.
#[tracing::instrument(skip(cities, provider), fields(start = %start, cities = cities.len()))]
pub fn find_coverage_path<P: GraphProvider + ?Sized>(
    cities: &[String],
    provider: &P,
    start: &str,
) -> Result<Coverage> {
    let universe = universe(cities);
    require_city(&universe, start)?;
    Ok(backtrack(&universe, provider, start))
}

/// Best-effort coverage: one depth-first sweep with no backtracking.
///
/// Cities are listed in the order first reached and the cost is the sum of the
/// roads used to reach them. The listing is a visit order, not necessarily a
/// walkable path, and `complete` only reports whether every city was reached.
/// Use [`find_coverage_path`] when a genuine covering route is required.
///
/// # Errors
///
/// `UnknownCity` if `start` is not in `cities`.
#[tracing::instrument(skip(cities, provider), fields(start = %start, cities = cities.len()))]
pub fn greedy_coverage_sweep<P: GraphProvider + ?Sized>(
    cities: &[String],
    provider: &P,
    start: &str,
) -> Result<Coverage> {
    let universe = universe(cities);
    require_city(&universe, start)?;

    let mut state = CoverageState::new();
    let mut total = Cost::ZERO;
    state.enter(start);

    while !state.stack.is_empty() {
        match state.advance(provider, &universe) {
            Some(road) => {
                total += road.distance;
                state.enter(road.to.as_str());
            }
            None => {
                state.stack.pop();
            }
        }
    }

    let complete = state.visited.len() == universe.len();
    tracing::debug!(complete, visited = state.visited.len(), cost = %total, "greedy_sweep_done");
    Ok(Coverage {
        route: state.into_route(total),
        complete,
    })
}
