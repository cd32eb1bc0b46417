//! Uninformed route search (breadth-first / depth-first)

use std::collections::{HashSet, VecDeque};

use crate::error::{Result, WayfinderError};
use crate::graph::algos::shared::{require_city, universe};
use crate::graph::types::{Cost, Route, Strategy};
use crate::graph::GraphProvider;

/// Sum the distance of each hop in `path`.
///
/// Each hop uses the first adjacency entry of the origin that names the next
/// city. When a map lists parallel roads between the same pair with different
/// distances, the result depends on adjacency order. A hop with no matching
/// entry contributes nothing.
pub fn path_cost<P: GraphProvider + ?Sized>(provider: &P, path: &[String]) -> Cost {
    path.windows(2)
        .filter_map(|hop| {
            provider
                .neighbors(&hop[0])?
                .iter()
                .find(|road| road.to == hop[1])
                .map(|road| road.distance)
        })
        .sum()
}

fn validate(
    cities: &[String],
    provider: &(impl GraphProvider + ?Sized),
    start: &str,
    goal: &str,
) -> Result<()> {
    let universe = universe(cities);
    require_city(&universe, start)?;
    require_city(&universe, goal)?;

    let missing: Vec<String> = cities
        .iter()
        .filter(|city| !provider.contains(city))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(WayfinderError::IncompleteGraph { missing });
    }

    Ok(())
}

/// Find a route from `start` to `goal` with an uninformed strategy.
///
/// The frontier holds partial paths; breadth-first pops from the front and
/// depth-first from the back. A city is expanded at most once, but may sit on
/// several frontier paths before that. The first path popped that ends at the
/// goal is returned, with its cost recomputed by [`path_cost`]. Exhausting the
/// frontier yields [`Route::not_found`].
///
/// # Errors
///
/// `UnknownCity` if `start` or `goal` is not in `cities`, `IncompleteGraph`
/// if any city in `cities` has no adjacency entry.
#[tracing::instrument(skip(cities, provider), fields(start = %start, goal = %goal, strategy = %strategy))]
pub fn find_path<P: GraphProvider + ?Sized>(
    cities: &[String],
    provider: &P,
    start: &str,
    goal: &str,
    strategy: Strategy,
) -> Result<Route> {
    validate(cities, provider, start, goal)?;

    let mut frontier: VecDeque<Vec<&str>> = VecDeque::new();
    let mut closed: HashSet<&str> = HashSet::new();
    let mut expansions = 0usize;
    frontier.push_back(vec![start]);

    loop {
        let next = match strategy {
            Strategy::BreadthFirst => frontier.pop_front(),
            Strategy::DepthFirst => frontier.pop_back(),
        };
        let Some(path) = next else {
            break;
        };
        let Some(&current) = path.last() else {
            continue;
        };

        if current == goal {
            let cities: Vec<String> = path.iter().map(|city| city.to_string()).collect();
            let cost = path_cost(provider, &cities);
            tracing::debug!(expansions, hops = cities.len() - 1, cost = %cost, "path_found");
            return Ok(Route::new(cities, cost));
        }

        if !closed.insert(current) {
            continue;
        }
        expansions += 1;

        let Some(roads) = provider.neighbors(current) else {
            tracing::trace!(city = %current, "dead_end");
            continue;
        };

        for road in roads {
            if !closed.contains(road.to.as_str()) {
                let mut extended = path.clone();
                extended.push(road.to.as_str());
                frontier.push_back(extended);
            }
        }
    }

    tracing::debug!(expansions, "path_not_found");
    Ok(Route::not_found())
}
