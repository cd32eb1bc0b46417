use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::algos::shared::{require_city, universe};
use crate::graph::types::{Cost, Route};
use crate::graph::GraphProvider;

/// Partial path on the heap, ordered by cost then by the city sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<'a> {
    pub cost: Cost,
    pub path: Vec<&'a str>,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Enumerate up to `k` simple paths from `start` to `goal` in cost order.
///
/// Best-first over partial paths: the cheapest entry is popped, recorded if it
/// ends at the goal, and otherwise extended by every universe neighbor not
/// already on the path. There is no global visited set, so cities are
/// re-explored across candidates. Equal costs are ordered by comparing the
/// city sequences, which keeps results deterministic. Exponential in the worst
/// case; intended for small networks.
///
/// Returns fewer than `k` routes when fewer simple paths exist.
///
/// # Errors
///
/// `UnknownCity` if `start` or `goal` is not in `cities`.
#[tracing::instrument(skip(cities, provider), fields(start = %start, goal = %goal, k = k))]
pub fn k_shortest_paths<P: GraphProvider + ?Sized>(
    cities: &[String],
    provider: &P,
    start: &str,
    goal: &str,
    k: usize,
) -> Result<Vec<Route>> {
    let universe = universe(cities);
    require_city(&universe, start)?;
    require_city(&universe, goal)?;

    let mut found: Vec<Route> = Vec::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<'_>>> = BinaryHeap::new();
    let mut pops = 0usize;
    heap.push(Reverse(HeapEntry {
        cost: Cost::ZERO,
        path: vec![start],
    }));

    while found.len() < k {
        let Some(Reverse(HeapEntry { cost, path })) = heap.pop() else {
            break;
        };
        pops += 1;
        let Some(&current) = path.last() else {
            continue;
        };

        if current == goal {
            tracing::trace!(rank = found.len() + 1, cost = %cost, "candidate_recorded");
            found.push(Route::new(
                path.iter().map(|city| city.to_string()).collect(),
                cost,
            ));
            continue;
        }

        for road in provider.neighbors(current).unwrap_or_default() {
            let neighbor = road.to.as_str();
            if !universe.contains(neighbor) || path.contains(&neighbor) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(neighbor);
            heap.push(Reverse(HeapEntry {
                cost: cost + road.distance,
                path: extended,
            }));
        }
    }

    tracing::debug!(pops, found = found.len(), queued = heap.len(), "k_shortest_done");
    Ok(found)
}
