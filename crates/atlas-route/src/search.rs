//! Baseline single-source shortest-path search by travel time.

use log::debug;

use atlas_core::{LocationId, Minutes};
use atlas_graph::Graph;

use crate::error::{RouteError, RouteResult};
use crate::result::CostMap;

/// Shortest travel time from `start` to every location in the store.
///
/// Linear-scan selection: each round settles the unsettled location with the
/// minimum known cost (first-encountered wins ties) and relaxes its outgoing
/// links.  Stops when no unsettled location has a finite cost; the rest are
/// unreachable and reported as `None`.
///
/// # Errors
///
/// - [`RouteError::EmptyGraph`] if the store has no locations.
/// - [`RouteError::Graph`] (`UnknownLocation`) if `start` is absent, or if a
///   traversed link points at a destination that was never added.  A failed
///   query returns no partial result.
pub fn shortest_paths(graph: &Graph, start: &str) -> RouteResult<CostMap> {
    if graph.is_empty() {
        return Err(RouteError::EmptyGraph);
    }
    let start_id = graph.id_of(start)?;

    let n = graph.location_count();
    let mut costs: Vec<Option<Minutes>> = vec![None; n];
    let mut settled = vec![false; n];
    costs[start_id.index()] = Some(Minutes::ZERO);

    while let Some((current, base)) = select_min(&costs, &settled) {
        settled[current.index()] = true;

        for link in &graph.get(current).links {
            let dest = graph.id_of(&link.dest)?;
            let candidate = base + link.travel;
            let slot = &mut costs[dest.index()];
            if slot.is_none_or(|best| candidate < best) {
                *slot = Some(candidate);
            }
        }
    }

    let reached = costs.iter().filter(|c| c.is_some()).count();
    debug!("shortest_paths from \"{start}\": reached {reached}/{n} locations");
    Ok(CostMap::from_vec(costs))
}

/// Pick the unsettled location with the minimum finite cost.
///
/// Returns `None` when every remaining location is settled or unreachable —
/// the search's termination condition.  Strict `<` comparison keeps the
/// first-encountered location on ties, so insertion order breaks them.
pub(crate) fn select_min(
    costs: &[Option<Minutes>],
    settled: &[bool],
) -> Option<(LocationId, Minutes)> {
    let mut best: Option<(LocationId, Minutes)> = None;
    for (i, (&cost, &done)) in costs.iter().zip(settled).enumerate() {
        if done {
            continue;
        }
        let Some(cost) = cost else { continue };
        if best.is_none_or(|(_, b)| cost < b) {
            best = Some((LocationId(i as u32), cost));
        }
    }
    best
}
