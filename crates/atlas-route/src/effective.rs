//! Cost-augmented search: travel time plus local activity time, with
//! per-path activity tracking.
//!
//! # Cost model
//!
//! Leaving a location means first completing *all* of its activities, so the
//! full local activity duration is added to every outgoing relaxation from
//! it.  A path that continues through the location pays that completion cost
//! again on each hop out — deliberately not amortised.  The cost is charged
//! on *outgoing* links only: a location's own activities never inflate the
//! cost of arriving at it, and never appear in its own reported set.
//!
//! # Activity snapshots
//!
//! When a relaxation improves a destination's cost, the destination's
//! activity set is *replaced* with a copy of the activities accumulated along
//! the new best path (the selected location's inherited set plus its own
//! activities).  Replace, never merge: history from a superseded path is
//! dropped.

use log::debug;
use rustc_hash::FxHashSet;

use atlas_core::{ActivityId, Minutes};
use atlas_graph::Graph;

use crate::error::{RouteError, RouteResult};
use crate::result::EffectiveCosts;
use crate::search::select_min;

/// Cheapest way to reach every location from `start` when cost combines
/// travel time with activity time spent at departed locations, plus the
/// activities accumulated along each best path.
///
/// Same outer structure and tie-breaking as
/// [`shortest_paths`](crate::shortest_paths); see the module docs for the
/// cost model.
///
/// # Errors
///
/// - [`RouteError::EmptyGraph`] if the store has no locations.
/// - [`RouteError::Graph`] (`UnknownLocation`) if `start` is absent, or if a
///   traversed link points at a destination that was never added.  A failed
///   query returns no partial result.
pub fn effective_cost_paths(graph: &Graph, start: &str) -> RouteResult<EffectiveCosts> {
    if graph.is_empty() {
        return Err(RouteError::EmptyGraph);
    }
    let start_id = graph.id_of(start)?;

    let n = graph.location_count();
    let mut costs: Vec<Option<Minutes>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut activities: Vec<FxHashSet<ActivityId>> = vec![FxHashSet::default(); n];
    costs[start_id.index()] = Some(Minutes::ZERO);

    while let Some((current, base)) = select_min(&costs, &settled) {
        settled[current.index()] = true;

        let location = graph.get(current);
        if location.links.is_empty() {
            continue;
        }

        // Everything a path through `current` has consumed so far: the set
        // inherited from its own best path plus its local activities.
        let local = graph.activity_minutes(current);
        let mut carried = activities[current.index()].clone();
        carried.extend(location.activities.iter().copied());

        for link in &location.links {
            let dest = graph.id_of(&link.dest)?;
            let candidate = base + link.travel + local;
            if costs[dest.index()].is_none_or(|best| candidate < best) {
                costs[dest.index()] = Some(candidate);
                // Snapshot replace — superseded-path history is dropped.
                activities[dest.index()] = carried.clone();
            }
        }
    }

    let reached = costs.iter().filter(|c| c.is_some()).count();
    debug!("effective_cost_paths from \"{start}\": reached {reached}/{n} locations");
    Ok(EffectiveCosts::new(costs, activities))
}
