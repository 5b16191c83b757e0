//! The greedy visitation scheduler.
//!
//! # Selection policy
//!
//! Starting from a given location, the scheduler repeatedly visits the
//! highest-scoring location among those never visited in this run, until all
//! locations are visited.  Selection is global over the whole store — the
//! link structure is never consulted, because the question is "in what order
//! should everyone eventually be reached", not "what can I travel to next".
//!
//! A never-visited location scores its population, biasing the run toward
//! broad coverage weighted by size.  Only unvisited locations are ever
//! scored, so no visited-score branch exists.  Ties go to the
//! first-encountered location in insertion order.
//!
//! Each visit is stamped with the run's logical clock, which advances one
//! tick per visit; the run terminates after exactly `location_count` visits.

use log::debug;

use atlas_core::{LocationId, Tick};
use atlas_graph::{Graph, Location};

use crate::error::{PlanError, PlanResult};
use crate::visit_log::VisitLog;

// ── VisitPlan ─────────────────────────────────────────────────────────────────

/// The result of a scheduler run: the visit order plus the per-location
/// visit times recorded along the way.
#[derive(Clone, Debug)]
pub struct VisitPlan {
    order: Vec<LocationId>,
    log: VisitLog,
}

impl VisitPlan {
    /// Visited locations in visit order.  Always contains every location in
    /// the store exactly once.
    pub fn order(&self) -> &[LocationId] {
        &self.order
    }

    /// The tick at which `id` was visited.
    ///
    /// Every location is visited, so this only returns `None` for an ID from
    /// a different graph.
    #[inline]
    pub fn visited_at(&self, id: LocationId) -> Option<Tick> {
        self.log.visited_at(id)
    }

    /// Location names in visit order, resolved through `graph`.
    ///
    /// `graph` must be the store the scheduler ran against.
    pub fn names<'g>(&'g self, graph: &'g Graph) -> impl Iterator<Item = &'g str> + 'g {
        self.order.iter().map(|&id| graph.name(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Priority score of a never-visited location.
#[inline]
fn priority(location: &Location) -> u32 {
    location.population
}

/// Produce the order in which all locations in the store should be visited,
/// starting at `start`.
///
/// See the module docs for the selection policy.  The run owns its
/// [`VisitLog`]; the graph is never mutated.
///
/// # Errors
///
/// - [`PlanError::EmptyGraph`] if the store has no locations.
/// - [`PlanError::Graph`] (`UnknownLocation`) if `start` is absent.
pub fn visit_order(graph: &Graph, start: &str) -> PlanResult<VisitPlan> {
    if graph.is_empty() {
        return Err(PlanError::EmptyGraph);
    }
    let start_id = graph.id_of(start)?;

    let mut log = VisitLog::new(graph.location_count());
    let mut order = Vec::with_capacity(graph.location_count());

    log.record(start_id);
    order.push(start_id);

    while let Some(next) = select_best(graph, &log) {
        log.record(next);
        order.push(next);
    }

    debug_assert_eq!(order.len(), graph.location_count());
    debug!("visit_order from \"{start}\": scheduled {} locations", order.len());
    Ok(VisitPlan { order, log })
}

/// The unvisited location with the maximum priority score, or `None` when
/// every location has been visited.  Strict `>` keeps the first-encountered
/// location on ties, so insertion order breaks them.
fn select_best(graph: &Graph, log: &VisitLog) -> Option<LocationId> {
    let mut best: Option<(LocationId, u32)> = None;
    for id in graph.ids() {
        if log.is_visited(id) {
            continue;
        }
        let score = priority(graph.get(id));
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((id, score));
        }
    }
    best.map(|(id, _)| id)
}
