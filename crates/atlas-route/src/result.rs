//! Search result mappings.
//!
//! Results are dense vectors indexed by `LocationId` — one entry per
//! location in the store, in insertion order.  Unreachable locations are
//! `None`, never a sentinel cost.

use rustc_hash::FxHashSet;

use atlas_core::{ActivityId, LocationId, Minutes};
use atlas_graph::Graph;

// ── CostMap ───────────────────────────────────────────────────────────────────

/// Best-known cumulative cost from the search's start to every location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMap {
    costs: Vec<Option<Minutes>>,
}

impl CostMap {
    pub(crate) fn from_vec(costs: Vec<Option<Minutes>>) -> Self {
        Self { costs }
    }

    /// Cost to reach `id`, or `None` if unreachable.
    #[inline]
    pub fn cost(&self, id: LocationId) -> Option<Minutes> {
        self.costs[id.index()]
    }

    /// `true` if the search reached `id`.
    #[inline]
    pub fn is_reachable(&self, id: LocationId) -> bool {
        self.costs[id.index()].is_some()
    }

    /// Number of entries — always the store's location count.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Iterator over `(LocationId, cost)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, Option<Minutes>)> + '_ {
        self.costs
            .iter()
            .enumerate()
            .map(|(i, &c)| (LocationId(i as u32), c))
    }

    /// Iterator over `(name, cost)` pairs, resolving names through `graph`.
    ///
    /// `graph` must be the store the search ran against.
    pub fn named<'g>(
        &'g self,
        graph: &'g Graph,
    ) -> impl Iterator<Item = (&'g str, Option<Minutes>)> + 'g {
        self.iter().map(|(id, c)| (graph.name(id), c))
    }
}

// ── EffectiveCosts ────────────────────────────────────────────────────────────

/// Result of the cost-augmented search: per-location effective cost plus the
/// set of activities attributed to the current best path to each location.
///
/// An activity set holds the activities of every location *departed from*
/// along the best path — the destination's own activities are charged on its
/// outgoing links, not its incoming path, so they never appear in its own set.
#[derive(Clone, Debug)]
pub struct EffectiveCosts {
    costs: CostMap,
    activities: Vec<FxHashSet<ActivityId>>,
}

impl EffectiveCosts {
    pub(crate) fn new(costs: Vec<Option<Minutes>>, activities: Vec<FxHashSet<ActivityId>>) -> Self {
        Self {
            costs: CostMap::from_vec(costs),
            activities,
        }
    }

    /// The effective-cost mapping.
    pub fn costs(&self) -> &CostMap {
        &self.costs
    }

    /// Effective cost to reach `id`, or `None` if unreachable.
    #[inline]
    pub fn cost(&self, id: LocationId) -> Option<Minutes> {
        self.costs.cost(id)
    }

    /// Activities accumulated along the best path to `id`.
    ///
    /// Empty for the start, for unreachable locations, and for locations
    /// whose best path passes only through activity-free predecessors.
    #[inline]
    pub fn activities(&self, id: LocationId) -> &FxHashSet<ActivityId> {
        &self.activities[id.index()]
    }

    /// Activity names for `id`, sorted for deterministic output.
    pub fn activity_names<'g>(&self, graph: &'g Graph, id: LocationId) -> Vec<&'g str> {
        let mut names: Vec<&str> = self.activities[id.index()]
            .iter()
            .map(|&a| graph.activity(a).name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
