//! The `Graph` store — owns every location and the activity registry.
//!
//! # Data layout
//!
//! Locations live in a `Vec` in insertion order; `LocationId` is the index
//! into it.  A name → ID map provides O(1) lookup by identity.  Insertion
//! order is the iteration order, and therefore the tie-break order for every
//! algorithm in the workspace.
//!
//! Activities from all locations are pooled in one registry `Vec` so the
//! search crates can refer to them by compact `ActivityId` instead of
//! cloning strings into per-path sets.

use log::debug;
use rustc_hash::FxHashMap;

use atlas_core::{ActivityId, LocationId, Minutes};

use crate::error::{GraphError, GraphResult};
use crate::location::{Activity, Link, Location};

/// An in-memory network of locations connected by directed, weighted links.
///
/// Built once via [`add_location`](Graph::add_location) /
/// [`add_link`](Graph::add_link), then queried read-only.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    /// All locations, indexed by `LocationId` (= insertion order).
    locations: Vec<Location>,

    /// Name → ID lookup.  Always in sync with `locations`.
    index: FxHashMap<String, LocationId>,

    /// Graph-wide activity registry, indexed by `ActivityId`.
    activities: Vec<Activity>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert a new location and return its ID.
    ///
    /// The location's activities are registered in the graph-wide pool and
    /// belong to this location permanently.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateLocation`] if `name` is already present — the
    /// store rejects re-insertion rather than silently overwriting.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        population: u32,
        resources: FxHashMap<String, u32>,
        activities: Vec<Activity>,
    ) -> GraphResult<LocationId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateLocation(name));
        }

        let activity_ids = activities
            .into_iter()
            .map(|a| {
                let id = ActivityId(self.activities.len() as u32);
                self.activities.push(a);
                id
            })
            .collect();

        let id = LocationId(self.locations.len() as u32);
        debug!("add_location {name} → {id} (population {population})");
        self.index.insert(name.clone(), id);
        self.locations.push(Location {
            name,
            population,
            resources,
            activities: activity_ids,
            links: Vec::new(),
        });
        Ok(id)
    }

    /// Append a directed link from `from` to `to`.
    ///
    /// `to` is deliberately *not* validated here — links may be added before
    /// all locations exist.  Each call inserts exactly one link; duplicates
    /// between the same pair are kept and traversed independently.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownLocation`] if `from` is absent.
    pub fn add_link(&mut self, from: &str, to: &str, travel: Minutes) -> GraphResult<()> {
        let id = self.id_of(from)?;
        debug!("add_link {from} → {to} ({travel})");
        self.locations[id.index()].links.push(Link {
            dest: to.to_owned(),
            travel,
        });
        Ok(())
    }

    // ── Lookup by name ────────────────────────────────────────────────────

    /// Resolve a location name to its ID.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownLocation`] if `name` is absent.
    pub fn id_of(&self, name: &str) -> GraphResult<LocationId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownLocation(name.to_owned()))
    }

    /// Resolve a location name to the location itself.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownLocation`] if `name` is absent.
    pub fn location(&self, name: &str) -> GraphResult<&Location> {
        self.id_of(name).map(|id| &self.locations[id.index()])
    }

    // ── Lookup by ID ──────────────────────────────────────────────────────
    //
    // IDs are only ever issued by this graph, so indexed access is in-bounds
    // by construction.

    /// The location with the given ID.
    #[inline]
    pub fn get(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    /// The name of the location with the given ID.
    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        &self.locations[id.index()].name
    }

    /// The activity with the given ID from the graph-wide registry.
    #[inline]
    pub fn activity(&self, id: ActivityId) -> &Activity {
        &self.activities[id.index()]
    }

    /// Total duration of all activities at `id` — the local cost the
    /// augmented search charges on every outgoing link.
    pub fn activity_minutes(&self, id: LocationId) -> Minutes {
        self.locations[id.index()]
            .activities
            .iter()
            .map(|&a| self.activities[a.index()].duration)
            .sum()
    }

    // ── Iteration & dimensions ────────────────────────────────────────────

    /// Iterator over all `LocationId`s in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.locations.len() as u32).map(LocationId)
    }

    /// Read-only slice of all locations, in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
