//! Passive entity types: `Activity`, `Link`, and `Location`.
//!
//! # Ownership
//!
//! Activities belong to exactly one location, fixed at location-creation
//! time; the [`Graph`](crate::Graph) assigns each a global
//! [`ActivityId`](atlas_core::ActivityId) and the owning location keeps the
//! IDs.  Links are owned by their source location and carry no reverse
//! pointer.
//!
//! # Dangling link destinations
//!
//! A [`Link`] stores its destination by *name*, not by ID, because links may
//! be inserted before the destination location exists.  Consumers resolve
//! the name at traversal time and must report a destination that was never
//! added as [`GraphError::UnknownLocation`](crate::GraphError::UnknownLocation)
//! rather than skipping the edge.

use atlas_core::{ActivityId, Minutes};
use rustc_hash::FxHashMap;

// ── Activity ──────────────────────────────────────────────────────────────────

/// A named, fixed-duration item attached to a location.
///
/// Its duration contributes to traversal cost when the owning location is
/// *departed from* (see the cost-augmented search in `atlas-route`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    pub name: String,
    pub duration: Minutes,
}

impl Activity {
    pub fn new(name: impl Into<String>, duration: Minutes) -> Self {
        Self { name: name.into(), duration }
    }
}

// ── Link ──────────────────────────────────────────────────────────────────────

/// A directed, weighted edge owned by its source location.
///
/// Multiple links between the same ordered pair are permitted and are not
/// deduplicated — each is traversed independently.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Destination location *name*.  Resolved at traversal time.
    pub dest: String,
    /// Travel time along this link.
    pub travel: Minutes,
}

// ── Location ──────────────────────────────────────────────────────────────────

/// A graph node: a place with population, resources, activities, and
/// outgoing links.
///
/// Locations carry no visit marker — visitation state is owned by each
/// scheduler run, never by the shared graph.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique identity within the graph.
    pub name: String,

    /// Resident population.  The visitation scheduler's priority score for a
    /// never-visited location.
    pub population: u32,

    /// Resource inventory, opaque to all algorithms.
    pub resources: FxHashMap<String, u32>,

    /// IDs of this location's activities in the graph-wide registry,
    /// in declaration order.
    pub activities: Vec<ActivityId>,

    /// Outgoing links, in insertion order.
    pub links: Vec<Link>,
}

impl Location {
    /// Out-degree of this location (number of outgoing links).
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.links.len()
    }
}
