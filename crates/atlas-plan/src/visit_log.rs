//! `VisitLog` — per-run visitation state.
//!
//! # Why this exists
//!
//! Storing a "last visited" marker on each location would make the shared
//! graph mutable during a scheduler run, so two runs over the same store
//! could interleave and corrupt each other's markers.  The log inverts the
//! ownership: each `visit_order` call creates its own `VisitLog`, and the
//! graph stays frozen for the whole run.

use atlas_core::{LocationId, Tick};

/// A logical clock plus per-location visit times for one scheduler run.
///
/// The `times` vector is indexed by `LocationId` and always has one slot per
/// location in the store; `None` means "never visited in this run".
#[derive(Clone, Debug)]
pub struct VisitLog {
    times: Vec<Option<Tick>>,
    clock: Tick,
}

impl VisitLog {
    /// A fresh log for a store with `location_count` locations, clock at 0.
    pub fn new(location_count: usize) -> Self {
        Self {
            times: vec![None; location_count],
            clock: Tick::ZERO,
        }
    }

    /// The current clock value — the tick the next visit will be recorded at.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock
    }

    /// Record a visit to `id` at the current tick and advance the clock.
    ///
    /// Re-visiting within one run is a scheduler bug; checked in debug mode.
    pub fn record(&mut self, id: LocationId) -> Tick {
        debug_assert!(
            self.times[id.index()].is_none(),
            "location {id} visited twice in one run"
        );
        let at = self.clock;
        self.times[id.index()] = Some(at);
        self.clock = self.clock.next();
        at
    }

    /// When `id` was visited in this run, or `None` if it never was.
    #[inline]
    pub fn visited_at(&self, id: LocationId) -> Option<Tick> {
        self.times[id.index()]
    }

    /// `true` if `id` has been visited in this run.
    #[inline]
    pub fn is_visited(&self, id: LocationId) -> bool {
        self.times[id.index()].is_some()
    }

    /// Number of visits recorded so far.
    pub fn visit_count(&self) -> usize {
        self.times.iter().filter(|t| t.is_some()).count()
    }
}
