//! Time primitives.
//!
//! # Design
//!
//! Two distinct notions of time exist in the engine and they never mix:
//!
//! - [`Minutes`] — a duration.  Link travel times, activity durations and
//!   accumulated path costs are all `Minutes`.  Using an integer unit means
//!   all cost arithmetic is exact (no floating-point drift) and comparisons
//!   are O(1).
//! - [`Tick`] — the visitation scheduler's logical clock value.  Each visit
//!   advances the clock by exactly one tick; the absolute value only serves
//!   to order visits within a single scheduler run.
//!
//! Unreachable locations are represented as `Option::<Minutes>::None`, never
//! as a sentinel magnitude that could collide with a real cost.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// ── Minutes ───────────────────────────────────────────────────────────────────

/// A non-negative duration in whole minutes.
///
/// Stored as `u32`: at one-minute resolution that is ~8,100 years of travel,
/// far beyond any meaningful path cost.  Addition saturates rather than
/// wrapping so that a pathological graph cannot silently produce a small
/// "better" cost through overflow.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minutes(pub u32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    /// Saturating addition — the engine's only cost-combining operation.
    #[inline]
    pub fn saturating_add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0.saturating_add(rhs.0))
    }
}

impl Add for Minutes {
    type Output = Minutes;
    #[inline]
    fn add(self, rhs: Minutes) -> Minutes {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Minutes {
    #[inline]
    fn add_assign(&mut self, rhs: Minutes) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Minutes {
        iter.fold(Minutes::ZERO, Minutes::saturating_add)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

// ── Tick ──────────────────────────────────────────────────────────────────────

/// A monotonically increasing logical clock value for scheduler runs.
///
/// `u64` so the counter cannot overflow within any conceivable run (one tick
/// per visited location).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick immediately after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
