//! `atlas-core` — foundational types for the `rust_atlas` travel-network engine.
//!
//! This crate is a dependency of every other `atlas-*` crate.  It has no
//! `atlas-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `LocationId`, `ActivityId`                 |
//! | [`time`] | `Minutes` (durations/costs), `Tick` (clock)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{ActivityId, LocationId};
pub use time::{Minutes, Tick};
