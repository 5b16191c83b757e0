//! `atlas-graph` — the travel-network entity model and graph store.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`location`] | `Activity`, `Link`, `Location` data holders     |
//! | [`store`]    | `Graph` — owns all locations and the name index |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                  |
//!
//! # Mutation model
//!
//! A [`Graph`] is populated once through `&mut self` methods
//! ([`Graph::add_location`], [`Graph::add_link`]) and then queried read-only.
//! The query crates (`atlas-route`, `atlas-plan`) take `&Graph` and keep all
//! per-run state in the invocation, so any number of queries may run
//! concurrently against a frozen graph; the borrow checker excludes
//! structural mutation for the duration.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod error;
pub mod location;
pub mod store;


pub use error::{GraphError, GraphResult};
pub use location::{Activity, Link, Location};
pub use store::Graph;
