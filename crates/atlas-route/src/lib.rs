//! `atlas-route` — single-source shortest-path searches over the graph store.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`search`]    | [`shortest_paths`] — baseline travel-time search        |
//! | [`effective`] | [`effective_cost_paths`] — travel + activity-time search|
//! | [`result`]    | `CostMap`, `EffectiveCosts` result mappings             |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                          |
//!
//! # Selection policy
//!
//! Both searches use a linear scan over unsettled locations to pick the next
//! minimum, not a binary heap.  O(V²) is a deliberate trade-off: the graphs
//! this engine serves are small, and the scan gives the stable
//! first-encountered tie-break in insertion order for free.
//!
//! Both searches are read-only over the graph and own all per-run state, so
//! they may run concurrently with each other against a frozen graph.

pub mod effective;
pub mod error;
pub mod result;
pub mod search;

#[cfg(test)]
mod tests;

pub use effective::effective_cost_paths;
pub use error::{RouteError, RouteResult};
pub use result::{CostMap, EffectiveCosts};
pub use search::shortest_paths;
