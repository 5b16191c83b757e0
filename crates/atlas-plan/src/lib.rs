//! `atlas-plan` — the greedy priority visitation scheduler.
//!
//! Answers "in what order should every location eventually be reached?",
//! independent of travel feasibility: selection is global over all locations
//! in the store and never consults the link structure.
//!
//! # Crate layout
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`scheduler`] | [`visit_order`], the priority score           |
//! | [`visit_log`] | `VisitLog` — run-scoped clock and visit times |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                  |
//!
//! # Run-scoped state
//!
//! Visit markers live in a [`VisitLog`] owned by each `visit_order` call,
//! never on the shared `Location` objects.  Scheduler runs therefore cannot
//! interleave through the graph, and any number may run concurrently against
//! a frozen store.

pub mod error;
pub mod scheduler;
pub mod visit_log;


pub use error::{PlanError, PlanResult};
pub use scheduler::{visit_order, VisitPlan};
pub use visit_log::VisitLog;
