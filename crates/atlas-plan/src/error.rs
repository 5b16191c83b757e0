//! Scheduler error type.

use atlas_graph::GraphError;
use thiserror::Error;

/// Errors produced by `atlas-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A schedule was requested for a store with zero locations.
    #[error("graph has no locations")]
    EmptyGraph,

    /// The starting location name is absent from the store.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
