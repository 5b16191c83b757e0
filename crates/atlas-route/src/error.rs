//! Search error type.

use atlas_graph::GraphError;
use thiserror::Error;

/// Errors produced by `atlas-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A query was issued against a store with zero locations.
    #[error("graph has no locations")]
    EmptyGraph,

    /// A lookup failed — an unknown start name, or a link whose destination
    /// was never added to the store.  The query returns no partial result.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
