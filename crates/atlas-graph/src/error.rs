//! Graph-store error type.
//!
//! The query crates define their own error enums and absorb `GraphError`
//! via a `#[from]` variant, so a lookup failure inside a search surfaces
//! through the search's own result type.

use thiserror::Error;

/// Errors produced by `atlas-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A location with this name already exists.  The store rejects
    /// re-insertion rather than silently overwriting.
    #[error("location \"{0}\" already exists")]
    DuplicateLocation(String),

    /// An operation referenced a location name absent from the store — an
    /// unknown `add_link` source, an unknown query start, or a link whose
    /// destination was never added.
    #[error("location \"{0}\" not found")]
    UnknownLocation(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
