//! GraphError: Unified error type for mesh-skeleton public APIs
//!
//! Every graph operation with a precondition has a `try_*` form returning
//! this error. The infallible forms panic with the same message, so a broken
//! precondition is reported identically on both paths.
//!
//! Vertex labels are captured through their `Debug` rendering; the error type
//! stays independent of the label type.

use thiserror::Error;

/// Unified error type for graph operations and invariant checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex named by the caller is not part of the graph.
    #[error("Graph error: vertex `{0}` not found")]
    VertexNotFound(String),
    /// Attempted to insert a vertex that is already present.
    #[error("Graph error: vertex `{0}` already exists")]
    VertexAlreadyExists(String),
    /// The edge `src -> dst` (or one of its undirected halves) is missing.
    #[error("Graph error: edge `{src}` -> `{dst}` not found")]
    EdgeNotFound { src: String, dst: String },
    /// The edge `src -> dst` (or one of its undirected halves) is already present.
    #[error("Graph error: edge `{src}` -> `{dst}` already exists")]
    EdgeAlreadyExists { src: String, dst: String },

    // ---------- invariant violations ----------
    /// The same label heads more than one record.
    #[error("Invariant violation: vertex `{0}` appears more than once")]
    DuplicateVertex(String),
    /// A neighbor list names a label that has no record of its own.
    #[error("Invariant violation: `{vertex}` lists neighbor `{neighbor}` which is not a vertex")]
    DanglingNeighbor { vertex: String, neighbor: String },
    /// Undirected graph holds `src -> dst` without the mirror `dst -> src`.
    #[error("Invariant violation: undirected edge `{src}` -> `{dst}` has no mirror")]
    AsymmetricEdge { src: String, dst: String },
    /// The maintained edge count disagrees with the neighbor lists.
    #[error("Invariant violation: edge count is {found}, adjacency lists imply {expected}")]
    EdgeCountMismatch { expected: usize, found: usize },
    /// A neighbor list names the same label twice.
    #[error("Invariant violation: duplicate edge `{src}` -> `{dst}`")]
    DuplicateEdge { src: String, dst: String },
    /// A vertex lists itself as a neighbor.
    #[error("Invariant violation: self-loop on vertex `{0}`")]
    SelfLoop(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found<Q: std::fmt::Debug + ?Sized>(v: &Q) -> Self {
        GraphError::VertexNotFound(format!("{v:?}"))
    }

    pub(crate) fn vertex_already_exists<Q: std::fmt::Debug + ?Sized>(v: &Q) -> Self {
        GraphError::VertexAlreadyExists(format!("{v:?}"))
    }

    pub(crate) fn edge_not_found<A, B>(src: &A, dst: &B) -> Self
    where
        A: std::fmt::Debug + ?Sized,
        B: std::fmt::Debug + ?Sized,
    {
        GraphError::EdgeNotFound {
            src: format!("{src:?}"),
            dst: format!("{dst:?}"),
        }
    }

    pub(crate) fn edge_already_exists<A, B>(src: &A, dst: &B) -> Self
    where
        A: std::fmt::Debug + ?Sized,
        B: std::fmt::Debug + ?Sized,
    {
        GraphError::EdgeAlreadyExists {
            src: format!("{src:?}"),
            dst: format!("{dst:?}"),
        }
    }
}
