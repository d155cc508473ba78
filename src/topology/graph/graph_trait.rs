//! Core read-only trait for adjacency-list graphs.
//!
//! This module defines the [`Graph`] trait: ordered vertex records, each with
//! an ordered neighbor list, plus the queries the polyhedron algorithms need.
//! Mutation lives in [`MutableGraph`](super::mutable::MutableGraph).

use std::borrow::Borrow;
use std::fmt::Debug;

use crate::graph_error::GraphError;
use crate::topology::bounds::VertexLike;
use crate::topology::orientation::Orientation;

/// Read-only adjacency API.
///
/// # Associated Types
/// - `Vertex`: the label type stored in records and neighbor lists.
/// - `Orientation`: [`Directed`](crate::topology::orientation::Directed) or
///   [`Undirected`](crate::topology::orientation::Undirected), fixed per type.
/// - `RecordIter`: `(vertex, neighbors)` pairs in stored order.
/// - `VertexIter`: vertex labels in stored order.
///
/// Every query with a precondition comes in two forms. The `try_*` form
/// reports a violated precondition as a [`GraphError`]; the plain form treats
/// it as a contract breach and panics with the same message.
pub trait Graph {
    type Vertex: VertexLike;
    type Orientation: Orientation;

    type RecordIter<'a>: DoubleEndedIterator<Item = (&'a Self::Vertex, &'a [Self::Vertex])>
        + ExactSizeIterator
    where
        Self: 'a;
    type VertexIter<'a>: DoubleEndedIterator<Item = &'a Self::Vertex> + ExactSizeIterator
    where
        Self: 'a;

    /// Number of vertex records.
    fn num_vertices(&self) -> usize;
    /// Maintained edge count (undirected edges count once).
    fn num_edges(&self) -> usize;

    /// `(vertex, neighbors)` records in insertion order; `.rev()` walks backwards.
    fn iter(&self) -> Self::RecordIter<'_>;
    /// Vertex labels in insertion order.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Whether `v` heads a record.
    fn contains_vertex<Q>(&self, v: &Q) -> bool
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + ?Sized;

    /// Ordered neighbor list of `v`.
    fn try_adjacent_vertices<Q>(&self, v: &Q) -> Result<&[Self::Vertex], GraphError>
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized;

    /// Directed: `b` is in `a`'s list. Undirected: `b` is in `a`'s list **and**
    /// `a` is in `b`'s list; both halves are checked even though a valid
    /// undirected graph keeps them equal.
    fn try_are_adjacent<Q>(&self, a: &Q, b: &Q) -> Result<bool, GraphError>
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized;

    /// Size of `v`'s neighbor list.
    fn try_degree<Q>(&self, v: &Q) -> Result<usize, GraphError>
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        Ok(self.try_adjacent_vertices(v)?.len())
    }

    /// `true` for undirected graphs.
    #[inline]
    fn is_undirected(&self) -> bool {
        <Self::Orientation as Orientation>::UNDIRECTED
    }

    // ---------- fail-fast forms ----------

    /// Size of `v`'s neighbor list.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    #[track_caller]
    fn degree<Q>(&self, v: &Q) -> usize
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        match self.try_degree(v) {
            Ok(d) => d,
            Err(e) => contract_violation(e),
        }
    }

    /// Ordered neighbor list of `v`.
    ///
    /// # Panics
    /// Panics if `v` is not a vertex.
    #[track_caller]
    fn adjacent_vertices<Q>(&self, v: &Q) -> &[Self::Vertex]
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        match self.try_adjacent_vertices(v) {
            Ok(n) => n,
            Err(e) => contract_violation(e),
        }
    }

    /// See [`Graph::try_are_adjacent`].
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex.
    #[track_caller]
    fn are_adjacent<Q>(&self, a: &Q, b: &Q) -> bool
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        match self.try_are_adjacent(a, b) {
            Ok(adjacent) => adjacent,
            Err(e) => contract_violation(e),
        }
    }
}

/// Report a broken precondition of a fail-fast operation.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(e: GraphError) -> ! {
    panic!("{e}")
}
