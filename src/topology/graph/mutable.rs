use std::borrow::Borrow;
use std::fmt::Debug;

use super::graph_trait::{Graph, contract_violation};
use crate::graph_error::GraphError;

/// Trait for graphs that support vertex and edge mutation.
///
/// [`Graph`] provides the queries. `MutableGraph` adds the four mutators; they
/// are the only way to change a graph and each one keeps the structural
/// invariants (unique labels, no dangling neighbors, undirected symmetry, edge
/// count) intact, or fails without touching the graph.
pub trait MutableGraph: Graph {
    /// Append `v` with an empty neighbor list.
    fn try_insert_vertex(&mut self, v: Self::Vertex) -> Result<(), GraphError>;

    /// Remove `v` and every occurrence of `v` in other neighbor lists.
    fn try_remove_vertex<Q>(&mut self, v: &Q) -> Result<(), GraphError>
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized;

    /// Insert `a -> b` (and `b -> a` when undirected) as a single edge.
    fn try_insert_edge<Q>(&mut self, a: &Q, b: &Q) -> Result<(), GraphError>
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized;

    /// Remove the edge `a -> b` (and `b -> a` when undirected).
    fn try_remove_edge<Q>(&mut self, a: &Q, b: &Q) -> Result<(), GraphError>
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized;

    // ---------- fail-fast forms ----------

    /// # Panics
    /// Panics if `v` is already a vertex.
    #[track_caller]
    fn insert_vertex(&mut self, v: Self::Vertex) {
        if let Err(e) = self.try_insert_vertex(v) {
            contract_violation(e);
        }
    }

    /// # Panics
    /// Panics if `v` is not a vertex.
    #[track_caller]
    fn remove_vertex<Q>(&mut self, v: &Q)
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        if let Err(e) = self.try_remove_vertex(v) {
            contract_violation(e);
        }
    }

    /// # Panics
    /// Panics if an endpoint is missing or the edge already exists.
    #[track_caller]
    fn insert_edge<Q>(&mut self, a: &Q, b: &Q)
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        if let Err(e) = self.try_insert_edge(a, b) {
            contract_violation(e);
        }
    }

    /// # Panics
    /// Panics if an endpoint or the edge is missing.
    #[track_caller]
    fn remove_edge<Q>(&mut self, a: &Q, b: &Q)
    where
        Self::Vertex: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        if let Err(e) = self.try_remove_edge(a, b) {
            contract_violation(e);
        }
    }
}
