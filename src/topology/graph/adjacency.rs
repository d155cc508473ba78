//! In-memory implementation of the [`Graph`] and [`MutableGraph`] traits.
//!
//! [`AdjacencyGraph`] stores an ordered `Vec` of `(vertex, neighbors)` records.
//! Vertex order and per-vertex neighbor order are insertion order and are
//! observable through iteration; the polyhedron algorithms depend on them.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::graph_trait::Graph;
use super::mutable::MutableGraph;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::_debug_invariants::{assert_invariants, inv_assert};
use crate::topology::bounds::VertexLike;
use crate::topology::orientation::{Directed, Orientation, Undirected};
use crate::topology::validation::{GraphValidationOptions, validate_graph};

/// Adjacency-list graph over labels `V`, with orientation fixed by `O`.
///
/// # Type Parameters
/// - `V`: vertex label type. Any `Clone + Eq + Debug` type works.
/// - `O`: [`Undirected`] (default) or [`Directed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph<V, O = Undirected>
where
    V: VertexLike,
    O: Orientation,
{
    records: Vec<(V, Vec<V>)>,
    num_edges: usize,
    orientation: PhantomData<O>,
}

/// Adjacency graph whose edges are stored on both endpoints.
pub type UndirectedGraph<V> = AdjacencyGraph<V, Undirected>;
/// Adjacency graph whose edges are stored on the source only.
pub type DirectedGraph<V> = AdjacencyGraph<V, Directed>;

static_assertions::assert_impl_all!(UndirectedGraph<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(DirectedGraph<char>: Send, Sync, Clone);
static_assertions::assert_eq_size!(Undirected, ());

type RecordMapIter<'a, V> =
    std::iter::Map<std::slice::Iter<'a, (V, Vec<V>)>, fn(&'a (V, Vec<V>)) -> (&'a V, &'a [V])>;
type RecordMapIterMut<'a, V> = std::iter::Map<
    std::slice::IterMut<'a, (V, Vec<V>)>,
    fn(&'a mut (V, Vec<V>)) -> (&'a V, &'a mut [V]),
>;
type VertexMapIter<'a, V> =
    std::iter::Map<std::slice::Iter<'a, (V, Vec<V>)>, fn(&'a (V, Vec<V>)) -> &'a V>;

impl<V: VertexLike, O: Orientation> Default for AdjacencyGraph<V, O> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            num_edges: 0,
            orientation: PhantomData,
        }
    }
}

impl<V: VertexLike, O: Orientation> AdjacencyGraph<V, O> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an initial adjacency list.
    ///
    /// The edge count is derived from the number of neighbor entries (halved
    /// for undirected graphs). The list itself is taken as-is: unique labels,
    /// no dangling neighbors and undirected symmetry are the caller's
    /// responsibility (see [`DebugInvariants::validate_invariants`]).
    ///
    /// # Example
    /// ```rust
    /// use mesh_skeleton::prelude::*;
    /// let g = UndirectedGraph::from_adjacency_list(vec![
    ///     ('A', vec!['B', 'C']),
    ///     ('B', vec!['A', 'C']),
    ///     ('C', vec!['A', 'B']),
    /// ]);
    /// assert_eq!(g.num_vertices(), 3);
    /// assert_eq!(g.num_edges(), 3);
    /// ```
    pub fn from_adjacency_list(records: Vec<(V, Vec<V>)>) -> Self {
        let entries: usize = records.iter().map(|(_, neighbors)| neighbors.len()).sum();
        Self {
            num_edges: entries / O::entries_per_edge(),
            records,
            orientation: PhantomData,
        }
    }

    /// Builds a graph by inserting `vertices` in order, then `edges` in order.
    ///
    /// Fails on the first repeated vertex, unknown endpoint or repeated edge.
    pub fn from_edges<I, E>(vertices: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut g = Self::new();
        for v in vertices {
            g.try_insert_vertex(v)?;
        }
        for (a, b) in edges {
            g.try_insert_edge(&a, &b)?;
        }
        Ok(g)
    }

    /// Mutable `(vertex, neighbors)` records in insertion order.
    ///
    /// Neighbor slices can be reordered in place; lists cannot grow or shrink
    /// here. Overwriting labels bypasses the mutators and can break the
    /// structural invariants, so follow up with
    /// [`DebugInvariants::validate_invariants`] if you do.
    pub fn iter_mut(&mut self) -> RecordMapIterMut<'_, V> {
        fn map_fn<V>((vertex, neighbors): &mut (V, Vec<V>)) -> (&V, &mut [V]) {
            (&*vertex, neighbors.as_mut_slice())
        }
        let f: fn(&mut (V, Vec<V>)) -> (&V, &mut [V]) = map_fn::<V>;
        self.records.iter_mut().map(f)
    }

    /// Borrow the raw record list.
    #[inline]
    pub fn as_adjacency_list(&self) -> &[(V, Vec<V>)] {
        &self.records
    }

    /// Consume the graph and return its record list.
    #[inline]
    pub fn into_adjacency_list(self) -> Vec<(V, Vec<V>)> {
        self.records
    }

    /// Every edge once, as `(src, dst)`, in record order.
    ///
    /// Undirected edges are reported from the endpoint whose record comes
    /// first. On a valid graph the result has `num_edges()` entries.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut out = Vec::with_capacity(self.num_edges);
        for (i, (src, neighbors)) in self.records.iter().enumerate() {
            for dst in neighbors {
                if O::UNDIRECTED && self.position(dst).is_some_and(|j| j < i) {
                    continue;
                }
                out.push((src.clone(), dst.clone()));
            }
        }
        out
    }

    /// Stable reorder of the records by ascending degree.
    pub fn sort_vertices_by_degree(&mut self) {
        self.records.sort_by_key(|(_, neighbors)| neighbors.len());
    }

    #[inline]
    fn position<Q>(&self, v: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.records.iter().position(|(label, _)| label.borrow() == v)
    }

    #[inline]
    fn index_of<Q>(&self, v: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.position(v)
            .ok_or_else(|| GraphError::vertex_not_found(v))
    }
}

impl<O: Orientation> AdjacencyGraph<String, O> {
    /// Builds a `String`-labelled graph from borrowed labels.
    ///
    /// Labels are copied into owned strings here, so the graph never borrows
    /// from the caller.
    ///
    /// # Example
    /// ```rust
    /// use mesh_skeleton::prelude::*;
    /// let g = UndirectedGraph::<String>::from_str_lists([
    ///     ("A1", vec!["B1"]),
    ///     ("B1", vec!["A1"]),
    /// ]);
    /// assert!(g.are_adjacent("A1", "B1"));
    /// ```
    pub fn from_str_lists<'s, I, N>(lists: I) -> Self
    where
        I: IntoIterator<Item = (&'s str, N)>,
        N: IntoIterator<Item = &'s str>,
    {
        let records = lists
            .into_iter()
            .map(|(vertex, neighbors)| {
                (
                    vertex.to_owned(),
                    neighbors.into_iter().map(str::to_owned).collect(),
                )
            })
            .collect();
        Self::from_adjacency_list(records)
    }

    /// [`from_edges`](Self::from_edges) over borrowed labels.
    pub fn from_str_edges<'s, I, E>(vertices: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = &'s str>,
        E: IntoIterator<Item = (&'s str, &'s str)>,
    {
        let mut g = Self::new();
        for v in vertices {
            g.try_insert_vertex(v.to_owned())?;
        }
        for (a, b) in edges {
            g.try_insert_edge(a, b)?;
        }
        Ok(g)
    }
}

impl<V: VertexLike, O: Orientation> Graph for AdjacencyGraph<V, O> {
    type Vertex = V;
    type Orientation = O;
    type RecordIter<'a>
        = RecordMapIter<'a, V>
    where
        Self: 'a;
    type VertexIter<'a>
        = VertexMapIter<'a, V>
    where
        Self: 'a;

    #[inline]
    fn num_vertices(&self) -> usize {
        self.records.len()
    }

    #[inline]
    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn iter(&self) -> Self::RecordIter<'_> {
        fn map_fn<V>((vertex, neighbors): &(V, Vec<V>)) -> (&V, &[V]) {
            (vertex, neighbors.as_slice())
        }
        let f: fn(&(V, Vec<V>)) -> (&V, &[V]) = map_fn::<V>;
        self.records.iter().map(f)
    }

    fn vertices(&self) -> Self::VertexIter<'_> {
        fn map_fn<V>((vertex, _): &(V, Vec<V>)) -> &V {
            vertex
        }
        let f: fn(&(V, Vec<V>)) -> &V = map_fn::<V>;
        self.records.iter().map(f)
    }

    fn contains_vertex<Q>(&self, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(v).is_some()
    }

    fn try_adjacent_vertices<Q>(&self, v: &Q) -> Result<&[V], GraphError>
    where
        V: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let i = self.index_of(v)?;
        Ok(&self.records[i].1)
    }

    fn try_are_adjacent<Q>(&self, a: &Q, b: &Q) -> Result<bool, GraphError>
    where
        V: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let (label_a, neighbors_a) = &self.records[self.index_of(a)?];
        let (label_b, neighbors_b) = &self.records[self.index_of(b)?];
        let forward = neighbors_a.contains(label_b);
        if O::UNDIRECTED {
            Ok(forward && neighbors_b.contains(label_a))
        } else {
            Ok(forward)
        }
    }
}

impl<V: VertexLike, O: Orientation> MutableGraph for AdjacencyGraph<V, O> {
    fn try_insert_vertex(&mut self, v: V) -> Result<(), GraphError> {
        if self.position(&v).is_some() {
            return Err(GraphError::vertex_already_exists(&v));
        }
        self.records.push((v, Vec::new()));
        assert_invariants!(self);
        Ok(())
    }

    fn try_remove_vertex<Q>(&mut self, v: &Q) -> Result<(), GraphError>
    where
        V: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let i = self.index_of(v)?;
        let (label, own) = self.records.remove(i);

        let mut scrubbed = 0;
        for (_, neighbors) in &mut self.records {
            let before = neighbors.len();
            neighbors.retain(|n| *n != label);
            scrubbed += before - neighbors.len();
        }
        // Undirected: `own` mirrors the scrubbed entries. Directed: the
        // outgoing edges leave with the record.
        let dropped = if O::UNDIRECTED {
            scrubbed
        } else {
            scrubbed + own.len()
        };
        self.num_edges = self.num_edges.saturating_sub(dropped);
        assert_invariants!(self);
        Ok(())
    }

    fn try_insert_edge<Q>(&mut self, a: &Q, b: &Q) -> Result<(), GraphError>
    where
        V: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let label_a = self.records[ia].0.clone();
        let label_b = self.records[ib].0.clone();

        // Both halves are checked before either list changes.
        if self.records[ia].1.contains(&label_b) {
            return Err(GraphError::edge_already_exists(a, b));
        }
        if O::UNDIRECTED && self.records[ib].1.contains(&label_a) {
            return Err(GraphError::edge_already_exists(b, a));
        }

        self.records[ia].1.push(label_b);
        if O::UNDIRECTED {
            self.records[ib].1.push(label_a);
        }
        self.num_edges += 1;

        inv_assert!(
            crate::topology::_debug_invariants::no_duplicate_entries(&self.records[ia].1),
            "duplicate neighbor entries after inserting {a:?} -> {b:?}"
        );
        assert_invariants!(self);
        Ok(())
    }

    fn try_remove_edge<Q>(&mut self, a: &Q, b: &Q) -> Result<(), GraphError>
    where
        V: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        let label_a = self.records[ia].0.clone();
        let label_b = self.records[ib].0.clone();

        if !self.records[ia].1.contains(&label_b) {
            return Err(GraphError::edge_not_found(a, b));
        }
        if O::UNDIRECTED && !self.records[ib].1.contains(&label_a) {
            return Err(GraphError::edge_not_found(b, a));
        }

        self.records[ia].1.retain(|n| *n != label_b);
        if O::UNDIRECTED {
            self.records[ib].1.retain(|n| *n != label_a);
        }
        self.num_edges = self.num_edges.saturating_sub(1);
        assert_invariants!(self);
        Ok(())
    }
}

impl<V: VertexLike, O: Orientation> DebugInvariants for AdjacencyGraph<V, O> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "AdjacencyGraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        validate_graph(self, GraphValidationOptions::invariants_only())
    }
}

impl<'a, V: VertexLike, O: Orientation> IntoIterator for &'a AdjacencyGraph<V, O> {
    type Item = (&'a V, &'a [V]);
    type IntoIter = RecordMapIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per vertex, in stored order:
/// `Vertex: <label> is connected to: <n1>, <n2>, ;`
impl<V, O> fmt::Display for AdjacencyGraph<V, O>
where
    V: VertexLike + fmt::Display,
    O: Orientation,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.iter() {
            write!(f, "Vertex: {vertex} is connected to: ")?;
            for n in neighbors {
                write!(f, "{n}, ")?;
            }
            writeln!(f, ";")?;
        }
        Ok(())
    }
}

/// Serialized as the bare record list `[[vertex, [neighbors..]], ..]`.
impl<V, O> Serialize for AdjacencyGraph<V, O>
where
    V: VertexLike + Serialize,
    O: Orientation,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

/// The edge count is recomputed from the records, as in
/// [`AdjacencyGraph::from_adjacency_list`].
impl<'de, V, O> Deserialize<'de> for AdjacencyGraph<V, O>
where
    V: VertexLike + Deserialize<'de>,
    O: Orientation,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(V, Vec<V>)>::deserialize(deserializer).map(Self::from_adjacency_list)
    }
}


#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn json_is_a_bare_adjacency_list() {
        let g = UndirectedGraph::from_adjacency_list(vec![('A', vec!['B']), ('B', vec!['A'])]);
        let s = serde_json::to_string(&g).unwrap();
        assert_eq!(s, r#"[["A",["B"]],["B",["A"]]]"#);
    }

    #[test]
    fn deserialize_recomputes_edge_count() {
        let g: DirectedGraph<String> =
            serde_json::from_str(r#"[["A",["B","C"]],["B",["C"]],["C",[]]]"#).unwrap();
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.adjacent_vertices("A"), &["B".to_string(), "C".to_string()]);
    }
}
