//! Vertices ordered by degree.

use itertools::Itertools;

use crate::topology::graph::Graph;

/// Every vertex with its degree, sorted ascending by degree.
///
/// The sort is stable: vertices of equal degree keep their stored order, so
/// the first entry is the first minimum-degree vertex.
pub fn find_orders_of_vertices<G: Graph>(g: &G) -> Vec<(G::Vertex, usize)> {
    g.iter()
        .map(|(v, neighbors)| (v.clone(), neighbors.len()))
        .sorted_by_key(|(_, degree)| *degree)
        .collect()
}
