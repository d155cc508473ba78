//! Pairs of adjacent vertices that share a given degree.
//
// Walk the records in stored order; for every vertex v of degree `d`, walk
// v's neighbors in stored order and keep each neighbor u of degree `d` as
// (v, u). A pair whose endpoints both qualify shows up once from each side.

use crate::graph_error::GraphError;
use crate::topology::graph::Graph;

/// All `(v, u)` with `u` adjacent to `v` and `degree(v) == degree(u) == degree`.
///
/// The result is not deduplicated and the graph is not modified. The output
/// is pre-sized to `num_edges()`; that is a capacity hint, not a bound.
///
/// Fails only on a graph that names a neighbor without a record of its own.
///
/// # Example
/// ```rust
/// use mesh_skeleton::prelude::*;
/// let g = UndirectedGraph::from_adjacency_list(vec![
///     ('A', vec!['B', 'C']),
///     ('B', vec!['A', 'C']),
///     ('C', vec!['A', 'B']),
/// ]);
/// let pairs = find_all_connected_vertices_of_same_degree(&g, 2).unwrap();
/// assert_eq!(pairs[..2], [('A', 'B'), ('A', 'C')]);
/// ```
pub fn find_all_connected_vertices_of_same_degree<G: Graph>(
    g: &G,
    degree: usize,
) -> Result<Vec<(G::Vertex, G::Vertex)>, GraphError> {
    let mut pairs = Vec::with_capacity(g.num_edges());
    for (v, neighbors) in g.iter() {
        if neighbors.len() != degree {
            continue;
        }
        for u in neighbors {
            if g.try_degree(u)? == degree {
                pairs.push((v.clone(), u.clone()));
            }
        }
    }
    log::debug!(
        "same-degree pairs: degree={degree} vertices={} pairs={}",
        g.num_vertices(),
        pairs.len()
    );
    Ok(pairs)
}
