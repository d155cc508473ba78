//! Triangular faces of a polyhedron skeleton.
//!
//! The search runs on a private working copy of the graph and removes edges
//! from it as it goes, while the candidate third vertices are always read
//! from the caller's graph, which is never modified.
//!
//! For every vertex `u` (stored order), while `u` still has a neighbor in the
//! working copy, take the first one, `v`:
//! 1. for every `w` in `u`'s neighbor list in the **input** graph, in stored order,
//!    report `(u, v, w)` if the working copy still has both `u–w` and `v–w`;
//! 2. remove `u–v` from the working copy.
//!
//! Edges are only ever removed, so the walk stops after at most `num_edges()`
//! removals. On an undirected graph every 3-cycle is reported exactly once,
//! anchored at whichever of its vertices is stored first.

use crate::graph_error::GraphError;
use crate::topology::graph::MutableGraph;

/// A vertex triple `(u, v, w)`.
pub type Triangle<V> = (V, V, V);

/// Every triangle `(u, v, w)` found by the working-copy walk, in discovery order.
///
/// `g` is cloned once; the clone is consumed by the walk. The output is not
/// post-processed.
///
/// # Example
/// ```rust
/// use mesh_skeleton::prelude::*;
/// let g = UndirectedGraph::from_adjacency_list(vec![
///     ('A', vec!['B', 'C']),
///     ('B', vec!['A', 'C']),
///     ('C', vec!['A', 'B']),
/// ]);
/// assert_eq!(find_triangular_faces(&g).unwrap(), vec![('A', 'B', 'C')]);
/// ```
pub fn find_triangular_faces<G>(g: &G) -> Result<Vec<Triangle<G::Vertex>>, GraphError>
where
    G: MutableGraph + Clone,
{
    let mut temp = g.clone();
    // No vertex is added to or removed from `temp`, so the order is fixed.
    let order: Vec<G::Vertex> = temp.vertices().cloned().collect();
    let mut faces = Vec::new();
    let mut removed = 0usize;

    for u in &order {
        let candidates = g.try_adjacent_vertices(u)?;
        loop {
            let Some(v) = temp.try_adjacent_vertices(u)?.first().cloned() else {
                break;
            };
            for w in candidates {
                if temp.try_are_adjacent(u, w)? && temp.try_are_adjacent(&v, w)? {
                    log::trace!("triangle ({u:?}, {v:?}, {w:?})");
                    faces.push((u.clone(), v.clone(), w.clone()));
                }
            }
            temp.try_remove_edge(u, &v)?;
            removed += 1;
        }
    }

    log::debug!(
        "triangular faces: vertices={} edges={} removed={removed} faces={}",
        g.num_vertices(),
        g.num_edges(),
        faces.len()
    );
    Ok(faces)
}
