//! Graph validation helpers.
//!
//! Graphs built through the mutators are valid by construction. Graphs built
//! from caller-supplied adjacency lists (or reshaped through `iter_mut`) are
//! not re-checked; run [`validate_graph`] on them when the input is untrusted.

use crate::graph_error::GraphError;
use crate::topology::graph::Graph;
use crate::topology::orientation::Orientation;

/// Optional validation toggles for graph structure checks.
#[derive(Debug, Clone, Copy)]
pub struct GraphValidationOptions {
    /// Ensure no neighbor list names the same vertex twice.
    pub check_duplicate_edges: bool,
    /// How to handle a vertex that lists itself as a neighbor.
    pub self_loops: SelfLoopHandling,
}

impl GraphValidationOptions {
    /// Enable all graph validation checks.
    pub fn all() -> Self {
        Self {
            check_duplicate_edges: true,
            self_loops: SelfLoopHandling::Error,
        }
    }

    /// Only the structural invariants every graph must keep: unique labels,
    /// no dangling neighbors, undirected symmetry and a matching edge count.
    pub fn invariants_only() -> Self {
        Self {
            check_duplicate_edges: false,
            self_loops: SelfLoopHandling::Ignore,
        }
    }
}

impl Default for GraphValidationOptions {
    fn default() -> Self {
        Self::invariants_only()
    }
}

/// Behavior for self-loop detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfLoopHandling {
    /// Skip self-loop detection.
    Ignore,
    /// Log a warning on self-loops.
    Warn,
    /// Return an error on self-loops.
    Error,
}

/// Validate `g` and return the first violation found.
///
/// Checks run in this order: unique vertex labels, per-record neighbor checks
/// (dangling neighbors, undirected mirrors, then the optional duplicate and
/// self-loop checks), and finally the maintained edge count.
pub fn validate_graph<G: Graph>(g: &G, options: GraphValidationOptions) -> Result<(), GraphError> {
    let labels: Vec<&G::Vertex> = g.vertices().collect();
    for (i, v) in labels.iter().enumerate() {
        if labels[..i].contains(v) {
            return Err(GraphError::DuplicateVertex(format!("{v:?}")));
        }
    }

    let mut entries = 0usize;
    for (vertex, neighbors) in g.iter() {
        entries += neighbors.len();
        for (k, n) in neighbors.iter().enumerate() {
            if !labels.contains(&n) {
                return Err(GraphError::DanglingNeighbor {
                    vertex: format!("{vertex:?}"),
                    neighbor: format!("{n:?}"),
                });
            }
            if g.is_undirected() && !g.try_adjacent_vertices(n)?.contains(vertex) {
                return Err(GraphError::AsymmetricEdge {
                    src: format!("{vertex:?}"),
                    dst: format!("{n:?}"),
                });
            }
            if options.check_duplicate_edges && neighbors[..k].contains(n) {
                return Err(GraphError::DuplicateEdge {
                    src: format!("{vertex:?}"),
                    dst: format!("{n:?}"),
                });
            }
            if n == vertex {
                match options.self_loops {
                    SelfLoopHandling::Ignore => {}
                    SelfLoopHandling::Warn => {
                        log::warn!("Self-loop detected on vertex {vertex:?}");
                    }
                    SelfLoopHandling::Error => {
                        return Err(GraphError::SelfLoop(format!("{vertex:?}")));
                    }
                }
            }
        }
    }

    let per_edge = <G::Orientation as Orientation>::entries_per_edge();
    if entries % per_edge != 0 || entries / per_edge != g.num_edges() {
        return Err(GraphError::EdgeCountMismatch {
            expected: entries / per_edge,
            found: g.num_edges(),
        });
    }

    Ok(())
}
