//! Edge orientation modes for adjacency graphs.
//!
//! Orientation is part of a graph's type, so it is fixed for the graph's
//! whole lifetime. Only edge insertion/removal, adjacency tests and edge
//! counting branch on it.

use core::fmt::Debug;

/// Marker trait for the two orientation modes.
pub trait Orientation: Copy + Clone + Default + Debug + Eq + Send + Sync + 'static {
    /// `true` when every edge is stored once per endpoint.
    const UNDIRECTED: bool;

    /// Number of neighbor-list entries that make up one edge.
    #[inline]
    fn entries_per_edge() -> usize {
        if Self::UNDIRECTED { 2 } else { 1 }
    }
}

/// Edges are stored once, on the source vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directed;
impl Orientation for Directed {
    const UNDIRECTED: bool = false;
}

/// Edges are stored symmetrically, once on each endpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Undirected;
impl Orientation for Undirected {
    const UNDIRECTED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_per_edge_follow_mode() {
        assert_eq!(Directed::entries_per_edge(), 1);
        assert_eq!(Undirected::entries_per_edge(), 2);
    }
}
