#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-skeleton
//!
//! mesh-skeleton works on the edge skeleton of a polyhedron: an adjacency-list
//! graph whose vertices are the polyhedron's corners. It finds the triangular
//! faces of the skeleton, fills a convex polyhedron with tetrahedra by coning
//! those faces from an apex vertex, and answers degree queries along the way.
//!
//! ## Features
//! - [`AdjacencyGraph`](topology::graph::AdjacencyGraph): ordered vertex records with
//!   ordered neighbor lists, directed or undirected by type
//! - Fallible `try_*` queries and mutators returning [`GraphError`](graph_error::GraphError),
//!   with panicking forms for code that treats a bad label as a bug
//! - Structural invariant checks after every mutation in debug builds
//!   (or with the `strict-invariants` feature), and on demand through
//!   [`DebugInvariants::validate_invariants`]
//! - serde support: a graph serializes as its bare record list
//!
//! ## Ordering
//!
//! Vertex order is insertion order and neighbor order is edge insertion order.
//! Every algorithm output follows these orders, so results are deterministic
//! for a given construction sequence.
//!
//! ## Usage
//! ```rust
//! use mesh_skeleton::prelude::*;
//!
//! let mut g = UndirectedGraph::<String>::from_str_edges(
//!     ["A", "B", "C", "D"],
//!     [("A", "B"), ("B", "C"), ("C", "A"), ("A", "D"), ("B", "D"), ("C", "D")],
//! )
//! .unwrap();
//! let faces = find_triangular_faces(&g).unwrap();
//! assert_eq!(faces.len(), 4);
//!
//! let tets = cone_triangulation(&faces, "D".to_string());
//! assert_eq!(tets.len(), 1);
//!
//! g.remove_vertex("D");
//! assert_eq!(g.num_edges(), 3);
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod graph_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        Tetrahedron, Triangle, cone_triangulation, find_all_connected_vertices_of_same_degree,
        find_orders_of_vertices, find_triangular_faces,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::GraphError;
    pub use crate::topology::bounds::VertexLike;
    pub use crate::topology::graph::{
        AdjacencyGraph, DirectedGraph, Graph, MutableGraph, UndirectedGraph,
    };
    pub use crate::topology::orientation::{Directed, Orientation, Undirected};
    pub use crate::topology::validation::{
        GraphValidationOptions, SelfLoopHandling, validate_graph,
    };
}
