//! Re-export public algorithms.

pub mod cone;
pub mod degree_order;
pub mod same_degree;
pub mod triangular_faces;

pub use cone::{Tetrahedron, cone_triangulation};
pub use degree_order::find_orders_of_vertices;
pub use same_degree::find_all_connected_vertices_of_same_degree;
pub use triangular_faces::{Triangle, find_triangular_faces};
