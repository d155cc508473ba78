//! Cone tetrahedralization from an apex vertex.

use crate::algs::triangular_faces::Triangle;

/// A vertex quadruple `(q, u, v, w)`.
pub type Tetrahedron<V> = (V, V, V, V);

/// Join `apex` to every triangle that does not already contain it.
///
/// Triangles touching `apex` are dropped; the rest keep their relative order.
///
/// # Example
/// ```rust
/// use mesh_skeleton::algs::cone::cone_triangulation;
/// let tris = vec![(1, 2, 3), (2, 3, 4), (1, 3, 4)];
/// assert_eq!(cone_triangulation(&tris, 4), vec![(4, 1, 2, 3)]);
/// ```
pub fn cone_triangulation<V>(triangles: &[Triangle<V>], apex: V) -> Vec<Tetrahedron<V>>
where
    V: Clone + PartialEq,
{
    let cone: Vec<_> = triangles
        .iter()
        .filter(|(u, v, w)| *u != apex && *v != apex && *w != apex)
        .map(|(u, v, w)| (apex.clone(), u.clone(), v.clone(), w.clone()))
        .collect();
    log::debug!(
        "cone triangulation: triangles={} tetrahedra={}",
        triangles.len(),
        cone.len()
    );
    cone
}
