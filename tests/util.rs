#![allow(dead_code)]
use mesh_skeleton::prelude::*;

/// Triangle `A, B, C` built through the adjacency-list constructor.
pub fn triangle() -> UndirectedGraph<String> {
    UndirectedGraph::from_str_lists([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["A", "B"]),
    ])
}

/// Square pyramid: apex `P` over the quad `Q1 Q2 Q3 Q4`.
pub fn square_pyramid() -> UndirectedGraph<String> {
    UndirectedGraph::from_str_edges(
        ["P", "Q1", "Q2", "Q3", "Q4"],
        [
            ("P", "Q1"),
            ("P", "Q2"),
            ("P", "Q3"),
            ("P", "Q4"),
            ("Q1", "Q2"),
            ("Q2", "Q3"),
            ("Q3", "Q4"),
            ("Q4", "Q1"),
        ],
    )
    .unwrap()
}

/// Icosahedron skeleton with two extra cap vertices.
///
/// `C1` sits over the ring `A1..A5`, `C2` under the ring `B1..B5`; band edges
/// join `Ai` to `Bi` and `B(i+1)`. `C3` caps the face `C1 A1 A2` and `C4` caps
/// the face `C2 B3 B4`. 14 vertices, 36 edges, 26 triangles.
pub fn capped_icosahedron() -> UndirectedGraph<String> {
    let a = |i: usize| format!("A{}", (i % 5) + 1);
    let b = |i: usize| format!("B{}", (i % 5) + 1);

    let mut vertices = vec!["C1".to_string()];
    vertices.extend((0..5).map(a));
    vertices.extend((0..5).map(b));
    vertices.extend(["C2", "C3", "C4"].map(String::from));

    let mut edges = Vec::new();
    edges.extend((0..5).map(|i| ("C1".to_string(), a(i))));
    edges.extend((0..5).map(|i| (a(i), a(i + 1))));
    edges.extend((0..5).map(|i| (a(i), b(i))));
    edges.extend((0..5).map(|i| (a(i), b(i + 1))));
    edges.extend((0..5).map(|i| (b(i), b(i + 1))));
    edges.extend((0..5).map(|i| ("C2".to_string(), b(i))));
    for (x, y) in [
        ("C3", "C1"),
        ("C3", "A1"),
        ("C3", "A2"),
        ("C4", "C2"),
        ("C4", "B3"),
        ("C4", "B4"),
    ] {
        edges.push((x.to_string(), y.to_string()));
    }

    UndirectedGraph::from_edges(vertices, edges).unwrap()
}

/// Owned string triple.
pub fn tri(u: &str, v: &str, w: &str) -> Triangle<String> {
    (u.to_string(), v.to_string(), w.to_string())
}

/// Owned string pairs.
pub fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
    list.iter()
        .map(|&(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

/// Every 3-clique `{u, v, w}` by exhaustive search, each as a sorted triple.
pub fn brute_force_triangles<G>(g: &G) -> Vec<[G::Vertex; 3]>
where
    G: Graph,
    G::Vertex: Ord,
{
    let vs: Vec<G::Vertex> = g.vertices().cloned().collect();
    let mut out = Vec::new();
    for i in 0..vs.len() {
        for j in (i + 1)..vs.len() {
            for k in (j + 1)..vs.len() {
                if g.are_adjacent(&vs[i], &vs[j])
                    && g.are_adjacent(&vs[j], &vs[k])
                    && g.are_adjacent(&vs[i], &vs[k])
                {
                    let mut t = [vs[i].clone(), vs[j].clone(), vs[k].clone()];
                    t.sort();
                    out.push(t);
                }
            }
        }
    }
    out.sort();
    out
}

/// Triples with their vertices sorted, the list sorted; order-agnostic compare.
pub fn normalized<V: Ord + Clone>(triangles: &[Triangle<V>]) -> Vec<[V; 3]> {
    let mut out: Vec<[V; 3]> = triangles
        .iter()
        .map(|(u, v, w)| {
            let mut t = [u.clone(), v.clone(), w.clone()];
            t.sort();
            t
        })
        .collect();
    out.sort();
    out
}
