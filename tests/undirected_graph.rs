mod util;
use mesh_skeleton::prelude::*;

fn abc() -> UndirectedGraph<char> {
    let mut g = UndirectedGraph::new();
    for v in ['A', 'B', 'C'] {
        g.insert_vertex(v);
    }
    g
}

fn full_triangle() -> UndirectedGraph<char> {
    UndirectedGraph::from_adjacency_list(vec![
        ('A', vec!['B', 'C']),
        ('B', vec!['A', 'C']),
        ('C', vec!['A', 'B']),
    ])
}

#[test]
fn insert_edge_counts_once_per_pair() {
    let mut g = abc();
    assert_eq!(g.num_edges(), 0);
    g.insert_edge(&'A', &'B');
    assert_eq!(g.num_edges(), 1);
    g.insert_edge(&'B', &'C');
    g.insert_edge(&'A', &'C');
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g.validate_invariants(), Ok(()));
}

#[test]
#[should_panic(expected = "edge `'B'` -> `'A'` already exists")]
fn reverse_duplicate_edge_panics() {
    let mut g = abc();
    g.insert_edge(&'A', &'B');
    g.insert_edge(&'B', &'A');
}

#[test]
#[should_panic(expected = "vertex `'G'` not found")]
fn edge_to_unknown_vertex_panics() {
    let mut g = abc();
    g.insert_edge(&'A', &'G');
}

#[test]
fn remove_vertex_then_remove_again_fails() {
    let mut g = abc();
    g.remove_vertex(&'A');
    assert_eq!(g.num_vertices(), 2);
    assert_eq!(
        g.try_remove_vertex(&'A'),
        Err(GraphError::VertexNotFound("'A'".into()))
    );
}

#[test]
fn remove_edge_drops_both_halves() {
    let mut g = abc();
    g.insert_edge(&'A', &'B');
    g.insert_edge(&'B', &'C');
    g.insert_edge(&'A', &'C');
    g.remove_edge(&'A', &'B');
    assert_eq!(g.num_edges(), 2);
    g.remove_edge(&'C', &'A');
    assert_eq!(g.num_edges(), 1);
    assert_eq!(
        g.try_remove_edge(&'A', &'C'),
        Err(GraphError::EdgeNotFound {
            src: "'A'".into(),
            dst: "'C'".into()
        })
    );
    assert!(matches!(
        g.try_remove_edge(&'A', &'G'),
        Err(GraphError::VertexNotFound(_))
    ));
    assert_eq!(g.num_edges(), 1);
}

#[test]
fn adjacency_list_constructor_halves_entries() {
    let g = full_triangle();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.num_edges(), 3);
}

#[test]
fn degree_follows_edge_and_vertex_removal() {
    let mut g = full_triangle();
    assert_eq!(g.degree(&'A'), 2);
    assert_eq!(g.degree(&'B'), 2);
    g.remove_edge(&'A', &'B');
    assert_eq!(g.degree(&'A'), 1);
    assert_eq!(g.degree(&'B'), 1);
    g.remove_vertex(&'C');
    assert_eq!(g.degree(&'A'), 0);
    assert_eq!(g.num_edges(), 0);
    assert!(g.try_degree(&'C').is_err());
}

#[test]
#[should_panic(expected = "vertex `'C'` not found")]
fn degree_of_removed_vertex_panics() {
    let mut g = full_triangle();
    g.remove_vertex(&'C');
    let _ = g.degree(&'C');
}

#[test]
fn adjacent_vertices_keep_insertion_order() {
    let mut g = full_triangle();
    assert_eq!(g.adjacent_vertices(&'A'), &['B', 'C']);
    g.insert_vertex('D');
    g.insert_edge(&'A', &'D');
    assert_eq!(g.adjacent_vertices(&'A'), &['B', 'C', 'D']);
    assert_eq!(g.adjacent_vertices(&'D'), &['A']);
}

#[test]
fn are_adjacent_is_symmetric() {
    let mut g = full_triangle();
    assert!(g.are_adjacent(&'A', &'B'));
    assert!(g.are_adjacent(&'B', &'A'));
    assert!(g.are_adjacent(&'A', &'C'));
    assert!(g.are_adjacent(&'C', &'A'));

    g.remove_edge(&'A', &'B');
    assert!(!g.are_adjacent(&'A', &'B'));
    assert!(!g.are_adjacent(&'B', &'A'));

    g.remove_vertex(&'C');
    assert!(g.try_are_adjacent(&'A', &'C').is_err());
    assert!(g.try_are_adjacent(&'C', &'A').is_err());

    g.insert_vertex('E');
    g.insert_vertex('G');
    g.insert_edge(&'E', &'G');
    assert!(g.are_adjacent(&'E', &'G'));
    assert!(g.are_adjacent(&'G', &'E'));
}

#[test]
fn are_adjacent_checks_both_halves_on_malformed_input() {
    let g = UndirectedGraph::from_adjacency_list(vec![('A', vec!['B']), ('B', vec![])]);
    assert!(!g.are_adjacent(&'A', &'B'));
    assert!(g.validate_invariants().is_err());
}

#[test]
fn display_renders_string_labels() {
    assert_eq!(
        util::triangle().to_string(),
        "Vertex: A is connected to: B, C, ;\n\
         Vertex: B is connected to: A, C, ;\n\
         Vertex: C is connected to: A, B, ;\n"
    );
}

#[test]
fn forward_and_reverse_traversal() {
    let mut g = util::triangle();
    let forward: Vec<&str> = g.iter().map(|(v, _)| v.as_str()).collect();
    assert_eq!(forward, ["A", "B", "C"]);
    let backward: Vec<&str> = g.vertices().rev().map(String::as_str).collect();
    assert_eq!(backward, ["C", "B", "A"]);

    for (_, neighbors) in g.iter_mut().rev() {
        neighbors.sort_by(|a, b| b.cmp(a));
    }
    assert_eq!(g.adjacent_vertices("A"), ["C", "B"]);
    assert_eq!(g.num_edges(), 3);
}
