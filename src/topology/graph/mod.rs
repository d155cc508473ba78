pub mod adjacency;
pub mod graph_trait;
pub mod mutable;

// Re-export the core traits and the in-memory impl at top level
pub use adjacency::{AdjacencyGraph, DirectedGraph, UndirectedGraph};
pub use graph_trait::Graph;
pub use mutable::MutableGraph;
