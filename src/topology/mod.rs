//! Top-level module for graph topology.
//!
//! This module provides the adjacency-list graph the polyhedron algorithms run on:
//! - The [`Graph`] and [`MutableGraph`] traits and the in-memory [`AdjacencyGraph`]
//! - Orientation markers ([`Directed`], [`Undirected`])
//! - Structural validation for graphs built from untrusted input

pub(crate) mod _debug_invariants;
pub mod bounds;
pub mod graph;
pub mod orientation;
pub mod validation;

pub use graph::*;
pub use orientation::*;
pub use validation::{GraphValidationOptions, SelfLoopHandling, validate_graph};
