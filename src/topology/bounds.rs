//! Common bound aliases used across topology code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

/// Canonical bound set for vertex labels.
///
/// - `Clone` so algorithms can hand labels back in owned tuples
/// - `Eq` for neighbor-list lookups
/// - `Debug` for diagnostics and error messages
///
/// No `Hash` or `Ord` is required; records are searched linearly in stored order.
pub trait VertexLike: Clone + Eq + std::fmt::Debug {}
impl<T> VertexLike for T where T: Clone + Eq + std::fmt::Debug {}
