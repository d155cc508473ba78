//! Crate-internal assertion helpers for graph mutators.

/// `inv_assert*` fire in debug builds and whenever the `strict-invariants`
/// feature is enabled; they compile to no-ops otherwise.
#[cfg(any(debug_assertions, feature = "strict-invariants"))]
macro_rules! inv_assert {
    ($($tt:tt)*) => { assert!($($tt)*); };
}
#[cfg(not(any(debug_assertions, feature = "strict-invariants")))]
macro_rules! inv_assert {
    ($($tt:tt)*) => {
        ()
    };
}
pub(crate) use inv_assert;

/// Full structural check after a mutation; same cfg gating as `inv_assert!`.
#[cfg(any(debug_assertions, feature = "strict-invariants"))]
macro_rules! assert_invariants {
    ($s:expr) => {
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants($s);
    };
}
#[cfg(not(any(debug_assertions, feature = "strict-invariants")))]
macro_rules! assert_invariants {
    ($s:expr) => {
        ()
    };
}
pub(crate) use assert_invariants;

/// True when `list` holds no label twice.
#[cfg(any(debug_assertions, feature = "strict-invariants"))]
#[inline]
pub(crate) fn no_duplicate_entries<V: PartialEq>(list: &[V]) -> bool {
    list.iter()
        .enumerate()
        .all(|(i, a)| !list[..i].contains(a))
}
