//! Bound aliases for entity handles.
//!
//! Typed handles (`VertexId`, `CellId`) and the untyped [`PointId`] all wrap
//! the same store-level id. [`EntityHandle`] lets index spaces and adjacency
//! helpers be written once over any of them.

use crate::topology::point::PointId;

/// A `Copy` handle that can be converted to and from a store-level [`PointId`].
///
/// Conversions must preserve ordering, so an index space sorted by handle is
/// also sorted by creation order.
pub trait EntityHandle: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {
    /// The store-level id behind this handle.
    fn point(self) -> PointId;
    /// Wraps a store-level id. The caller guarantees the kind is correct.
    fn from_point(p: PointId) -> Self;
}

impl EntityHandle for PointId {
    #[inline]
    fn point(self) -> PointId {
        self
    }

    #[inline]
    fn from_point(p: PointId) -> Self {
        p
    }
}
