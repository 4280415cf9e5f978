//! Materialized index spaces.
//!
//! An [`IndexSpace`] is a finished selection of entity handles, produced by
//! filtering an [`EntitySet`](crate::topology::store::EntitySet) once. It holds
//! handles only, never entity data, and keeps them in creation order.

use crate::topology::handle::EntityHandle;
use serde::{Deserialize, Serialize};

/// An immutable, sorted list of entity handles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexSpace<H> {
    items: Vec<H>,
}

impl<H> Default for IndexSpace<H> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<H: EntityHandle> IndexSpace<H> {
    /// Builds an index space from handles, sorting them into creation order.
    ///
    /// Duplicate handles are dropped.
    pub fn from_handles<I: IntoIterator<Item = H>>(handles: I) -> Self {
        let mut items: Vec<H> = handles.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    /// Number of entities in the index space.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Restartable iterator over the handles in creation order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, H>> {
        self.items.iter().copied()
    }

    /// Membership test in `O(log n)`.
    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        self.items.binary_search(&handle).is_ok()
    }

    #[inline]
    pub fn as_slice(&self) -> &[H] {
        &self.items
    }

    /// Re-types the handles, e.g. from raw `PointId`s to `CellId`s.
    pub fn cast<K: EntityHandle>(self) -> IndexSpace<K> {
        IndexSpace {
            items: self
                .items
                .into_iter()
                .map(|h| K::from_point(h.point()))
                .collect(),
        }
    }
}

impl<'a, H: EntityHandle> IntoIterator for &'a IndexSpace<H> {
    type Item = H;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
