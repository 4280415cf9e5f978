//! Lazy entity sequences handed out by an [`EntityStore`](super::EntityStore).

use crate::mesh_error::MeshError;
use crate::topology::index_space::IndexSpace;
use crate::topology::point::PointId;

/// A lazy, restartable view over store-owned entity ids.
///
/// The set borrows the store's id list. A clone is a second cursor over the
/// same slice, so one pass can be kept while another runs.
#[derive(Clone, Debug, Default)]
pub struct EntitySet<'a> {
    ids: std::slice::Iter<'a, PointId>,
}

impl<'a> EntitySet<'a> {
    #[inline]
    pub(crate) fn new(ids: &'a [PointId]) -> Self {
        Self { ids: ids.iter() }
    }

    /// The remaining ids as a slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [PointId] {
        self.ids.as_slice()
    }

    /// Materializes the ids accepted by `pred` into an [`IndexSpace`].
    ///
    /// The result is in creation order regardless of the order of this set.
    ///
    /// # Example
    /// ```rust
    /// use pic_mesh::topology::store::{EntityStore, InMemoryEntityStore};
    /// let mut store = InMemoryEntityStore::<u32>::new(1, 1);
    /// for value in [3, 4, 5] {
    ///     let id = store.make(value).unwrap();
    ///     store.add_entity(0, 0, id).unwrap();
    /// }
    /// let odd = store
    ///     .entities(0, 0)
    ///     .select(|p| store.entity(p).is_some_and(|v| v % 2 == 1));
    /// assert_eq!(odd.len(), 2);
    /// ```
    pub fn select<F>(self, mut pred: F) -> IndexSpace<PointId>
    where
        F: FnMut(PointId) -> bool,
    {
        IndexSpace::from_handles(self.filter(|&p| pred(p)))
    }

    /// Like [`select`](Self::select), with a predicate that can fail.
    ///
    /// The first error aborts the selection.
    pub fn try_select<F>(self, mut pred: F) -> Result<IndexSpace<PointId>, MeshError>
    where
        F: FnMut(PointId) -> Result<bool, MeshError>,
    {
        let mut kept = Vec::new();
        kept.try_reserve(self.len())
            .map_err(|_| MeshError::AllocationFailed("index space"))?;
        for p in self {
            if pred(p)? {
                kept.push(p);
            }
        }
        Ok(IndexSpace::from_handles(kept))
    }
}

impl Iterator for EntitySet<'_> {
    type Item = PointId;

    #[inline]
    fn next(&mut self) -> Option<PointId> {
        self.ids.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for EntitySet<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<PointId> {
        self.ids.next_back().copied()
    }
}

impl ExactSizeIterator for EntitySet<'_> {}
impl std::iter::FusedIterator for EntitySet<'_> {}
