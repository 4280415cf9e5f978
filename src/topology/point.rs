//! `PointId`: a strong, zero-cost handle for mesh entities
//!
//! Every entity held by an [`EntityStore`](crate::topology::store::EntityStore)
//! is addressed by an opaque `PointId`. The handle wraps a nonzero `u64`, so 0
//! stays reserved as an invalid or sentinel value and `Option<PointId>` costs
//! nothing extra.
//!
//! An id handed out by a store packs two fields: the store's tag in the high
//! [`TAG_BITS`] bits and the arena slot (plus one) in the rest. Ids from one
//! store share a tag, so sorting them is the same as sorting by creation time,
//! and an id from another store never resolves to a local entity.

use crate::mesh_error::MeshError;
use std::{
    fmt,
    num::NonZeroU64,
    sync::atomic::{AtomicU32, Ordering},
};

/// Width of the owner tag in a store-issued id.
pub const TAG_BITS: u32 = 24;
const SLOT_BITS: u32 = u64::BITS - TAG_BITS;
const SLOT_MASK: u64 = (1 << SLOT_BITS) - 1;
const TAG_MASK: u32 = (1 << TAG_BITS) - 1;

/// Largest number of entities a single store can address.
pub const MAX_SLOTS: usize = SLOT_MASK as usize;

static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

/// A fresh, nonzero owner tag for a new store.
///
/// Tags wrap after `2^TAG_BITS - 1` stores.
pub(crate) fn next_tag() -> u32 {
    loop {
        let tag = NEXT_TAG.fetch_add(1, Ordering::Relaxed) & TAG_MASK;
        if tag != 0 {
            return tag;
        }
    }
}

/// Opaque, nonzero entity handle.
///
/// # Memory layout
/// This type is `repr(transparent)` over `NonZeroU64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct PointId(NonZeroU64);

impl PointId {
    /// Creates a new `PointId` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidPointId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use pic_mesh::topology::point::PointId;
    /// let p = PointId::new(1).unwrap();
    /// assert_eq!(p.get(), 1);
    /// assert!(PointId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, MeshError> {
        NonZeroU64::new(raw)
            .map(PointId)
            .ok_or(MeshError::InvalidPointId)
    }

    /// Id of arena slot `index` in the store tagged `tag`.
    ///
    /// The caller keeps `index < MAX_SLOTS`.
    #[inline]
    pub(crate) fn from_parts(tag: u32, index: usize) -> Self {
        let raw = (u64::from(tag & TAG_MASK) << SLOT_BITS) | ((index as u64 + 1) & SLOT_MASK);
        // the slot field is index + 1, never zero below MAX_SLOTS
        PointId(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MAX))
    }

    /// Owner tag; zero for ids built with [`PointId::new`] from small values.
    #[inline]
    pub const fn tag(self) -> u32 {
        (self.get() >> SLOT_BITS) as u32
    }

    /// Zero-based arena slot, if the slot field is set.
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        (self.get() & SLOT_MASK).checked_sub(1).map(|s| s as usize)
    }

    /// Returns the inner `u64` value of this `PointId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointId").field(&self.get()).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(PointId, u64);
    assert_eq_size!(Option<PointId>, u64);
    assert_eq_align!(PointId, u64);
}
