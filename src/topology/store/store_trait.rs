//! Core trait for entity stores.
//!
//! An [`EntityStore`] owns entity payloads and the per-domain, per-dimension
//! connectivity between them. Higher layers (the PIC mesh facade) build
//! entities through it, ask it to finalize a domain, and then read entity
//! sets and adjacency back out.
//!
//! # Lifecycle
//! 1. [`make`](EntityStore::make) allocates an entity and returns its id.
//! 2. [`add_entity`](EntityStore::add_entity) registers the id in a domain at a
//!    topological dimension.
//! 3. [`init_entity`](EntityStore::init_entity) records its downward incidence.
//! 4. [`init`](EntityStore::init) closes the domain: every registered relation
//!    gets its transpose, after which the domain is read-only.

use super::entity_set::EntitySet;
use crate::mesh_error::MeshError;
use crate::topology::point::PointId;

/// Generic entity/connectivity storage used by mesh facades.
pub trait EntityStore {
    /// Entity payload stored per id.
    type Entity;

    /// Number of topological domains this store separates.
    fn num_domains(&self) -> usize;

    /// Highest topological dimension an entity can be registered at.
    fn max_dimension(&self) -> usize;

    /// Allocate `entity` and return its id.
    ///
    /// Ids are strictly increasing in creation order.
    fn make(&mut self, entity: Self::Entity) -> Result<PointId, MeshError>;

    /// Payload behind `id`, if it was allocated by this store.
    ///
    /// Ids issued by another store resolve to `None`.
    fn entity(&self, id: PointId) -> Option<&Self::Entity>;

    /// Register `id` in `domain` at topological dimension `dim`.
    fn add_entity(&mut self, domain: usize, dim: usize, id: PointId) -> Result<(), MeshError>;

    /// Record that `id` (at `from_dim`) is bounded by `incidence` (at `to_dim`),
    /// in order. Replaces any incidence previously recorded for `id`.
    fn init_entity(
        &mut self,
        domain: usize,
        from_dim: usize,
        to_dim: usize,
        id: PointId,
        incidence: &[PointId],
    ) -> Result<(), MeshError>;

    /// Finalize `domain`, building the transpose of every registered relation.
    fn init(&mut self, domain: usize) -> Result<(), MeshError>;

    /// Whether [`init`](EntityStore::init) has completed for `domain`.
    fn is_initialized(&self, domain: usize) -> bool;

    /// Number of entities at `dim` in `domain`; zero for unknown domains.
    fn num_entities_in(&self, domain: usize, dim: usize) -> usize;

    /// Number of entities at `dim` in domain 0.
    fn num_entities(&self, dim: usize) -> usize {
        self.num_entities_in(0, dim)
    }

    /// All entities at `dim` in `domain`, in registration order.
    ///
    /// Unknown domains and dimensions yield an empty set.
    fn entities(&self, domain: usize, dim: usize) -> EntitySet<'_>;

    /// Entities at `to_dim` adjacent to `id` (registered at `from_dim`).
    ///
    /// Same-dimension adjacency is the entity itself. Upward adjacency
    /// (`from_dim < to_dim`) fails with [`MeshError::DomainNotInitialized`]
    /// until the domain is initialized, whatever the domain holds.
    fn adjacent(
        &self,
        domain: usize,
        from_dim: usize,
        id: PointId,
        to_dim: usize,
    ) -> Result<EntitySet<'_>, MeshError>;
}
