//! In-memory implementation of the [`EntityStore`] trait.
//!
//! [`InMemoryEntityStore`] keeps entity payloads in a flat arena indexed by
//! [`PointId`], and per-domain connectivity in hash maps keyed by
//! `(from_dim, to_dim)`. Each relation maps an entity to its ordered incidence
//! list, so a cell's vertices come back in the order they were given.
//!
//! Every store draws its own owner tag, and the ids it hands out carry it. An
//! id from another store is never resolved, even when its slot is in range.

use super::entity_set::EntitySet;
use super::store_trait::EntityStore;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::point::{self, MAX_SLOTS, PointId};
use hashbrown::HashMap;
use itertools::Itertools;

/// Ordered incidence lists for one `(from_dim, to_dim)` relation.
type Relation = HashMap<PointId, Vec<PointId>>;

/// Entity sets and connectivity of one topological domain.
#[derive(Clone, Debug)]
struct DomainTopology {
    /// `by_dim[d]` holds the ids registered at dimension `d`, in registration order.
    by_dim: Vec<Vec<PointId>>,
    /// id -> (dimension, slot in `by_dim[dimension]`)
    membership: HashMap<PointId, (usize, usize)>,
    connectivity: HashMap<(usize, usize), Relation>,
    initialized: bool,
}

impl DomainTopology {
    fn new(max_dimension: usize) -> Self {
        Self {
            by_dim: vec![Vec::new(); max_dimension + 1],
            membership: HashMap::new(),
            connectivity: HashMap::new(),
            initialized: false,
        }
    }

    fn expect_dimension(&self, id: PointId, expected: usize) -> Result<usize, MeshError> {
        match self.membership.get(&id) {
            None => Err(MeshError::DanglingEntity(id)),
            Some(&(found, _)) if found != expected => Err(MeshError::KindMismatch {
                id,
                expected,
                found,
            }),
            Some(&(_, slot)) => Ok(slot),
        }
    }

    /// Upward relation `to -> from` built from the recorded `from -> to` one.
    ///
    /// Walking `by_dim[from]` in registration order keeps every transposed list
    /// in creation order.
    fn transpose(&self, from: usize, to: usize) -> Relation {
        let mut out = Relation::new();
        let Some(relation) = self.connectivity.get(&(from, to)) else {
            return out;
        };
        for &p in &self.by_dim[from] {
            if let Some(cone) = relation.get(&p) {
                for &q in cone {
                    out.entry(q).or_default().push(p);
                }
            }
        }
        out
    }
}

/// An in-memory entity store with a flat payload arena.
///
/// # Type Parameters
/// - `E`: entity payload type.
#[derive(Clone, Debug)]
pub struct InMemoryEntityStore<E> {
    /// Owner tag carried by every id this store hands out.
    tag: u32,
    entities: Vec<E>,
    domains: Vec<DomainTopology>,
    max_dimension: usize,
}

impl<E> Default for InMemoryEntityStore<E> {
    /// One domain, dimensions `0..=3`.
    fn default() -> Self {
        Self::new(1, 3)
    }
}

impl<E> InMemoryEntityStore<E> {
    /// Creates an empty store with `num_domains` domains and entity dimensions
    /// `0..=max_dimension`.
    pub fn new(num_domains: usize, max_dimension: usize) -> Self {
        Self {
            tag: point::next_tag(),
            entities: Vec::new(),
            domains: vec![DomainTopology::new(max_dimension); num_domains],
            max_dimension,
        }
    }

    /// Total number of allocated entities across all domains.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn domain(&self, domain: usize) -> Result<&DomainTopology, MeshError> {
        self.domains
            .get(domain)
            .ok_or(MeshError::UnknownDomain(domain))
    }

    fn domain_mut(&mut self, domain: usize) -> Result<&mut DomainTopology, MeshError> {
        self.domains
            .get_mut(domain)
            .ok_or(MeshError::UnknownDomain(domain))
    }

    fn check_dimension(&self, dim: usize) -> Result<(), MeshError> {
        if dim > self.max_dimension {
            return Err(MeshError::DimensionOutOfRange {
                dimension: dim,
                max: self.max_dimension,
            });
        }
        Ok(())
    }
}

impl<E> EntityStore for InMemoryEntityStore<E> {
    type Entity = E;

    #[inline]
    fn num_domains(&self) -> usize {
        self.domains.len()
    }

    #[inline]
    fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    fn make(&mut self, entity: E) -> Result<PointId, MeshError> {
        if self.entities.len() >= MAX_SLOTS {
            return Err(MeshError::AllocationFailed("entity arena"));
        }
        self.entities
            .try_reserve(1)
            .map_err(|_| MeshError::AllocationFailed("entity arena"))?;
        self.entities.push(entity);
        Ok(PointId::from_parts(self.tag, self.entities.len() - 1))
    }

    #[inline]
    fn entity(&self, id: PointId) -> Option<&E> {
        if id.tag() != self.tag {
            return None;
        }
        self.entities.get(id.slot()?)
    }

    fn add_entity(&mut self, domain: usize, dim: usize, id: PointId) -> Result<(), MeshError> {
        self.check_dimension(dim)?;
        if self.entity(id).is_none() {
            return Err(MeshError::DanglingEntity(id));
        }
        let topo = self.domain_mut(domain)?;
        if topo.initialized {
            return Err(MeshError::DomainAlreadyInitialized(domain));
        }
        if topo.membership.contains_key(&id) {
            return Err(MeshError::EntityAlreadyRegistered(id));
        }
        let list = &mut topo.by_dim[dim];
        list.try_reserve(1)
            .map_err(|_| MeshError::AllocationFailed("entity set"))?;
        topo.membership.insert(id, (dim, list.len()));
        list.push(id);
        Ok(())
    }

    fn init_entity(
        &mut self,
        domain: usize,
        from_dim: usize,
        to_dim: usize,
        id: PointId,
        incidence: &[PointId],
    ) -> Result<(), MeshError> {
        self.check_dimension(from_dim)?;
        self.check_dimension(to_dim)?;
        if from_dim == to_dim {
            return Err(MeshError::InvalidConnectivity {
                from: from_dim,
                to: to_dim,
            });
        }
        if incidence.is_empty() {
            return Err(MeshError::EmptyIncidence);
        }
        if let Some(&dup) = incidence.iter().duplicates().next() {
            return Err(MeshError::DuplicateIncidence(dup));
        }

        let topo = self.domain_mut(domain)?;
        if topo.initialized {
            return Err(MeshError::DomainAlreadyInitialized(domain));
        }
        topo.expect_dimension(id, from_dim)?;
        for &q in incidence {
            topo.expect_dimension(q, to_dim)?;
        }

        let mut cone = Vec::new();
        cone.try_reserve_exact(incidence.len())
            .map_err(|_| MeshError::AllocationFailed("incidence list"))?;
        cone.extend_from_slice(incidence);
        topo.connectivity
            .entry((from_dim, to_dim))
            .or_default()
            .insert(id, cone);
        Ok(())
    }

    fn init(&mut self, domain: usize) -> Result<(), MeshError> {
        let topo = self.domain_mut(domain)?;
        if topo.initialized {
            return Err(MeshError::DomainAlreadyInitialized(domain));
        }
        // Relations recorded in both directions are left as given.
        let pending: Vec<(usize, usize)> = topo
            .connectivity
            .keys()
            .copied()
            .filter(|&(from, to)| !topo.connectivity.contains_key(&(to, from)))
            .sorted()
            .collect();
        for (from, to) in pending {
            let transpose = topo.transpose(from, to);
            log::trace!(
                "domain {domain}: built {to} -> {from} connectivity for {} entities",
                transpose.len()
            );
            topo.connectivity.insert((to, from), transpose);
        }
        topo.initialized = true;
        Ok(())
    }

    fn is_initialized(&self, domain: usize) -> bool {
        self.domains.get(domain).is_some_and(|t| t.initialized)
    }

    fn num_entities_in(&self, domain: usize, dim: usize) -> usize {
        self.domains
            .get(domain)
            .and_then(|t| t.by_dim.get(dim))
            .map_or(0, Vec::len)
    }

    fn entities(&self, domain: usize, dim: usize) -> EntitySet<'_> {
        self.domains
            .get(domain)
            .and_then(|t| t.by_dim.get(dim))
            .map_or_else(EntitySet::default, |ids| EntitySet::new(ids))
    }

    fn adjacent(
        &self,
        domain: usize,
        from_dim: usize,
        id: PointId,
        to_dim: usize,
    ) -> Result<EntitySet<'_>, MeshError> {
        self.check_dimension(to_dim)?;
        let topo = self.domain(domain)?;
        let slot = topo.expect_dimension(id, from_dim)?;
        if from_dim == to_dim {
            return Ok(EntitySet::new(std::slice::from_ref(
                &topo.by_dim[from_dim][slot],
            )));
        }
        // upward relations are only complete once the domain is closed
        if from_dim < to_dim && !topo.initialized {
            return Err(MeshError::DomainNotInitialized(domain));
        }
        Ok(topo
            .connectivity
            .get(&(from_dim, to_dim))
            .and_then(|relation| relation.get(&id))
            .map_or_else(EntitySet::default, |ids| EntitySet::new(ids)))
    }
}

impl<E> DebugInvariants for InMemoryEntityStore<E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "InMemoryEntityStore");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        for topo in &self.domains {
            for (dim, ids) in topo.by_dim.iter().enumerate() {
                for (slot, &id) in ids.iter().enumerate() {
                    if self.entity(id).is_none() || topo.membership.get(&id) != Some(&(dim, slot)) {
                        return Err(MeshError::DanglingEntity(id));
                    }
                }
            }
            if !topo.initialized {
                continue;
            }
            for (&(from, to), relation) in &topo.connectivity {
                let mirror = topo.connectivity.get(&(to, from));
                for (&p, cone) in relation {
                    for &q in cone {
                        let mirrored = mirror
                            .and_then(|m| m.get(&q))
                            .is_some_and(|back| back.contains(&p));
                        if !mirrored {
                            return Err(MeshError::MissingMirror { from: p, to: q });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
