//! The PIC mesh facade.
//!
//! [`PicMesh`] is what physics kernels and field-registration code talk to. It
//! builds vertices and cells in a single topological domain of an
//! [`EntityStore`], and after [`init`](PicMesh::init) serves the primary
//! entity sets plus the derived interior/boundary index spaces.
//!
//! # Lifecycle
//! Build, then freeze: create every entity, call `init()` once, then read.
//! Creating entities after `init()` fails with [`MeshError::MeshFrozen`];
//! derived index spaces before `init()` fail with [`MeshError::NotInitialized`].
//!
//! # Example
//! ```rust
//! use pic_mesh::pic::{EntityType, PicMesh, SubIndexSpaceId};
//!
//! let mut mesh = PicMesh::<2>::new();
//! let a = mesh.make_vertex([0.0, 0.0], EntityType::DomainBoundary)?;
//! let b = mesh.make_vertex([1.0, 0.0], EntityType::DomainBoundary)?;
//! let c = mesh.make_vertex([0.0, 1.0], EntityType::Interior)?;
//! let cell = mesh.make_cell(&[a, b, c], EntityType::DomainBoundary)?;
//! mesh.init()?;
//!
//! assert_eq!(mesh.cells_in(SubIndexSpaceId::Boundary)?.as_slice(), &[cell]);
//! for cell in mesh.cells() {
//!     for vertex in mesh.vertices_of(cell)? {
//!         assert_eq!(mesh.cells_of(vertex)?.collect::<Vec<_>>(), vec![cell]);
//!     }
//! }
//! # Ok::<(), pic_mesh::mesh_error::MeshError>(())
//! ```

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::pic::config::MeshConfig;
use crate::pic::entity::{
    Cell, CellId, EntityRef, EntityType, MeshEntity, Point, Vertex, VertexId,
};
use crate::pic::index_space::{DerivedIndexSpaces, IndexSpaceId, IndexSpaces, SubIndexSpaceId};
use crate::topology::handle::EntityHandle;
use crate::topology::index_space::IndexSpace;
use crate::topology::point::PointId;
use crate::topology::store::{EntityStore, InMemoryEntityStore};
use itertools::{EitherOrBoth, Itertools};
use once_cell::sync::OnceCell;

/// The single topological domain a PIC mesh uses.
pub const DOMAIN: usize = 0;

/// A `D`-dimensional PIC mesh over an entity store `S`.
#[derive(Debug)]
pub struct PicMesh<const D: usize, S = InMemoryEntityStore<MeshEntity<D>>> {
    store: S,
    config: MeshConfig,
    derived: OnceCell<DerivedIndexSpaces>,
}

static_assertions::assert_impl_all!(PicMesh<2>: Send, Sync);
static_assertions::assert_not_impl_any!(PicMesh<3>: Clone);

impl<const D: usize> PicMesh<D> {
    /// Creates an empty mesh backed by an in-memory store.
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    pub fn with_config(config: MeshConfig) -> Self {
        Self::with_store(InMemoryEntityStore::new(1, D), config)
    }
}

impl<const D: usize> Default for PicMesh<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize, S> PicMesh<D, S>
where
    S: EntityStore<Entity = MeshEntity<D>>,
{
    /// Spatial and cell dimension of the mesh.
    pub const DIMENSION: usize = D;

    /// Wraps an existing store. Entities already in it are served as-is.
    ///
    /// `D` must be at least 1; vertices and cells cannot share a dimension.
    ///
    /// ```compile_fail
    /// let _ = pic_mesh::pic::PicMesh::<0>::new();
    /// ```
    pub fn with_store(store: S, config: MeshConfig) -> Self {
        const { assert!(D > 0, "a PIC mesh needs cells above dimension 0") };
        Self {
            store,
            config,
            derived: OnceCell::new(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        D
    }

    #[inline]
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Read-only access to the backing store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether [`init`](Self::init) has completed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.derived.get().is_some()
    }

    /// Everything the store could reject when registering an entity at `dim`,
    /// checked before the entity is allocated.
    fn ensure_mutable(&self, dim: usize) -> Result<(), MeshError> {
        if self.is_initialized() {
            return Err(MeshError::MeshFrozen);
        }
        if DOMAIN >= self.store.num_domains() {
            return Err(MeshError::UnknownDomain(DOMAIN));
        }
        if self.store.is_initialized(DOMAIN) {
            return Err(MeshError::DomainAlreadyInitialized(DOMAIN));
        }
        let max = self.store.max_dimension();
        if dim > max {
            return Err(MeshError::DimensionOutOfRange { dimension: dim, max });
        }
        Ok(())
    }

    /// `v` is a vertex payload of this mesh and registered as one.
    fn check_vertex(&self, v: VertexId) -> Result<(), MeshError> {
        self.vertex(v)?;
        self.store.adjacent(DOMAIN, 0, v.point(), 0)?;
        Ok(())
    }

    // --- construction ---

    /// Add a vertex at `position` tagged `entity_type`.
    ///
    /// A rejected call allocates nothing.
    pub fn make_vertex(
        &mut self,
        position: impl Into<Point<D>>,
        entity_type: EntityType,
    ) -> Result<VertexId, MeshError> {
        self.ensure_mutable(0)?;
        let vertex = Vertex::new(position.into(), entity_type);
        let id = self.store.make(MeshEntity::Vertex(vertex))?;
        self.store.add_entity(DOMAIN, 0, id)?;
        Ok(VertexId(id))
    }

    /// Add a cell bounded by `vertices`, in order, tagged `entity_type`.
    ///
    /// All preconditions are checked before anything is allocated, so a
    /// rejected call leaves the mesh unchanged.
    ///
    /// # Errors
    /// - [`MeshError::EmptyIncidence`] for an empty vertex list.
    /// - [`MeshError::DanglingEntity`] / [`MeshError::KindMismatch`] for a
    ///   handle that is not a vertex of this mesh.
    /// - [`MeshError::DuplicateIncidence`] for a repeated vertex.
    /// - [`MeshError::MeshFrozen`] after [`init`](Self::init), and the store's
    ///   own registration errors for a store that cannot take the cell.
    pub fn make_cell(
        &mut self,
        vertices: &[VertexId],
        entity_type: EntityType,
    ) -> Result<CellId, MeshError> {
        self.ensure_mutable(D)?;
        if vertices.is_empty() {
            return Err(MeshError::EmptyIncidence);
        }
        for &v in vertices {
            self.check_vertex(v)?;
        }
        if let Some(dup) = vertices.iter().duplicates().next() {
            return Err(MeshError::DuplicateIncidence(dup.point()));
        }
        let incidence: Vec<PointId> = vertices.iter().map(|v| v.point()).collect();

        let id = self.store.make(MeshEntity::Cell(Cell::new(D, entity_type)))?;
        self.store.add_entity(DOMAIN, D, id)?;
        self.store.init_entity(DOMAIN, D, 0, id, &incidence)?;
        Ok(CellId(id))
    }

    // --- entity data ---

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<D>, MeshError> {
        match self.store.entity(id.point()) {
            Some(MeshEntity::Vertex(v)) => Ok(v),
            Some(MeshEntity::Cell(_)) => Err(MeshError::KindMismatch {
                id: id.point(),
                expected: 0,
                found: D,
            }),
            None => Err(MeshError::DanglingEntity(id.point())),
        }
    }

    pub fn cell(&self, id: CellId) -> Result<&Cell, MeshError> {
        match self.store.entity(id.point()) {
            Some(MeshEntity::Cell(c)) => Ok(c),
            Some(MeshEntity::Vertex(_)) => Err(MeshError::KindMismatch {
                id: id.point(),
                expected: D,
                found: 0,
            }),
            None => Err(MeshError::DanglingEntity(id.point())),
        }
    }

    // --- primary index spaces ---

    /// Cardinality of a primary index space.
    pub fn count(&self, id: IndexSpaceId) -> usize {
        match id {
            IndexSpaceId::Vertices => self.store.num_entities_in(DOMAIN, 0),
            IndexSpaceId::Cells => self.store.num_entities_in(DOMAIN, D),
        }
    }

    /// Every vertex, in creation order. Each call starts a fresh pass.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + Clone + '_ {
        self.store.entities(DOMAIN, 0).map(VertexId)
    }

    /// Every cell, in creation order. Each call starts a fresh pass.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = CellId> + Clone + '_ {
        self.store.entities(DOMAIN, D).map(CellId)
    }

    // --- adjacency ---

    fn locate(&self, entity: EntityRef) -> (usize, PointId) {
        match entity {
            EntityRef::Vertex(v) => (0, v.point()),
            EntityRef::Cell(c) => (D, c.point()),
        }
    }

    /// Vertices incident to `entity`.
    ///
    /// For a cell this is its vertex list in the order given to
    /// [`make_cell`](Self::make_cell); for a vertex it is the vertex itself.
    pub fn vertices_of(
        &self,
        entity: impl Into<EntityRef>,
    ) -> Result<impl ExactSizeIterator<Item = VertexId> + Clone + '_, MeshError> {
        let (dim, p) = self.locate(entity.into());
        Ok(self.store.adjacent(DOMAIN, dim, p, 0)?.map(VertexId))
    }

    /// Cells incident to `entity`, in creation order.
    ///
    /// Vertex-to-cell adjacency exists only after [`init`](Self::init); before
    /// that this returns [`MeshError::DomainNotInitialized`].
    pub fn cells_of(
        &self,
        entity: impl Into<EntityRef>,
    ) -> Result<impl ExactSizeIterator<Item = CellId> + Clone + '_, MeshError> {
        let (dim, p) = self.locate(entity.into());
        Ok(self.store.adjacent(DOMAIN, dim, p, D)?.map(CellId))
    }

    // --- derived index spaces ---

    /// The derived index-space cache.
    pub fn index_spaces(&self) -> Result<&DerivedIndexSpaces, MeshError> {
        self.derived.get().ok_or(MeshError::NotInitialized)
    }

    /// Interior or boundary cells.
    pub fn cells_in(&self, id: SubIndexSpaceId) -> Result<&IndexSpace<CellId>, MeshError> {
        Ok(self.index_spaces()?.cells(id))
    }

    /// Interior or boundary vertices.
    ///
    /// Boundary vertices are only available with
    /// [`MeshConfig::classify_boundary_vertices`].
    pub fn vertices_in(&self, id: SubIndexSpaceId) -> Result<&IndexSpace<VertexId>, MeshError> {
        self.index_spaces()?.vertices(id)
    }

    /// [`cells_in`](Self::cells_in) by raw sub-index-space id.
    pub fn cells_in_raw(&self, id: usize) -> Result<&IndexSpace<CellId>, MeshError> {
        self.cells_in(SubIndexSpaceId::try_from(id)?)
    }

    /// [`vertices_in`](Self::vertices_in) by raw sub-index-space id.
    pub fn vertices_in_raw(&self, id: usize) -> Result<&IndexSpace<VertexId>, MeshError> {
        self.vertices_in(SubIndexSpaceId::try_from(id)?)
    }

    // --- initialization ---

    /// Initialize the mesh.
    ///
    /// Finalizes domain 0 of the store, then classifies every cell into the
    /// interior/boundary spaces and every vertex into the interior space (and
    /// the boundary space when configured). Runs at most once.
    ///
    /// # Errors
    /// [`MeshError::AlreadyInitialized`] on a second call; the cached spaces
    /// are left untouched. With [`MeshConfig::check_invariants`], the first
    /// invariant violation, after which the mesh is still uninitialized.
    pub fn init(&mut self) -> Result<(), MeshError> {
        if self.is_initialized() {
            return Err(MeshError::AlreadyInitialized);
        }
        if !self.store.is_initialized(DOMAIN) {
            self.store.init(DOMAIN)?;
        }

        let derived = DerivedIndexSpaces::compute::<S, D>(
            &self.store,
            DOMAIN,
            D,
            self.config.classify_boundary_vertices,
        )?;
        log::debug!(
            "PicMesh<{D}> init: {} cells ({} interior, {} boundary), {} vertices ({} interior)",
            self.count(IndexSpaceId::Cells),
            derived.cells(SubIndexSpaceId::Interior).len(),
            derived.cells(SubIndexSpaceId::Boundary).len(),
            self.count(IndexSpaceId::Vertices),
            derived.vertices(SubIndexSpaceId::Interior).map_or(0, IndexSpace::len),
        );
        if !derived.has_boundary_vertices() {
            log::info!(
                "boundary vertex index space not derived; set MeshConfig::classify_boundary_vertices to compute it"
            );
        }
        // a failed check leaves nothing cached
        if self.config.check_invariants {
            self.check_derived(&derived)?;
        } else {
            crate::debug_invariants!(self.check_derived(&derived), "PicMesh");
        }
        self.derived
            .set(derived)
            .map_err(|_| MeshError::AlreadyInitialized)
    }

    /// Derived spaces partition their primary spaces, and every cell→vertex
    /// incidence has its vertex→cell mirror.
    fn check_derived(&self, derived: &DerivedIndexSpaces) -> Result<(), MeshError> {
        check_partition(
            self.store.entities(DOMAIN, D),
            derived.cells(SubIndexSpaceId::Interior),
            Some(derived.cells(SubIndexSpaceId::Boundary)),
        )?;
        check_partition(
            self.store.entities(DOMAIN, 0),
            derived.vertices(SubIndexSpaceId::Interior)?,
            derived.vertices(SubIndexSpaceId::Boundary).ok(),
        )?;

        for cell in self.cells() {
            for vertex in self.vertices_of(cell)? {
                if !self.cells_of(vertex)?.any(|c| c == cell) {
                    return Err(MeshError::MissingMirror {
                        from: cell.point(),
                        to: vertex.point(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<const D: usize, S> IndexSpaces for PicMesh<D, S>
where
    S: EntityStore<Entity = MeshEntity<D>>,
{
    fn indices(&self, index_space_id: usize) -> Result<usize, MeshError> {
        IndexSpaceId::try_from(index_space_id).map(|id| self.count(id))
    }
}

/// Checks that `interior` and `boundary` are disjoint and, when `boundary` is
/// present, that together they cover `all` exactly.
fn check_partition<H: EntityHandle>(
    all: impl Iterator<Item = PointId>,
    interior: &IndexSpace<H>,
    boundary: Option<&IndexSpace<H>>,
) -> Result<(), MeshError> {
    let mut all: Vec<PointId> = all.collect();
    all.sort_unstable();

    let mut classified = Vec::with_capacity(all.len());
    let boundary_iter = boundary.into_iter().flat_map(IndexSpace::iter);
    for pair in interior.iter().merge_join_by(boundary_iter, Ord::cmp) {
        match pair {
            EitherOrBoth::Both(h, _) => return Err(MeshError::ClassificationOverlap(h.point())),
            EitherOrBoth::Left(h) | EitherOrBoth::Right(h) => classified.push(h.point()),
        }
    }

    for pair in all.iter().merge_join_by(classified.iter(), |a, b| a.cmp(b)) {
        match pair {
            EitherOrBoth::Both(..) => {}
            EitherOrBoth::Left(&p) if boundary.is_some() => {
                return Err(MeshError::ClassificationGap(p));
            }
            EitherOrBoth::Left(_) => {}
            EitherOrBoth::Right(&p) => return Err(MeshError::DanglingEntity(p)),
        }
    }
    Ok(())
}

impl<const D: usize, S> DebugInvariants for PicMesh<D, S>
where
    S: EntityStore<Entity = MeshEntity<D>>,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PicMesh");
    }

    /// Checks the cached spaces; a mesh that is not initialized has nothing
    /// to check.
    fn validate_invariants(&self) -> Result<(), MeshError> {
        match self.derived.get() {
            Some(derived) => self.check_derived(derived),
            None => Ok(()),
        }
    }
}
