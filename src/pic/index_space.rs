//! Index-space identifiers and the derived index-space cache.
//!
//! Primary index spaces (`vertices`, `cells`) are the store's full entity
//! sets. Derived ones (`interior`, `boundary`) are computed from them once,
//! during [`PicMesh::init`](crate::pic::PicMesh::init), and kept in
//! [`DerivedIndexSpaces`] for the lifetime of the mesh.

use crate::mesh_error::MeshError;
use crate::pic::classify::Classify;
use crate::pic::entity::{CellId, MeshEntity, VertexId};
use crate::topology::index_space::IndexSpace;
use crate::topology::point::PointId;
use crate::topology::store::EntityStore;

/// Primary index spaces, numbered as the host engine numbers them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(usize)]
pub enum IndexSpaceId {
    Vertices = 0,
    Cells = 1,
}

impl TryFrom<usize> for IndexSpaceId {
    type Error = MeshError;

    fn try_from(raw: usize) -> Result<Self, MeshError> {
        match raw {
            0 => Ok(IndexSpaceId::Vertices),
            1 => Ok(IndexSpaceId::Cells),
            other => Err(MeshError::UnknownIndexSpace(other)),
        }
    }
}

/// Derived (classified) index spaces of one entity kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(usize)]
pub enum SubIndexSpaceId {
    Interior = 0,
    Boundary = 1,
}

impl TryFrom<usize> for SubIndexSpaceId {
    type Error = MeshError;

    fn try_from(raw: usize) -> Result<Self, MeshError> {
        match raw {
            0 => Ok(SubIndexSpaceId::Interior),
            1 => Ok(SubIndexSpaceId::Boundary),
            other => Err(MeshError::UnknownIndexSpace(other)),
        }
    }
}

/// Cardinality lookup by raw index-space id.
///
/// This is the entry point field-registration code uses; ids it does not
/// know are reported, never defaulted.
pub trait IndexSpaces {
    fn indices(&self, index_space_id: usize) -> Result<usize, MeshError>;
}

/// The four derived index spaces, computed once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivedIndexSpaces {
    interior_cells: IndexSpace<CellId>,
    boundary_cells: IndexSpace<CellId>,
    interior_vertices: IndexSpace<VertexId>,
    /// `None` unless boundary-vertex classification was enabled.
    boundary_vertices: Option<IndexSpace<VertexId>>,
}

impl DerivedIndexSpaces {
    /// Classify every cell (at `cell_dim`) and vertex in `domain` of `store`.
    pub(crate) fn compute<S, const D: usize>(
        store: &S,
        domain: usize,
        cell_dim: usize,
        with_boundary_vertices: bool,
    ) -> Result<Self, MeshError>
    where
        S: EntityStore<Entity = MeshEntity<D>>,
    {
        let entity = move |p: PointId| store.entity(p).ok_or(MeshError::DanglingEntity(p));

        let cells = store.entities(domain, cell_dim);
        let interior_cells = cells
            .clone()
            .try_select(|p| Ok(entity(p)?.is_interior()))?
            .cast();
        let boundary_cells = cells
            .try_select(|p| Ok(entity(p)?.is_domain_boundary()))?
            .cast();

        let vertices = store.entities(domain, 0);
        let interior_vertices = vertices
            .clone()
            .try_select(|p| Ok(entity(p)?.is_interior()))?
            .cast();
        let boundary_vertices = if with_boundary_vertices {
            Some(
                vertices
                    .try_select(|p| Ok(entity(p)?.is_domain_boundary()))?
                    .cast(),
            )
        } else {
            None
        };

        Ok(Self {
            interior_cells,
            boundary_cells,
            interior_vertices,
            boundary_vertices,
        })
    }

    /// Derived cell space `id`.
    pub fn cells(&self, id: SubIndexSpaceId) -> &IndexSpace<CellId> {
        match id {
            SubIndexSpaceId::Interior => &self.interior_cells,
            SubIndexSpaceId::Boundary => &self.boundary_cells,
        }
    }

    /// Derived vertex space `id`.
    ///
    /// # Errors
    /// [`MeshError::IndexSpaceNotComputed`] for the boundary space when it was
    /// not computed.
    pub fn vertices(&self, id: SubIndexSpaceId) -> Result<&IndexSpace<VertexId>, MeshError> {
        match id {
            SubIndexSpaceId::Interior => Ok(&self.interior_vertices),
            SubIndexSpaceId::Boundary => self
                .boundary_vertices
                .as_ref()
                .ok_or(MeshError::IndexSpaceNotComputed("boundary vertices")),
        }
    }

    pub fn has_boundary_vertices(&self) -> bool {
        self.boundary_vertices.is_some()
    }
}
