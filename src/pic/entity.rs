//! PIC mesh entities and their typed handles.
//!
//! The store keeps every entity as a [`MeshEntity`], a closed sum over the
//! kinds this mesh knows about. Callers hold [`VertexId`] / [`CellId`]
//! handles, which wrap the store's [`PointId`] and cannot be mixed up.

use crate::topology::handle::EntityHandle;
use crate::topology::point::PointId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in `D`-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<const D: usize>([f64; D]);

impl<const D: usize> Point<D> {
    #[inline]
    pub const fn new(coords: [f64; D]) -> Self {
        Self(coords)
    }

    #[inline]
    pub const fn coords(&self) -> &[f64; D] {
        &self.0
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self([0.0; D])
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self(coords)
    }
}

impl<const D: usize> std::ops::Index<usize> for Point<D> {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.0[axis]
    }
}

/// Entity-type tag carried by every vertex and cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// Strictly inside the computational domain.
    #[default]
    Interior,
    /// On the boundary of the computational domain.
    DomainBoundary,
}

impl EntityType {
    /// Predicate behind every per-kind boundary classifier.
    #[inline]
    pub fn is_domain_boundary(self) -> bool {
        self == EntityType::DomainBoundary
    }
}

/// The kinds of entity a PIC mesh stores.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    Vertex,
    Cell,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Vertex => "vertex",
            EntityKind::Cell => "cell",
        })
    }
}

/// A mesh vertex: position plus type tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex<const D: usize> {
    position: Point<D>,
    entity_type: EntityType,
}

impl<const D: usize> Vertex<D> {
    pub fn new(position: Point<D>, entity_type: EntityType) -> Self {
        Self {
            position,
            entity_type,
        }
    }

    #[inline]
    pub fn position(&self) -> &Point<D> {
        &self.position
    }

    #[inline]
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }
}

/// A mesh cell. Its vertices live in the store's connectivity, not here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cell {
    entity_type: EntityType,
    dimension: usize,
}

impl Cell {
    pub fn new(dimension: usize, entity_type: EntityType) -> Self {
        Self {
            entity_type,
            dimension,
        }
    }

    #[inline]
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// Topological dimension (the mesh dimension it was created in).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Every entity kind a PIC mesh stores.
///
/// Adding a variant here forces every `match` over it, including the
/// classifier, to handle the new kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeshEntity<const D: usize> {
    Vertex(Vertex<D>),
    Cell(Cell),
}

impl<const D: usize> MeshEntity<D> {
    #[inline]
    pub fn kind(&self) -> EntityKind {
        match self {
            MeshEntity::Vertex(_) => EntityKind::Vertex,
            MeshEntity::Cell(_) => EntityKind::Cell,
        }
    }

    #[inline]
    pub fn entity_type(&self) -> EntityType {
        match self {
            MeshEntity::Vertex(v) => v.entity_type(),
            MeshEntity::Cell(c) => c.entity_type(),
        }
    }

    pub fn as_vertex(&self) -> Option<&Vertex<D>> {
        match self {
            MeshEntity::Vertex(v) => Some(v),
            MeshEntity::Cell(_) => None,
        }
    }

    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            MeshEntity::Cell(c) => Some(c),
            MeshEntity::Vertex(_) => None,
        }
    }
}

macro_rules! entity_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(pub(crate) PointId);

        impl $name {
            /// The store-level id behind this handle.
            #[inline]
            pub fn point(self) -> PointId {
                self.0
            }
        }

        impl EntityHandle for $name {
            #[inline]
            fn point(self) -> PointId {
                self.0
            }

            #[inline]
            fn from_point(p: PointId) -> Self {
                $name(p)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0.get()).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_handle!(
    /// Handle to a vertex owned by a [`PicMesh`](crate::pic::PicMesh).
    VertexId
);
entity_handle!(
    /// Handle to a cell owned by a [`PicMesh`](crate::pic::PicMesh).
    CellId
);

/// A handle to any entity, used by the adjacency queries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityRef {
    Vertex(VertexId),
    Cell(CellId),
}

impl EntityRef {
    #[inline]
    pub fn kind(self) -> EntityKind {
        match self {
            EntityRef::Vertex(_) => EntityKind::Vertex,
            EntityRef::Cell(_) => EntityKind::Cell,
        }
    }

    #[inline]
    pub fn point(self) -> PointId {
        match self {
            EntityRef::Vertex(v) => v.0,
            EntityRef::Cell(c) => c.0,
        }
    }
}

impl From<VertexId> for EntityRef {
    fn from(v: VertexId) -> Self {
        EntityRef::Vertex(v)
    }
}

impl From<CellId> for EntityRef {
    fn from(c: CellId) -> Self {
        EntityRef::Cell(c)
    }
}
