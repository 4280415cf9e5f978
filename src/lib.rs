#![cfg_attr(docsrs, feature(doc_cfg))]
//! # pic-mesh
//!
//! pic-mesh manages the entities of a particle-in-cell simulation mesh
//! (vertices, cells and the connectivity between them) and the *derived
//! index spaces* that physics kernels iterate: interior cells, boundary
//! cells, interior vertices and, on request, boundary vertices.
//!
//! ## Layers
//! - [`topology`]: a generic entity store. Entities are registered per
//!   topological domain and dimension; connectivity is recorded downward and
//!   closed upward when a domain is initialized.
//! - [`pic`]: the PIC specialization. [`pic::PicMesh`] creates vertices and
//!   cells, runs the per-kind classifier once in [`pic::PicMesh::init`], and
//!   serves the cached index spaces by reference.
//!
//! ## Lifecycle
//! Build, initialize once, then read. After `init()` the mesh is immutable
//! and `Send + Sync`, so any number of reader threads may share it.
//!
//! ## Invariant checking
//! Debug builds (or the `strict-invariants` / `check-invariants` features)
//! validate the derived spaces at the end of `init()` and panic on violation.
//! [`pic::MeshConfig::check_invariants`] runs the same checks in any build and
//! returns the error instead.

pub mod debug_invariants;
pub mod mesh_error;
pub mod pic;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshError;
    pub use crate::pic::{
        CellId, Classify, EntityRef, EntityType, IndexSpaceId, IndexSpaces, MeshConfig,
        PicMesh, Point, SubIndexSpaceId, VertexId,
    };
    pub use crate::topology::index_space::IndexSpace;
    pub use crate::topology::point::PointId;
    pub use crate::topology::store::{EntitySet, EntityStore, InMemoryEntityStore};
}
