//! Particle-in-cell mesh specialization.
//!
//! A PIC mesh has two entity kinds, vertices and cells, living in a single
//! topological domain with cell↔vertex connectivity. On top of the primary
//! entity sets it derives interior and domain-boundary index spaces, which
//! physics kernels iterate instead of testing every entity themselves.

pub mod classify;
pub mod config;
pub mod entity;
pub mod index_space;
pub mod mesh;

pub use classify::{Classification, Classify, classify};
pub use config::MeshConfig;
pub use entity::{Cell, CellId, EntityKind, EntityRef, EntityType, MeshEntity, Point, Vertex, VertexId};
pub use index_space::{DerivedIndexSpaces, IndexSpaceId, IndexSpaces, SubIndexSpaceId};
pub use mesh::PicMesh;
