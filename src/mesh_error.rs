//! MeshError: unified error type for pic-mesh public APIs
//!
//! Every fallible operation in the crate reports through this enum instead of
//! panicking. The variants fall into three groups: programmer/configuration
//! errors (unknown ids, lifecycle misuse), precondition violations on entity
//! construction, and resource exhaustion.

use crate::topology::point::PointId;
use thiserror::Error;

/// Unified error type for mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Attempted to construct a PointId with a zero value (invalid).
    #[error("PointId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidPointId,

    // --- configuration / programmer errors ---
    /// An index-space identifier outside the known set.
    #[error("unknown index space `{0}`")]
    UnknownIndexSpace(usize),
    /// A derived index space was queried before `init()`.
    #[error("derived index spaces are not available before init()")]
    NotInitialized,
    /// `init()` was called on a mesh that is already initialized.
    #[error("mesh is already initialized; init() may only run once")]
    AlreadyInitialized,
    /// Entity creation after `init()`.
    #[error("mesh is frozen after init(); entities can no longer be created")]
    MeshFrozen,
    /// A derived index space that this mesh was configured not to compute.
    #[error("index space `{0}` was not computed for this mesh")]
    IndexSpaceNotComputed(&'static str),
    /// A topological domain outside `0..num_domains`.
    #[error("unknown topological domain `{0}`")]
    UnknownDomain(usize),
    /// Adjacency that only exists after domain finalization was requested early.
    #[error("domain `{0}` has not been initialized")]
    DomainNotInitialized(usize),
    /// A finalized domain was mutated or finalized again.
    #[error("domain `{0}` is already initialized")]
    DomainAlreadyInitialized(usize),
    /// A topological dimension the store was not built for.
    #[error("dimension {dimension} exceeds the store's maximum dimension {max}")]
    DimensionOutOfRange { dimension: usize, max: usize },
    /// Connectivity between a dimension and itself.
    #[error("invalid connectivity {from} -> {to}")]
    InvalidConnectivity { from: usize, to: usize },
    /// An entity registered twice in the same domain.
    #[error("entity `{0}` is already registered")]
    EntityAlreadyRegistered(PointId),

    // --- precondition violations ---
    /// A cell was created from an empty vertex list.
    #[error("incidence list must not be empty")]
    EmptyIncidence,
    /// A handle that does not refer to an entity of this mesh.
    #[error("dangling entity reference `{0}`")]
    DanglingEntity(PointId),
    /// The same entity appears more than once in an incidence list.
    #[error("entity `{0}` appears more than once in the incidence list")]
    DuplicateIncidence(PointId),
    /// An entity was used where an entity of another dimension was expected.
    #[error("entity `{id}` has dimension {found}, expected {expected}")]
    KindMismatch {
        id: PointId,
        expected: usize,
        found: usize,
    },

    // --- resource exhaustion ---
    /// Growing entity storage failed.
    #[error("allocation failed while growing {0}")]
    AllocationFailed(&'static str),

    // --- invariant violations ---
    /// An entity landed in both the interior and the boundary index space.
    #[error("entity `{0}` is classified as both interior and boundary")]
    ClassificationOverlap(PointId),
    /// An entity landed in neither derived index space.
    #[error("entity `{0}` is missing from the derived index spaces")]
    ClassificationGap(PointId),
    /// A connectivity entry without its transpose.
    #[error("missing mirror for adjacency {from} -> {to}")]
    MissingMirror { from: PointId, to: PointId },
}
