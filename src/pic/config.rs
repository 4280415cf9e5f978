//! Construction-time options for a [`PicMesh`](crate::pic::PicMesh).

use serde::{Deserialize, Serialize};

/// Optional behavior toggles for PIC mesh initialization.
///
/// Missing fields deserialize to their defaults, so a config file only needs
/// to name what it changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Also derive the boundary-vertex index space during `init()`.
    ///
    /// Off by default: only interior vertices are derived, and querying
    /// boundary vertices reports `IndexSpaceNotComputed`.
    pub classify_boundary_vertices: bool,
    /// Run the full invariant check at the end of `init()` in every build
    /// profile, returning its error instead of panicking.
    pub check_invariants: bool,
}

impl MeshConfig {
    /// Enable every optional derivation and check.
    pub fn all() -> Self {
        Self {
            classify_boundary_vertices: true,
            check_invariants: true,
        }
    }
}
