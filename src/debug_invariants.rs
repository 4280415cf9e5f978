//! Self-checks for the mesh's internal consistency.
//!
//! Types that cache derived state (the entity store's transposed
//! connectivity, the PIC mesh's index spaces) implement [`DebugInvariants`].
//! The checks are always callable through
//! [`validate_invariants`](DebugInvariants::validate_invariants); the
//! panicking form only fires when [`invariants_enabled`] is true.

use crate::mesh_error::MeshError;

/// Consistency checks over a type's cached state.
pub trait DebugInvariants {
    /// Panic on the first violation, if invariant checking is compiled in.
    fn debug_assert_invariants(&self);

    /// Run every check and return the first violation.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Whether [`debug_invariants!`](crate::debug_invariants) checks are compiled
/// into this build.
pub const fn invariants_enabled() -> bool {
    cfg!(any(
        debug_assertions,
        feature = "strict-invariants",
        feature = "check-invariants"
    ))
}

/// Evaluate a `Result<(), MeshError>` check and panic with `owner` as context
/// when it fails. A no-op unless [`invariants_enabled`].
#[macro_export]
macro_rules! debug_invariants {
    ($check:expr, $owner:literal) => {
        if $crate::debug_invariants::invariants_enabled() {
            if let Err(err) = $check {
                panic!(concat!("[invariants] ", $owner, ": {}"), err);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl DebugInvariants for Broken {
        fn debug_assert_invariants(&self) {
            crate::debug_invariants!(self.validate_invariants(), "Broken");
        }

        fn validate_invariants(&self) -> Result<(), MeshError> {
            Err(MeshError::NotInitialized)
        }
    }

    #[test]
    fn validate_reports_without_panicking() {
        assert_eq!(Broken.validate_invariants(), Err(MeshError::NotInitialized));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "[invariants] Broken")]
    fn assert_panics_in_debug_builds() {
        assert!(invariants_enabled());
        Broken.debug_assert_invariants();
    }
}
