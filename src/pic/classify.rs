//! Per-kind interior / domain-boundary classification.
//!
//! Each entity kind supplies its own [`Classify`] impl; [`MeshEntity`]
//! dispatches to them with an exhaustive `match`. There is no catch-all
//! implementation, so classifying a kind without a classifier is a compile
//! error rather than a runtime failure:
//!
//! ```compile_fail
//! use pic_mesh::pic::classify::classify;
//! struct Edge;
//! classify(&Edge); // Edge has no Classify impl
//! ```

use crate::pic::entity::{Cell, MeshEntity, Vertex};

/// Outcome of classifying one entity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Classification {
    Interior,
    DomainBoundary,
}

/// Boundary predicates for one entity kind.
///
/// `is_interior` is its own predicate rather than a provided negation, so a
/// kind may later admit entities that are neither.
pub trait Classify {
    /// Whether the entity lies on the domain boundary.
    fn is_domain_boundary(&self) -> bool;

    /// Whether the entity lies strictly inside the domain.
    fn is_interior(&self) -> bool;
}

impl<const D: usize> Classify for Vertex<D> {
    #[inline]
    fn is_domain_boundary(&self) -> bool {
        self.entity_type().is_domain_boundary()
    }

    #[inline]
    fn is_interior(&self) -> bool {
        !self.entity_type().is_domain_boundary()
    }
}

impl Classify for Cell {
    #[inline]
    fn is_domain_boundary(&self) -> bool {
        self.entity_type().is_domain_boundary()
    }

    #[inline]
    fn is_interior(&self) -> bool {
        !self.entity_type().is_domain_boundary()
    }
}

impl<const D: usize> Classify for MeshEntity<D> {
    fn is_domain_boundary(&self) -> bool {
        match self {
            MeshEntity::Vertex(v) => v.is_domain_boundary(),
            MeshEntity::Cell(c) => c.is_domain_boundary(),
        }
    }

    fn is_interior(&self) -> bool {
        match self {
            MeshEntity::Vertex(v) => v.is_interior(),
            MeshEntity::Cell(c) => c.is_interior(),
        }
    }
}

/// Classify any entity kind that has a classifier.
pub fn classify<E: Classify + ?Sized>(entity: &E) -> Classification {
    if entity.is_domain_boundary() {
        Classification::DomainBoundary
    } else {
        Classification::Interior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pic::entity::{EntityType, Point};

    #[test]
    fn cells_classify_by_tag() {
        let boundary = Cell::new(2, EntityType::DomainBoundary);
        let interior = Cell::new(2, EntityType::Interior);
        assert!(boundary.is_domain_boundary());
        assert!(!boundary.is_interior());
        assert!(interior.is_interior());
        assert_eq!(classify(&boundary), Classification::DomainBoundary);
        assert_eq!(classify(&interior), Classification::Interior);
    }

    #[test]
    fn vertices_classify_by_tag() {
        let v = Vertex::new(Point::new([0.5]), EntityType::DomainBoundary);
        assert!(v.is_domain_boundary());
        assert!(!v.is_interior());
    }

    #[test]
    fn sum_type_dispatches_to_each_kind() {
        let entities = [
            MeshEntity::Vertex(Vertex::new(Point::new([0.0, 0.0]), EntityType::Interior)),
            MeshEntity::Vertex(Vertex::new(Point::new([1.0, 0.0]), EntityType::DomainBoundary)),
            MeshEntity::Cell(Cell::new(2, EntityType::Interior)),
            MeshEntity::Cell(Cell::new(2, EntityType::DomainBoundary)),
        ];
        let got: Vec<_> = entities.iter().map(classify).collect();
        assert_eq!(
            got,
            vec![
                Classification::Interior,
                Classification::DomainBoundary,
                Classification::Interior,
                Classification::DomainBoundary,
            ]
        );
        for e in &entities {
            assert_ne!(e.is_interior(), e.is_domain_boundary());
        }
    }
}
