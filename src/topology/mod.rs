//! Top-level module for mesh topology abstractions.
//!
//! This module provides the generic, mesh-agnostic layer the PIC facade is
//! built on:
//! - [`point::PointId`], the opaque entity handle
//! - the [`store::EntityStore`] trait and its in-memory implementation
//! - [`index_space::IndexSpace`], the materialized result of filtering an
//!   entity set
//!
//! Nothing here knows what a vertex or a cell is; entity kinds are identified
//! by topological dimension only.

pub mod handle;
pub mod index_space;
pub mod point;
pub mod store;

pub use handle::EntityHandle;
pub use index_space::IndexSpace;
pub use point::PointId;
pub use store::{EntitySet, EntityStore, InMemoryEntityStore};

#[cfg(test)]
mod tests;
