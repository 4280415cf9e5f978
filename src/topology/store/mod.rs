pub mod entity_set;
pub mod in_memory;
pub mod store_trait;

// Re-export the core trait and in-memory impl at top level
pub use entity_set::EntitySet;
pub use in_memory::InMemoryEntityStore;
pub use store_trait::EntityStore;
